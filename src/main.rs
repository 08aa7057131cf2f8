#![warn(rust_2018_idioms)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::new_without_default)]

mod app;
mod control;
mod hand;
mod listener;
mod model;
mod strategy;
mod util;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    app::EngineApp::new(args).run();
}
