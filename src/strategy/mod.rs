mod aggressive;
mod defensive;
mod standard;

use std::fmt;

use crate::error;
use crate::listener::Listener;
use crate::model::*;

pub use aggressive::Aggressive;
pub use defensive::Defensive;
pub use standard::Standard;

#[derive(Clone)]
pub struct Config {
    pub name: String,
}

// Strategy trait
// one implementation is bound per seat for the whole match
pub trait Strategy: Listener + Send {
    // round start initialization
    fn init(&mut self, _seat: Seat) {}

    // discard suggestion for the seat's current hand
    // None means no suggestion; the engine falls back to the first concealed tile
    fn select_discard(&mut self, stg: &Stage) -> Option<Tile>;

    // for display of the bound strategy
    fn get_config(&self) -> &Config;
}

impl fmt::Debug for dyn Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get_config().name)
    }
}

trait StrategyBuilder {
    fn get_default_config(&self) -> Config;
    fn create(&self, config: Config) -> Box<dyn Strategy>;
}

pub fn create_strategy(name: &str) -> Box<dyn Strategy> {
    let builders: Vec<Box<dyn StrategyBuilder>> = vec![
        Box::new(standard::StandardBuilder {}),
        Box::new(aggressive::AggressiveBuilder {}),
        Box::new(defensive::DefensiveBuilder {}),
    ];

    for b in &builders {
        let conf = b.get_default_config();
        if name == conf.name {
            return b.create(conf);
        }
    }

    error!("unknown strategy name: {}", name);
    std::process::exit(0);
}
