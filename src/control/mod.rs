pub mod common;
pub mod engine;
pub mod stage_controller;
pub mod string;
pub mod wall;
