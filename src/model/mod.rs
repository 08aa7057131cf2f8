// data model of the simulator
mod define;
mod event;
mod group;
mod player;
mod stage;
mod tile;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use define::*;
pub use event::*;
pub use group::*;
pub use player::*;
pub use stage::*;
pub use tile::*;
