// pure hand analysis and per-round scoring
mod analyze;
mod score;

pub use analyze::*;
pub use score::*;
