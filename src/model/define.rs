// type aliases
pub type Seat = usize; // seat number (0..3)
pub type Type = usize; // tile type part (bamboo, characters, dots, honors, bonus)
pub type Tnum = usize; // tile number part (1..9 for suits)
pub type Index = usize; // other indices
pub type Point = i32; // score points

// Number
pub const SEAT: usize = 4; // number of seats
pub const TYPE: usize = 5; // number of tile type parts
pub const TNUM: usize = 10; // number of tile number parts (index 0 unused)
pub const TILE: usize = 4; // copies of each tile face

// Type Index
pub const TB: usize = 0; // Type: Bamboo
pub const TC: usize = 1; // Type: Characters
pub const TD: usize = 2; // Type: Dots
pub const TZ: usize = 3; // Type: honors (winds, dragons)
pub const TF: usize = 4; // Type: bonus (flowers, seasons)

// Tnum Index (honors)
pub const WE: usize = 1; // Wind:   East
pub const WS: usize = 2; // Wind:   South
pub const WW: usize = 3; // Wind:   West
pub const WN: usize = 4; // Wind:   North
pub const DR: usize = 5; // Dragon: Red
pub const DG: usize = 6; // Dragon: Green
pub const DW: usize = 7; // Dragon: White

// Tnum Index (bonus)
pub const FL1: usize = 1; // Flower: 1 (flowers occupy 1..=4)
pub const SE1: usize = 5; // Season: 1 (seasons occupy 5..=8)

// Hand sizes
pub const HAND_TILES: usize = 13; // concealed size between discard and draw
pub const WIN_TILES: usize = 14; // concealed size in the draw-before-discard window
