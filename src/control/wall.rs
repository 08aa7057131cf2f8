use rand::prelude::*;

use crate::model::*;

// 3 suits x 9 ranks x 4 + 7 honors x 4 + 8 bonus faces x 4
pub const WALL_TILES: usize = (3 * 9 + 7 + 8) * TILE;

// the fixed multiset of all tiles in play, in face order
pub fn create_inventory() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(WALL_TILES);
    for ti in [TB, TC, TD].iter() {
        for ni in 1..TNUM {
            for _ in 0..TILE {
                tiles.push(Tile(*ti, ni));
            }
        }
    }
    for ni in WE..=DW {
        for _ in 0..TILE {
            tiles.push(Tile(TZ, ni));
        }
    }
    for ni in 1..=8 {
        for _ in 0..TILE {
            tiles.push(Tile(TF, ni));
        }
    }
    tiles
}

// shuffled copy of the inventory, the only randomness source in the system
pub fn create_wall(seed: u64) -> Vec<Tile> {
    let mut wall = create_inventory();
    let mut rng: rand::rngs::StdRng = rand::SeedableRng::seed_from_u64(seed);
    wall.shuffle(&mut rng);
    wall
}

#[test]
fn test_wall_inventory() {
    use super::common::tiles_to_tile_table;

    let wall = create_wall(7);
    assert_eq!(wall.len(), WALL_TILES);
    assert_eq!(wall.len(), 168);

    // exactly 4 copies of every face, none created or destroyed by the shuffle
    let tt = tiles_to_tile_table(&wall);
    for ti in [TB, TC, TD].iter() {
        for ni in 1..TNUM {
            assert_eq!(tt[*ti][ni], TILE);
        }
    }
    for ni in WE..=DW {
        assert_eq!(tt[TZ][ni], TILE);
    }
    for ni in 1..=8 {
        assert_eq!(tt[TF][ni], TILE);
    }
}

#[test]
fn test_wall_deterministic() {
    assert_eq!(create_wall(42), create_wall(42));
    assert_ne!(create_wall(42), create_wall(43));
}
