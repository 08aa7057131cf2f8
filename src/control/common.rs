use crate::model::*;

// [TileTable]
#[inline]
pub fn count_tile(tt: &TileTable, t: Tile) -> usize {
    tt[t.0][t.1]
}

#[inline]
pub fn inc_tile(tt: &mut TileTable, t: Tile) {
    tt[t.0][t.1] += 1;
}

// stale references decrement nothing
#[inline]
pub fn dec_tile(tt: &mut TileTable, t: Tile) -> bool {
    if tt[t.0][t.1] == 0 {
        return false;
    }
    tt[t.0][t.1] -= 1;
    true
}

pub fn tiles_to_tile_table(tiles: &[Tile]) -> TileTable {
    let mut tt = TileTable::default();
    for &t in tiles {
        inc_tile(&mut tt, t);
    }
    tt
}

// same face for every tile of a candidate grouping
pub fn is_same_face(tiles: &[Tile]) -> bool {
    match tiles.first() {
        Some(&first) => tiles.iter().all(|&t| t == first),
        None => false,
    }
}
