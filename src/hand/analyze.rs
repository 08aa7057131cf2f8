use crate::model::*;

// [Hand analysis]
// pure functions over the concealed tile table

pub fn count_tiles(tt: &TileTable) -> usize {
    let mut n = 0;
    for row in tt {
        n += row[1..].iter().sum::<usize>();
    }
    n
}

// one candidate per face holding at least 3 copies
pub fn possible_melds(tt: &TileTable) -> Vec<Tile> {
    let mut res = vec![];
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            if tt[ti][ni] >= 3 {
                res.push(Tile(ti, ni));
            }
        }
    }
    res
}

// one candidate per face holding all 4 copies
pub fn possible_kongs(tt: &TileTable) -> Vec<Tile> {
    let mut res = vec![];
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            if tt[ti][ni] == TILE {
                res.push(Tile(ti, ni));
            }
        }
    }
    res
}

// size-only terminal check: 14 concealed tiles, no shape validation
pub fn is_complete_size(tt: &TileTable) -> bool {
    count_tiles(tt) == WIN_TILES
}

// strict terminal check: 14 concealed tiles forming 4 same-face triplets + 1 pair
pub fn is_complete_sets(tt: &TileTable) -> bool {
    if count_tiles(tt) != WIN_TILES {
        return false;
    }

    let mut pairs = 0;
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            match tt[ti][ni] {
                0 | 3 => {}
                2 => pairs += 1,
                _ => return false,
            }
        }
    }
    pairs == 1
}

// the 13 designated terminal/honor faces
pub const ORPHAN_FACES: [Tile; 13] = [
    Tile(TB, 1),
    Tile(TB, 9),
    Tile(TC, 1),
    Tile(TC, 9),
    Tile(TD, 1),
    Tile(TD, 9),
    Tile(TZ, WE),
    Tile(TZ, WS),
    Tile(TZ, WW),
    Tile(TZ, WN),
    Tile(TZ, DR),
    Tile(TZ, DG),
    Tile(TZ, DW),
];

// presence of at least one copy of each face, not exclusivity of the rest
pub fn has_thirteen_orphans(tt: &TileTable) -> bool {
    ORPHAN_FACES.iter().all(|t| tt[t.0][t.1] > 0)
}

// the tile breaks no candidate meld or kong
pub fn is_safe_discard(tile: Tile, melds: &[Tile], kongs: &[Tile]) -> bool {
    !melds.contains(&tile) && !kongs.contains(&tile)
}

#[cfg(test)]
use crate::control::string::tile_table_from_string;

#[test]
fn test_possible_melds() {
    // one suited family only: three d4 copies yield exactly one meld candidate
    let tt = tile_table_from_string("d123444567d89").unwrap();
    assert_eq!(possible_melds(&tt), vec![Tile(TD, 4)]);
    assert_eq!(possible_kongs(&tt), vec![]);

    let tt = tile_table_from_string("d4444z111").unwrap();
    assert_eq!(possible_melds(&tt), vec![Tile(TD, 4), Tile(TZ, WE)]);
    assert_eq!(possible_kongs(&tt), vec![Tile(TD, 4)]);
}

#[test]
fn test_complete_sets() {
    assert!(is_complete_sets(
        &tile_table_from_string("b111222333444c11").unwrap()
    ));
    // two pairs
    assert!(!is_complete_sets(
        &tile_table_from_string("b111222333c4455z1").unwrap()
    ));
    // 13 tiles
    assert!(!is_complete_sets(
        &tile_table_from_string("b111222333444c1").unwrap()
    ));
    // size check alone accepts any 14 tiles
    assert!(is_complete_size(
        &tile_table_from_string("b123456789c1234z1").unwrap()
    ));
}

#[test]
fn test_thirteen_orphans() {
    let full = "b19c19d19z1234567";
    let tt = tile_table_from_string(full).unwrap();
    assert!(has_thirteen_orphans(&tt));

    // removing any one of the 13 faces breaks the predicate
    for skip in &ORPHAN_FACES {
        let mut tt = tt;
        tt[skip.0][skip.1] = 0;
        assert!(!has_thirteen_orphans(&tt));
    }

    // presence-only: extra copies and extra tiles do not matter
    let tt = tile_table_from_string("b199c19d19z1234567b5").unwrap();
    assert!(has_thirteen_orphans(&tt));
}

#[test]
fn test_safe_discard() {
    let tt = tile_table_from_string("b111c22d345").unwrap();
    let melds = possible_melds(&tt);
    let kongs = possible_kongs(&tt);
    assert!(!is_safe_discard(Tile(TB, 1), &melds, &kongs));
    assert!(is_safe_discard(Tile(TC, 2), &melds, &kongs));
    assert!(is_safe_discard(Tile(TD, 3), &melds, &kongs));
}
