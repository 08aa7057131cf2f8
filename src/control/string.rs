use super::common::tiles_to_tile_table;
use crate::model::*;
use crate::util::common::Res;

pub fn tile_type_from_char(ch: char) -> Res<Type> {
    match ch {
        'b' => Ok(TB),
        'c' => Ok(TC),
        'd' => Ok(TD),
        'z' => Ok(TZ),
        'f' => Ok(TF),
        _ => Err(format!("invalid tile type char: {}", ch))?,
    }
}

pub fn tile_type_to_char(ti: Type) -> char {
    match ti {
        TB => 'b',
        TC => 'c',
        TD => 'd',
        TZ => 'z',
        TF => 'f',
        _ => panic!("invalid tile type index: {}", ti),
    }
}

pub fn tile_number_from_char(ch: char) -> Res<Tnum> {
    match ch.to_digit(10) {
        Some(i) if i >= 1 && (i as usize) < TNUM => Ok(i as Tnum),
        _ => Err(format!("invalid tile number char: {}", ch))?,
    }
}

// "b123z55" -> [b1, b2, b3, z5, z5]
pub fn tiles_from_string(exp: &str) -> Res<Vec<Tile>> {
    let mut tiles = vec![];
    let mut ti = None;
    for ch in exp.chars() {
        match ch {
            'b' | 'c' | 'd' | 'z' | 'f' => ti = Some(tile_type_from_char(ch)?),
            '1'..='9' => match ti {
                Some(ti) => tiles.push(Tile(ti, tile_number_from_char(ch)?)),
                None => Err("tile number before tile type")?,
            },
            _ => Err(format!("invalid char: '{}'", ch))?,
        }
    }
    Ok(tiles)
}

pub fn tiles_to_string(tiles: &[Tile]) -> String {
    let mut res = String::new();
    let mut last_ti = TYPE; // out of range
    for t in tiles {
        if t.0 != last_ti {
            last_ti = t.0;
            res.push(tile_type_to_char(t.0));
        }
        res.push_str(&t.1.to_string());
    }
    res
}

pub fn tile_table_from_string(exp: &str) -> Res<TileTable> {
    Ok(tiles_to_tile_table(&tiles_from_string(exp)?))
}

#[test]
fn test_tiles_from_string() {
    let tiles = tiles_from_string("b123z567f1").unwrap();
    assert_eq!(
        tiles,
        vec![Tile(TB, 1), Tile(TB, 2), Tile(TB, 3), Tile(TZ, DR), Tile(TZ, DG), Tile(TZ, DW), Tile(TF, FL1)]
    );
    assert_eq!(tiles_to_string(&tiles), "b123z567f1");
}

#[test]
fn test_tiles_from_string_invalid() {
    assert!(tiles_from_string("3b").is_err());
    assert!(tiles_from_string("x1").is_err());
    assert!(tiles_from_string("b0").is_err());
}
