use super::analyze::has_thirteen_orphans;
use crate::model::*;

pub const MELD_POINTS: Point = 2;
pub const KONG_POINTS: Point = 8;
pub const BONUS_POINTS: Point = 4;
pub const HEAVENLY_POINTS: Point = 100;
pub const EARTHLY_POINTS: Point = 50;
pub const ORPHANS_POINTS: Point = 200;

// structural tally from exposed groupings and bonus tiles
pub fn calc_base_points(pl: &Player) -> Point {
    pl.melds.len() as Point * MELD_POINTS
        + pl.kongs.len() as Point * KONG_POINTS
        + pl.bonus.len() as Point * BONUS_POINTS
}

// fresh per-round scores for every seat, replacing the previous round's values
pub fn calc_round_scores(stg: &Stage) -> [Point; SEAT] {
    let mut scores = [0; SEAT];
    for s in 0..SEAT {
        scores[s] = calc_base_points(&stg.players[s]);
    }
    scores
}

// winner's points: structural tally plus the special bonuses,
// applied only at the moment of point calculation
pub fn calc_win_points(stg: &Stage, seat: Seat, rule: &Rule) -> Point {
    let pl = &stg.players[seat];
    let mut points = calc_base_points(pl);
    if !rule.special_bonus {
        return points;
    }

    if stg.is_dealer(seat) {
        if stg.turn_count == 0 {
            points += HEAVENLY_POINTS; // won on the dealer's very first draw
        } else if stg.turn_count == SEAT {
            points += EARTHLY_POINTS; // won on the dealer's second draw
        }
    }
    if has_thirteen_orphans(&pl.hand) {
        points += ORPHANS_POINTS;
    }

    points
}

#[cfg(test)]
use crate::control::string::{tile_table_from_string, tiles_from_string};

#[test]
fn test_base_points() {
    let mut pl = Player::default();
    assert_eq!(calc_base_points(&pl), 0);

    pl.melds.push(Group {
        step: 0,
        seat: 0,
        group_type: GroupType::Meld,
        tiles: tiles_from_string("b111").unwrap(),
    });
    pl.kongs.push(Group {
        step: 0,
        seat: 0,
        group_type: GroupType::Kong,
        tiles: tiles_from_string("z5555").unwrap(),
    });
    pl.bonus = tiles_from_string("f12").unwrap();
    assert_eq!(calc_base_points(&pl), 2 + 8 + 4 * 2);
}

#[test]
fn test_win_points_bonuses() {
    let rule = Rule::default();
    let mut stg = Stage::default();
    stg.dealer = 1;
    stg.turn_count = 0;
    stg.players[1].hand = tile_table_from_string("b111222333444c11").unwrap();

    // heavenly hand for the dealer on turn 0
    assert_eq!(calc_win_points(&stg, 1, &rule), HEAVENLY_POINTS);

    // earthly hand on the dealer's second draw
    stg.turn_count = SEAT;
    assert_eq!(calc_win_points(&stg, 1, &rule), EARTHLY_POINTS);

    // no positional bonus later on
    stg.turn_count = SEAT + 1;
    assert_eq!(calc_win_points(&stg, 1, &rule), 0);

    // orphans bonus stacks with the structural tally
    stg.players[1].hand = tile_table_from_string("b19c19d19z1234567z7").unwrap();
    stg.players[1].bonus = tiles_from_string("f1").unwrap();
    assert_eq!(calc_win_points(&stg, 1, &rule), ORPHANS_POINTS + BONUS_POINTS);

    // toggled off by configuration
    let rule = Rule {
        special_bonus: false,
        ..Rule::default()
    };
    assert_eq!(calc_win_points(&stg, 1, &rule), BONUS_POINTS);
}
