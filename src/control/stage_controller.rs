use super::common::*;
use crate::listener::Listener;
use crate::model::*;
use crate::strategy::Strategy;

use TileState::*;

#[derive(Debug)]
pub struct StageController {
    stage: Stage,
    strategies: [Box<dyn Strategy>; SEAT],
    listeners: Vec<Box<dyn Listener>>,
}

impl StageController {
    pub fn new(strategies: [Box<dyn Strategy>; SEAT], listeners: Vec<Box<dyn Listener>>) -> Self {
        let stage = Stage::default();
        Self {
            stage,
            strategies,
            listeners,
        }
    }

    pub fn get_stage(&self) -> &Stage {
        &self.stage
    }

    pub fn get_names(&self) -> [String; SEAT] {
        let mut names: [String; SEAT] = Default::default();
        for s in 0..SEAT {
            names[s] = self.strategies[s].get_config().name.clone();
        }
        names
    }

    pub fn handle_event(&mut self, event: &Event) {
        if let Event::New(_) = event {
            for s in 0..SEAT {
                self.strategies[s].init(s);
            }
        }

        let stg = &mut self.stage;
        match event {
            Event::Begin(e) => event_begin(stg, e),
            Event::New(e) => event_new(stg, e),
            Event::Deal(e) => event_deal(stg, e),
            Event::Bonus(e) => event_bonus(stg, e),
            Event::Meld(e) => event_meld(stg, e),
            Event::Discard(e) => event_discard(stg, e),
            Event::Win(e) => event_win(stg, e),
            Event::Draw(e) => event_draw(stg, e),
            Event::End(e) => event_end(stg, e),
        }

        // listeners are notified before strategies
        for l in &mut self.listeners {
            l.notify_event(stg, event);
        }
        for s in &mut self.strategies {
            s.notify_event(stg, event);
        }

        stg.step += 1;
    }

    pub fn select_discard(&mut self, seat: Seat) -> Option<Tile> {
        self.strategies[seat].select_discard(&self.stage)
    }
}

// exactly 3 or 4 same-face tiles, all present in the concealed hand
pub fn check_group(hand: &TileTable, group_type: GroupType, tiles: &[Tile]) -> bool {
    if tiles.len() != group_type.len() {
        return false;
    }
    if !is_same_face(tiles) {
        return false;
    }
    count_tile(hand, tiles[0]) >= tiles.len()
}

// [Event]
fn event_begin(stg: &mut Stage, event: &EventBegin) {
    *stg = Stage::default();
    for s in 0..SEAT {
        stg.players[s].seat = s;
        stg.players[s].name = event.names[s].clone();
    }
}

fn event_new(stg: &mut Stage, event: &EventNew) {
    stg.round = event.round;
    stg.dealer = event.dealer;
    // the dealer receives the first deal of the turn loop
    stg.turn = (event.dealer + SEAT - 1) % SEAT;
    stg.turn_count = 0;
    stg.wall_count = event.wall_count;
    stg.discards.clear();
    stg.tile_states = Default::default();

    for s in 0..SEAT {
        let pl = &mut stg.players[s];
        pl.hand = TileTable::default();
        pl.drawn = None;
        pl.melds.clear();
        pl.kongs.clear();
        pl.bonus.clear();

        for &t in &event.hands[s] {
            inc_tile(&mut pl.hand, t);
        }
    }

    for s in 0..SEAT {
        for &t in &event.hands[s] {
            table_edit(stg, t, U, H(s));
        }
    }
}

fn event_deal(stg: &mut Stage, event: &EventDeal) {
    let s = event.seat;
    let t = event.tile;

    // replacement draws keep the turn position (bonus tiles can be
    // replaced during the initial deal, before the dealer's first turn)
    if !event.is_replacement {
        stg.turn = s;
    }
    stg.wall_count -= 1;

    let pl = &mut stg.players[s];
    pl.drawn = Some(t);
    inc_tile(&mut pl.hand, t);
    table_edit(stg, t, U, H(s));
}

fn event_bonus(stg: &mut Stage, event: &EventBonus) {
    let s = event.seat;
    let t = event.tile;

    let pl = &mut stg.players[s];
    if !dec_tile(&mut pl.hand, t) {
        return; // stale reference, hand unchanged
    }
    if pl.drawn == Some(t) {
        pl.drawn = None;
    }
    pl.bonus.push(t);
    table_edit(stg, t, H(s), B(s));
}

fn event_meld(stg: &mut Stage, event: &EventMeld) {
    let s = event.seat;
    let pl = &mut stg.players[s];
    if !check_group(&pl.hand, event.group_type, &event.tiles) {
        return; // invalid grouping request, hand unchanged
    }

    let group = Group {
        step: stg.step,
        seat: s,
        group_type: event.group_type,
        tiles: event.tiles.clone(),
    };
    let idx = match event.group_type {
        GroupType::Meld => {
            pl.melds.push(group);
            pl.melds.len() - 1
        }
        GroupType::Kong => {
            pl.kongs.push(group);
            pl.kongs.len() - 1
        }
    };

    for &t in &event.tiles {
        dec_tile(&mut stg.players[s].hand, t);
        let new = match event.group_type {
            GroupType::Meld => M(s, idx),
            GroupType::Kong => K(s, idx),
        };
        table_edit(stg, t, H(s), new);
    }
}

fn event_discard(stg: &mut Stage, event: &EventDiscard) {
    let s = event.seat;
    let t = event.tile;

    let pl = &mut stg.players[s];
    if !dec_tile(&mut pl.hand, t) {
        return; // stale reference, hand unchanged
    }
    pl.drawn = None;

    let idx = stg.discards.len();
    stg.discards.push((s, t));
    table_edit(stg, t, H(s), D(idx));
    stg.turn_count += 1;
}

fn event_win(stg: &mut Stage, event: &EventWin) {
    update_scores(stg, &event.scores);
    stg.players[event.seat].wins += 1;
}

fn event_draw(stg: &mut Stage, event: &EventDraw) {
    update_scores(stg, &event.scores);
}

fn event_end(_stg: &mut Stage, _event: &EventEnd) {}

// [Utility]
fn table_edit(stg: &mut Stage, tile: Tile, old: TileState, new: TileState) {
    let te = &mut stg.tile_states[tile.0][tile.1];
    let i = te
        .iter()
        .position(|&x| x == old)
        .unwrap_or_else(|| panic!("tile {} not in state {:?}", tile, old));
    te[i] = new;
    te.sort();
}

// per-round scores replace the previous values
fn update_scores(stg: &mut Stage, scores: &[Point; SEAT]) {
    for s in 0..SEAT {
        stg.players[s].score = scores[s];
    }
}

#[cfg(test)]
use crate::control::string::{tile_table_from_string, tiles_from_string};
#[cfg(test)]
use crate::strategy::create_strategy;

#[test]
fn test_check_group() {
    let tt = tile_table_from_string("b111c2222d33").unwrap();
    let b1 = tiles_from_string("b111").unwrap();
    let c2 = tiles_from_string("c2222").unwrap();
    assert!(check_group(&tt, GroupType::Meld, &b1));
    assert!(check_group(&tt, GroupType::Kong, &c2));
    // wrong arity
    assert!(!check_group(&tt, GroupType::Kong, &b1));
    assert!(!check_group(&tt, GroupType::Meld, &c2));
    // mixed faces
    let mixed = tiles_from_string("b11c2").unwrap();
    assert!(!check_group(&tt, GroupType::Meld, &mixed));
    // not enough copies in hand
    let d3 = tiles_from_string("d333").unwrap();
    assert!(!check_group(&tt, GroupType::Meld, &d3));
}

#[test]
fn test_stale_events_ignored() {
    let mut stg = Stage::default();
    stg.players[0].hand = tile_table_from_string("b11c2").unwrap();
    let before = serde_json::to_value(&stg).unwrap();

    // neither tile is in the concealed hand: both events leave the stage as is
    event_discard(
        &mut stg,
        &EventDiscard {
            seat: 0,
            tile: Tile(TD, 5),
            is_drawn: false,
        },
    );
    event_bonus(
        &mut stg,
        &EventBonus {
            seat: 0,
            tile: Tile(TF, 1),
        },
    );

    assert_eq!(serde_json::to_value(&stg).unwrap(), before);
    assert_eq!(stg.turn_count, 0);
    assert_eq!(stg.players[0].count_hand(), 3);
}

#[test]
fn test_meld_exposure() {
    let strategies = [
        create_strategy("Standard"),
        create_strategy("Standard"),
        create_strategy("Standard"),
        create_strategy("Standard"),
    ];
    let mut ctrl = StageController::new(strategies, vec![]);
    let names = ctrl.get_names();
    ctrl.handle_event(&Event::begin(names));

    let hands = [
        tiles_from_string("b111c2222d3456z55").unwrap(),
        tiles_from_string("d123456789z1234").unwrap(),
        tiles_from_string("b456789b456789c3").unwrap(),
        tiles_from_string("z1122334466777").unwrap(),
    ];
    ctrl.handle_event(&Event::new(0, 0, hands, 116));

    ctrl.handle_event(&Event::meld(
        0,
        GroupType::Meld,
        tiles_from_string("b111").unwrap(),
    ));
    let pl = &ctrl.get_stage().players[0];
    assert_eq!(pl.melds.len(), 1);
    assert_eq!(pl.count_tile(Tile(TB, 1)), 0);
    assert_eq!(pl.count_hand(), 10);
    // all three exposed copies point at meld index 0, the fourth stays undealt
    let ts = &ctrl.get_stage().tile_states[TB][1];
    assert_eq!(ts[..3], [M(0, 0); 3]);
    assert_eq!(ts[3], U);

    // a kong from the same hand lands in the kong container
    ctrl.handle_event(&Event::meld(
        0,
        GroupType::Kong,
        tiles_from_string("c2222").unwrap(),
    ));
    let pl = &ctrl.get_stage().players[0];
    assert_eq!(pl.kongs.len(), 1);
    assert_eq!(pl.count_hand(), 6);
    assert_eq!(ctrl.get_stage().tile_states[TC][2], [K(0, 0); 4]);
}
