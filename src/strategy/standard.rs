use super::*;
use crate::hand::{is_safe_discard, possible_kongs, possible_melds};
use crate::listener::Listener;

pub struct StandardBuilder;

impl StrategyBuilder for StandardBuilder {
    fn get_default_config(&self) -> Config {
        Config {
            name: "Standard".to_string(),
        }
    }

    fn create(&self, config: Config) -> Box<dyn Strategy> {
        Box::new(Standard::from_config(config))
    }
}

// discards the first concealed tile outside every detected grouping
pub struct Standard {
    config: Config,
    seat: Seat,
}

impl Standard {
    pub fn from_config(config: Config) -> Self {
        Self { config, seat: 0 }
    }

    pub fn new() -> Self {
        Self::from_config(StandardBuilder {}.get_default_config())
    }
}

impl Strategy for Standard {
    fn init(&mut self, seat: Seat) {
        self.seat = seat;
    }

    fn select_discard(&mut self, stg: &Stage) -> Option<Tile> {
        let pl = &stg.players[self.seat];
        let melds = possible_melds(&pl.hand);
        let kongs = possible_kongs(&pl.hand);

        for ti in 0..TYPE {
            for ni in 1..TNUM {
                let t = Tile(ti, ni);
                if pl.hand[ti][ni] > 0 && is_safe_discard(t, &melds, &kongs) {
                    return Some(t);
                }
            }
        }
        None // every tile is part of a candidate grouping
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}

impl Listener for Standard {}

#[cfg(test)]
use crate::control::string::tile_table_from_string;

#[test]
fn test_standard_skips_groupings() {
    let mut stg = Stage::default();
    stg.players[0].hand = tile_table_from_string("b111222333444c11").unwrap();

    let mut st = Standard::new();
    st.init(0);
    // the pair is the first face outside every meld candidate
    assert_eq!(st.select_discard(&stg), Some(Tile(TC, 1)));
}

#[test]
fn test_standard_all_protected() {
    let mut stg = Stage::default();
    stg.players[0].hand = tile_table_from_string("b111222333444").unwrap();

    let mut st = Standard::new();
    st.init(0);
    // every tile belongs to a candidate grouping: the engine falls back
    assert_eq!(st.select_discard(&stg), None);
}
