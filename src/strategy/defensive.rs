use super::*;
use crate::hand::{is_safe_discard, possible_kongs, possible_melds};
use crate::listener::Listener;

pub struct DefensiveBuilder;

impl StrategyBuilder for DefensiveBuilder {
    fn get_default_config(&self) -> Config {
        Config {
            name: "Defensive".to_string(),
        }
    }

    fn create(&self, config: Config) -> Box<dyn Strategy> {
        Box::new(Defensive::from_config(config))
    }
}

// scans the full hand and keeps every tile bound into a candidate grouping;
// same contract as Standard, retained as a separate binding
pub struct Defensive {
    config: Config,
    seat: Seat,
}

impl Defensive {
    pub fn from_config(config: Config) -> Self {
        Self { config, seat: 0 }
    }

    pub fn new() -> Self {
        Self::from_config(DefensiveBuilder {}.get_default_config())
    }
}

impl Strategy for Defensive {
    fn init(&mut self, seat: Seat) {
        self.seat = seat;
    }

    fn select_discard(&mut self, stg: &Stage) -> Option<Tile> {
        let pl = &stg.players[self.seat];
        let melds = possible_melds(&pl.hand);
        let kongs = possible_kongs(&pl.hand);

        let mut safe = vec![];
        for ti in 0..TYPE {
            for ni in 1..TNUM {
                let t = Tile(ti, ni);
                if pl.hand[ti][ni] > 0 && is_safe_discard(t, &melds, &kongs) {
                    safe.push(t);
                }
            }
        }
        safe.first().copied()
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}

impl Listener for Defensive {}

#[cfg(test)]
use crate::control::string::tile_table_from_string;

#[test]
fn test_defensive_keeps_groupings() {
    let mut stg = Stage::default();
    stg.players[1].hand = tile_table_from_string("b111c2222d345z55").unwrap();

    let mut st = Defensive::new();
    st.init(1);
    // b1 sits in a meld candidate, c2 in a kong candidate
    assert_eq!(st.select_discard(&stg), Some(Tile(TD, 3)));
}
