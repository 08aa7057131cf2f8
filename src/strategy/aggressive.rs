use super::*;
use crate::listener::Listener;

pub struct AggressiveBuilder;

impl StrategyBuilder for AggressiveBuilder {
    fn get_default_config(&self) -> Config {
        Config {
            name: "Aggressive".to_string(),
        }
    }

    fn create(&self, config: Config) -> Box<dyn Strategy> {
        Box::new(Aggressive::from_config(config))
    }
}

// sheds singletons first: discards the least duplicated face,
// ties broken by the first face encountered in table order
pub struct Aggressive {
    config: Config,
    seat: Seat,
}

impl Aggressive {
    pub fn from_config(config: Config) -> Self {
        Self { config, seat: 0 }
    }

    pub fn new() -> Self {
        Self::from_config(AggressiveBuilder {}.get_default_config())
    }
}

impl Strategy for Aggressive {
    fn init(&mut self, seat: Seat) {
        self.seat = seat;
    }

    fn select_discard(&mut self, stg: &Stage) -> Option<Tile> {
        let pl = &stg.players[self.seat];
        let mut best: Option<(usize, Tile)> = None;
        for ti in 0..TYPE {
            for ni in 1..TNUM {
                let c = pl.hand[ti][ni];
                if c == 0 {
                    continue;
                }
                match best {
                    Some((n, _)) if n <= c => {}
                    _ => best = Some((c, Tile(ti, ni))),
                }
            }
        }
        best.map(|(_, t)| t)
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}

impl Listener for Aggressive {}

#[cfg(test)]
use crate::control::string::tile_table_from_string;

#[test]
fn test_aggressive_sheds_singletons() {
    let mut stg = Stage::default();
    stg.players[2].hand = tile_table_from_string("b11c222d3z44").unwrap();

    let mut st = Aggressive::new();
    st.init(2);
    assert_eq!(st.select_discard(&stg), Some(Tile(TD, 3)));
}

#[test]
fn test_aggressive_tie_break() {
    let mut stg = Stage::default();
    stg.players[0].hand = tile_table_from_string("b11c22").unwrap();

    let mut st = Aggressive::new();
    st.init(0);
    // ties broken by the first face in iteration order
    assert_eq!(st.select_discard(&stg), Some(Tile(TB, 1)));
}
