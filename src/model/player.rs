use super::*;
use crate::util::common::vec_to_string;

#[derive(Debug, Default, Serialize)]
pub struct Player {
    pub seat: Seat,
    pub name: String,         // bound strategy name
    pub score: Point,         // points of the last concluded round (overwritten, not summed)
    pub wins: usize,          // rounds won over the match
    pub hand: TileTable,      // concealed tiles (5x10 face count table)
    pub drawn: Option<Tile>,  // tile received in the current draw window
    pub melds: Vec<Group>,    // exposed melds
    pub kongs: Vec<Group>,    // exposed kongs
    pub bonus: Vec<Tile>,     // set-aside bonus tiles
}

impl Player {
    #[inline]
    pub fn count_tile(&self, t: Tile) -> usize {
        self.hand[t.0][t.1]
    }

    // concealed hand size
    pub fn count_hand(&self) -> usize {
        let mut n = 0;
        for row in &self.hand {
            n += row[1..].iter().sum::<usize>();
        }
        n
    }

    // first concealed tile in table iteration order (discard fallback)
    pub fn first_tile(&self) -> Option<Tile> {
        for ti in 0..TYPE {
            for ni in 1..TNUM {
                if self.hand[ti][ni] > 0 {
                    return Some(Tile(ti, ni));
                }
            }
        }
        None
    }

    pub fn hand_tiles(&self) -> Vec<Tile> {
        let mut tiles = vec![];
        for ti in 0..TYPE {
            for ni in 1..TNUM {
                for _ in 0..self.hand[ti][ni] {
                    tiles.push(Tile(ti, ni));
                }
            }
        }
        tiles
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let drawn = match self.drawn {
            Some(d) => d.to_string(),
            None => "None".to_string(),
        };
        writeln!(
            f,
            "seat: {}, name: {}, score: {}, wins: {}, drawn: {}",
            self.seat, self.name, self.score, self.wins, drawn,
        )?;
        writeln!(f, "hand: {}", vec_to_string(&self.hand_tiles()))?;
        writeln!(f, "melds: {}, kongs: {}", vec_to_string(&self.melds), vec_to_string(&self.kongs))?;
        write!(f, "bonus: {}", vec_to_string(&self.bonus))
    }
}
