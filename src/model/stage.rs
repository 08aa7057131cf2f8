use super::*;
use crate::util::common::vec_to_string;

// how a round ended without a winner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawType {
    WallExhausted, // no tiles left to draw
    TurnLimit,     // turn counter reached the configured cap
}

// match configuration
// near-identical source revisions collapse into these flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub rounds: usize,       // rounds per match
    pub max_turns: usize,    // turn cap per round
    pub special_bonus: bool, // heavenly/earthly/thirteen-orphans point bonuses
    pub auto_kong: bool,     // expose detected kongs before discarding
    pub strict_win: bool,    // require 4 triplets + pair instead of size-only terminal check
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            rounds: 4,
            max_turns: 100,
            special_bonus: true,
            auto_kong: false,
            strict_win: true,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct Stage {
    pub round: usize,                // rounds concluded so far
    pub dealer: Seat,                // dealer seat of the current round
    pub turn: Seat,                  // seat holding the draw window
    pub step: usize,                 // incremented per handled event
    pub turn_count: usize,           // completed turns in the current round
    pub wall_count: usize,           // undealt tiles remaining
    pub discards: Vec<(Seat, Tile)>, // shared discard pile in discard order
    pub players: [Player; SEAT],
    pub tile_states: [[[TileState; TILE]; TNUM]; TYPE],
}

impl Stage {
    #[inline]
    pub fn is_dealer(&self, seat: Seat) -> bool {
        seat == self.dealer
    }

    pub fn get_scores(&self) -> [Point; SEAT] {
        let mut scores = [0; SEAT];
        for s in 0..SEAT {
            scores[s] = self.players[s].score;
        }
        scores
    }

    pub fn get_wins(&self) -> [usize; SEAT] {
        let mut wins = [0; SEAT];
        for s in 0..SEAT {
            wins[s] = self.players[s].wins;
        }
        wins
    }

    pub fn discard_tiles(&self) -> Vec<Tile> {
        self.discards.iter().map(|&(_, t)| t).collect()
    }
}

// the persistence interface: any observer can take a full snapshot
#[test]
fn test_stage_snapshot() {
    let stg = Stage::default();
    let v = serde_json::to_value(&stg).unwrap();
    assert_eq!(v["wall_count"], 0);
    assert_eq!(v["players"].as_array().unwrap().len(), SEAT);
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "round: {}, dealer: {}, turn: {}, turn_count: {}, wall_count: {}",
            self.round, self.dealer, self.turn, self.turn_count, self.wall_count,
        )?;
        writeln!(f, "discards: {}", vec_to_string(&self.discard_tiles()))?;
        for s in 0..SEAT {
            writeln!(f, "{}", self.players[s])?;
        }
        Ok(())
    }
}
