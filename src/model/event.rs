use super::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    Begin(EventBegin),     // match start
    New(EventNew),         // round start (hands dealt)
    Deal(EventDeal),       // tile drawn from the wall
    Bonus(EventBonus),     // bonus tile set aside
    Meld(EventMeld),       // meld/kong exposed
    Discard(EventDiscard), // tile discarded
    Win(EventWin),         // round end (winner)
    Draw(EventDraw),       // round end (no winner)
    End(EventEnd),         // match end
}

impl Event {
    #[inline]
    pub fn begin(names: [String; SEAT]) -> Self {
        Self::Begin(EventBegin { names })
    }

    #[inline]
    pub fn new(round: usize, dealer: Seat, hands: [Vec<Tile>; SEAT], wall_count: usize) -> Self {
        Self::New(EventNew {
            round,
            dealer,
            hands,
            wall_count,
        })
    }

    #[inline]
    pub fn deal(seat: Seat, tile: Tile, is_replacement: bool) -> Self {
        Self::Deal(EventDeal {
            seat,
            tile,
            is_replacement,
        })
    }

    #[inline]
    pub fn bonus(seat: Seat, tile: Tile) -> Self {
        Self::Bonus(EventBonus { seat, tile })
    }

    #[inline]
    pub fn meld(seat: Seat, group_type: GroupType, tiles: Vec<Tile>) -> Self {
        Self::Meld(EventMeld {
            seat,
            group_type,
            tiles,
        })
    }

    #[inline]
    pub fn discard(seat: Seat, tile: Tile, is_drawn: bool) -> Self {
        Self::Discard(EventDiscard {
            seat,
            tile,
            is_drawn,
        })
    }

    #[inline]
    pub fn win(seat: Seat, winning_tile: Tile, points: Point, scores: [Point; SEAT]) -> Self {
        Self::Win(EventWin {
            seat,
            winning_tile,
            points,
            scores,
        })
    }

    #[inline]
    pub fn draw(draw_type: DrawType, scores: [Point; SEAT]) -> Self {
        Self::Draw(EventDraw { draw_type, scores })
    }

    #[inline]
    pub fn end(winner: Seat, scores: [Point; SEAT], wins: [usize; SEAT]) -> Self {
        Self::End(EventEnd {
            winner,
            scores,
            wins,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBegin {
    pub names: [String; SEAT], // bound strategy names per seat
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventNew {
    pub round: usize,
    pub dealer: Seat,
    pub hands: [Vec<Tile>; SEAT], // 13 raw tiles per seat, bonus unresolved
    pub wall_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDeal {
    pub seat: Seat,
    pub tile: Tile,
    pub is_replacement: bool, // replacement draw after a bonus tile
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBonus {
    pub seat: Seat,
    pub tile: Tile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMeld {
    pub seat: Seat,
    pub group_type: GroupType,
    pub tiles: Vec<Tile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDiscard {
    pub seat: Seat,
    pub tile: Tile,
    pub is_drawn: bool, // discarding the just-drawn tile
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventWin {
    pub seat: Seat,
    pub winning_tile: Tile,
    pub points: Point,          // winner's freshly computed points
    pub scores: [Point; SEAT],  // recomputed round scores for all seats
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraw {
    pub draw_type: DrawType,
    pub scores: [Point; SEAT],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnd {
    pub winner: Seat, // first seat holding the maximum score
    pub scores: [Point; SEAT],
    pub wins: [usize; SEAT],
}
