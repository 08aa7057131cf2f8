use serde::{de, ser};

use super::*;
use crate::control::string::{tile_number_from_char, tile_type_from_char};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(pub Type, pub Tnum); // (type index, number index)

// tile category of the data model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Suited,
    Wind,
    Dragon,
    Bonus,
}

impl Tile {
    pub fn from_symbol(s: &str) -> Self {
        let chars: Vec<char> = s.chars().collect();
        let t = tile_type_from_char(chars[0]).unwrap();
        let n = tile_number_from_char(chars[1]).unwrap();
        Self(t, n)
    }

    #[inline]
    pub fn is_suit(&self) -> bool {
        self.0 < TZ
    }

    #[inline]
    pub fn is_honor(&self) -> bool {
        self.0 == TZ
    }

    #[inline]
    pub fn is_wind(&self) -> bool {
        self.0 == TZ && (WE..=WN).contains(&self.1)
    }

    #[inline]
    pub fn is_dragon(&self) -> bool {
        self.0 == TZ && (DR..=DW).contains(&self.1)
    }

    #[inline]
    pub fn is_bonus(&self) -> bool {
        self.0 == TF
    }

    // 1 or 9 of a suited family
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.0 < TZ && (self.1 == 1 || self.1 == 9)
    }

    pub fn category(&self) -> Category {
        if self.is_suit() {
            Category::Suited
        } else if self.is_wind() {
            Category::Wind
        } else if self.is_dragon() {
            Category::Dragon
        } else {
            Category::Bonus
        }
    }

    // human readable name for display collaborators
    pub fn name(&self) -> String {
        match self.category() {
            Category::Suited => {
                format!("{} of {}", self.1, ["Bamboo", "Characters", "Dots"][self.0])
            }
            Category::Wind => {
                format!("{} Wind", ["East", "South", "West", "North"][self.1 - WE])
            }
            Category::Dragon => format!("{} Dragon", ["Red", "Green", "White"][self.1 - DR]),
            Category::Bonus => {
                if self.1 < SE1 {
                    format!("Flower {}", self.1)
                } else {
                    format!("Season {}", self.1 - SE1 + 1)
                }
            }
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ['b', 'c', 'd', 'z', 'f'][self.0], self.1)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileVisitor;

impl<'de> de::Visitor<'de> for TileVisitor {
    type Value = Tile;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile symbol")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Tile::from_symbol(v))
    }
}

impl<'de> de::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as de::Deserializer<'de>>::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_identifier(TileVisitor)
    }
}

// [TileTable]
// multiset of faces: count_by_face of the analyzer is this table itself
pub type TileRow = [usize; TNUM];
pub type TileTable = [TileRow; TYPE];

// [TileState]
// location of one physical tile copy, for the conservation invariant
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(tag = "t", content = "c")]
pub enum TileState {
    H(Seat),        // concealed Hand
    M(Seat, Index), // Meld
    K(Seat, Index), // Kong
    B(Seat),        // Bonus pile
    D(Index),       // Discard pile
    #[default]
    U, // Undealt (wall)
}

#[test]
fn test_tile_basics() {
    let t = Tile::from_symbol("b5");
    assert_eq!(t, Tile(TB, 5));
    assert_eq!(t.category(), Category::Suited);
    assert_eq!(Tile(TZ, WE).category(), Category::Wind);
    assert_eq!(Tile(TZ, DR).category(), Category::Dragon);
    assert_eq!(Tile(TF, 2).category(), Category::Bonus);
    assert!(Tile(TB, 9).is_terminal());
    assert!(!Tile(TZ, WE).is_terminal());
    assert_eq!(Tile(TZ, DR).name(), "Red Dragon");
    assert_eq!(Tile(TZ, WN).name(), "North Wind");
    assert_eq!(Tile(TF, 6).name(), "Season 2");
    assert_eq!(Tile(TD, 7).name(), "7 of Dots");
    assert_eq!(serde_json::to_string(&t).unwrap(), "\"b5\"");
}

use TileState::*;

impl fmt::Display for TileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            H(s) => write!(f, "H{}", s),
            M(s, _) => write!(f, "M{}", s),
            K(s, _) => write!(f, "K{}", s),
            B(s) => write!(f, "B{}", s),
            D(_) => write!(f, "D "),
            U => write!(f, "U "),
        }
    }
}
