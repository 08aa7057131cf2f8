use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupType {
    Meld, // 3 same-face tiles
    Kong, // 4 same-face tiles
}

impl GroupType {
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            GroupType::Meld => 3,
            GroupType::Kong => 4,
        }
    }
}

// an exposed grouping removed from the concealed hand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub step: usize, // stage step at formation time
    pub seat: Seat,
    pub group_type: GroupType,
    pub tiles: Vec<Tile>,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ts: Vec<String> = self.tiles.iter().map(|t| t.to_string()).collect();
        write!(f, "{:?}[{}]", self.group_type, ts.join(","))
    }
}
