use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn squared_distance(self, other: Self) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }

    /// Edge-sharing neighbours in the order the flood fill visits them.
    pub fn orthogonal_neighbors(self) -> [Self; 4] {
        [
            Self { x: self.x - 1, y: self.y },
            Self { x: self.x, y: self.y - 1 },
            Self { x: self.x, y: self.y + 1 },
            Self { x: self.x + 1, y: self.y },
        ]
    }
}

/// Terrain state of one grid cell. Serialized as the binary `1`/`0` cell value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Cell {
    #[default]
    Wall,
    Floor,
}

impl Cell {
    pub const fn bit(self) -> u8 {
        match self {
            Self::Wall => 1,
            Self::Floor => 0,
        }
    }

    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bit())
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(Self::Floor),
            1 => Ok(Self::Wall),
            other => Err(de::Error::custom(format!("cell value {other} must be 0 or 1"))),
        }
    }
}
