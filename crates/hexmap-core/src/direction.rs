//! The six hex directions: [`HexDirection`].

use std::fmt;

use crate::coords::HexCoordinates;

/// One of the six neighbor directions of a hex cell, clockwise from
/// north-east. Rows grow northwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum HexDirection {
    NE = 0,
    E = 1,
    SE = 2,
    SW = 3,
    W = 4,
    NW = 5,
}

impl HexDirection {
    /// All directions in index order.
    pub const ALL: [HexDirection; 6] = [
        HexDirection::NE,
        HexDirection::E,
        HexDirection::SE,
        HexDirection::SW,
        HexDirection::W,
        HexDirection::NW,
    ];

    /// Index in `0..6`, usable for per-edge arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction for an index in `0..6`, `None` otherwise.
    #[inline]
    pub const fn from_index(i: usize) -> Option<Self> {
        if i < 6 { Some(Self::ALL[i]) } else { None }
    }

    #[inline]
    const fn rotate(self, by: usize) -> Self {
        Self::ALL[(self.index() + by) % 6]
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        self.rotate(3)
    }

    /// Counter-clockwise neighbor direction.
    #[inline]
    pub const fn previous(self) -> Self {
        self.rotate(5)
    }

    /// Clockwise neighbor direction.
    #[inline]
    pub const fn next(self) -> Self {
        self.rotate(1)
    }

    #[inline]
    pub const fn previous2(self) -> Self {
        self.rotate(4)
    }

    #[inline]
    pub const fn next2(self) -> Self {
        self.rotate(2)
    }

    /// Cube-coordinate offset of one step in this direction.
    #[inline]
    pub const fn step(self) -> HexCoordinates {
        match self {
            Self::NE => HexCoordinates::new(0, 1),
            Self::E => HexCoordinates::new(1, 0),
            Self::SE => HexCoordinates::new(1, -1),
            Self::SW => HexCoordinates::new(0, -1),
            Self::W => HexCoordinates::new(-1, 0),
            Self::NW => HexCoordinates::new(-1, 1),
        }
    }
}

impl fmt::Display for HexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        };
        f.write_str(s)
    }
}
