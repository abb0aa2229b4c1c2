//! Edge classification between neighboring cells: [`HexEdgeType`].

/// How two neighboring cells connect, from their elevation difference.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexEdgeType {
    /// Same elevation.
    Flat,
    /// One elevation step, crossable by terraces.
    Slope,
    /// Two or more steps. Impassable.
    Cliff,
}

impl HexEdgeType {
    /// Classify the edge between cells at elevations `a` and `b`.
    #[inline]
    pub fn from_elevations(a: i32, b: i32) -> Self {
        match (a - b).abs() {
            0 => Self::Flat,
            1 => Self::Slope,
            _ => Self::Cliff,
        }
    }
}
