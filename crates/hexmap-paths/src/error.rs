use std::fmt;

use hexmap_core::UnitId;

/// Why a path request was rejected before searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    /// No cell with that index.
    UnknownCell(usize),
    /// Start and goal are the same cell.
    SameCell,
    /// The goal is under water.
    GoalUnderwater,
    /// Another unit stands on the goal.
    GoalOccupied(UnitId),
    /// Speed must be at least one movement point per turn.
    InvalidSpeed(i32),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCell(i) => write!(f, "unknown cell {i}"),
            Self::SameCell => f.write_str("start and goal are the same cell"),
            Self::GoalUnderwater => f.write_str("goal is under water"),
            Self::GoalOccupied(unit) => write!(f, "goal is occupied by unit {}", unit.0),
            Self::InvalidSpeed(speed) => write!(f, "invalid speed {speed}"),
        }
    }
}

impl std::error::Error for RequestError {}

/// Outcome of a failed path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The request was rejected before searching.
    InvalidRequest(RequestError),
    /// The goal cannot be reached from the start.
    NoPathExists,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRequest(e) => write!(f, "invalid path request: {e}"),
            Self::NoPathExists => f.write_str("no path exists"),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRequest(e) => Some(e),
            Self::NoPathExists => None,
        }
    }
}

impl From<RequestError> for PathError {
    fn from(e: RequestError) -> Self {
        Self::InvalidRequest(e)
    }
}
