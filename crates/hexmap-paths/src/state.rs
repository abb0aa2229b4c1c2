/// Sentinel distance for cells not reached by the current search.
pub const UNREACHABLE: i32 = i32::MAX;

/// Per-cell scratch data of a search.
///
/// The arena of states is allocated once and reused. A state's fields are
/// only meaningful when its `phase` belongs to the current search: equal to
/// the search phase while the cell sits in the frontier, one above it once
/// the cell has been finalized. Anything older reads as unvisited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchState {
    pub distance: i32,
    pub heuristic: i32,
    pub predecessor: Option<usize>,
    pub phase: u32,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            distance: UNREACHABLE,
            heuristic: 0,
            predecessor: None,
            phase: 0,
        }
    }
}

impl SearchState {
    #[inline]
    pub fn priority(&self) -> i32 {
        self.distance.saturating_add(self.heuristic)
    }

    /// Discovered by the search running in `phase`, finalized or not.
    #[inline]
    pub fn is_visited(&self, phase: u32) -> bool {
        self.phase == phase || self.is_finalized(phase)
    }

    /// Popped from the frontier by the search running in `phase`.
    #[inline]
    pub fn is_finalized(&self, phase: u32) -> bool {
        self.phase == phase.wrapping_add(1)
    }
}
