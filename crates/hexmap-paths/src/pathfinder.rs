use hexmap_core::HexDirection;
use log::{debug, trace};

use crate::cost::{MoveCosts, charge_move, turn_of};
use crate::distance::hex_distance;
use crate::error::{PathError, RequestError};
use crate::queue::Frontier;
use crate::state::SearchState;
use crate::traits::HexTopology;

// ---------------------------------------------------------------------------
// Path
// ---------------------------------------------------------------------------

/// A route found by [`HexPathfinder`]: cell indices from start to goal,
/// both included.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<usize>,
    cost: i32,
    speed: i32,
}

impl Path {
    #[inline]
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Total movement points charged, turn losses included.
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Movement points per turn the path was planned with.
    #[inline]
    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves, one less than the number of cells.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// First cell; `None` only for an empty path.
    #[inline]
    pub fn start(&self) -> Option<usize> {
        self.cells.first().copied()
    }

    #[inline]
    pub fn goal(&self) -> Option<usize> {
        self.cells.last().copied()
    }

    /// Number of turns needed to walk the whole path.
    #[inline]
    pub fn turns(&self) -> i32 {
        if self.cost <= 0 {
            0
        } else {
            turn_of(self.cost, self.speed) + 1
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

// ---------------------------------------------------------------------------
// HexPathfinder
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug)]
struct Completed {
    start: usize,
    goal: usize,
    speed: i32,
    phase: u32,
}

/// Turn-budgeted A* over a [`HexTopology`].
///
/// `HexPathfinder` owns one [`SearchState`] per cell and the [`Frontier`],
/// and reuses both across searches. Instead of resetting every state before
/// a search, it advances a phase counter by two: states stamped with an
/// older phase read as unvisited. A pathfinder serves one search at a time;
/// independent pathfinders can search the same map side by side.
#[derive(Clone, Debug)]
pub struct HexPathfinder {
    states: Vec<SearchState>,
    frontier: Frontier,
    phase: u32,
    costs: MoveCosts,
    last: Option<Completed>,
}

impl Default for HexPathfinder {
    fn default() -> Self {
        Self::new(0)
    }
}

impl HexPathfinder {
    /// Create a pathfinder for maps of `cell_count` cells with default costs.
    pub fn new(cell_count: usize) -> Self {
        Self::with_costs(cell_count, MoveCosts::default())
    }

    pub fn with_costs(cell_count: usize, costs: MoveCosts) -> Self {
        Self {
            states: vec![SearchState::default(); cell_count],
            frontier: Frontier::with_capacity(cell_count),
            phase: 0,
            costs,
            last: None,
        }
    }

    #[inline]
    pub fn costs(&self) -> MoveCosts {
        self.costs
    }

    /// Replace the movement costs. Forgets the last path.
    pub fn set_costs(&mut self, costs: MoveCosts) {
        self.costs = costs;
        self.last = None;
    }

    /// Adapt the state arena to a map of `cell_count` cells.
    ///
    /// Shrinking keeps the allocation and only invalidates the states by
    /// advancing the phase; growing reallocates. Searches also grow the
    /// arena on demand, so this is only needed to pre-size it.
    pub fn resize(&mut self, cell_count: usize) {
        self.last = None;
        self.frontier.clear();
        if cell_count <= self.states.len() {
            self.advance_phase();
            return;
        }
        self.states.clear();
        self.states.resize(cell_count, SearchState::default());
        self.frontier = Frontier::with_capacity(cell_count);
        self.phase = 0;
    }

    /// Search state of `cell`, as left by the most recent search.
    pub fn state(&self, cell: usize) -> Option<&SearchState> {
        self.states.get(cell)
    }

    /// Find the cheapest path from `start` to `goal` for a unit with `speed`
    /// movement points per turn.
    ///
    /// The goal must be dry and unoccupied. Occupied cells along the way are
    /// impassable; the start may hold the moving unit itself.
    pub fn find_path<T: HexTopology + ?Sized>(
        &mut self,
        topology: &T,
        start: usize,
        goal: usize,
        speed: i32,
    ) -> Result<Path, PathError> {
        self.search(topology, start, goal, speed)?;
        self.path()
    }

    /// Run the search without building the path. On success the path is
    /// available through [`path`](Self::path) until the next search.
    pub fn search<T: HexTopology + ?Sized>(
        &mut self,
        topology: &T,
        start: usize,
        goal: usize,
        speed: i32,
    ) -> Result<(), PathError> {
        self.run(topology, start, goal, speed, |_, _| {})
    }

    /// The search itself. `on_pop` sees every cell taken off the frontier,
    /// with the priority it was popped at.
    fn run<T, F>(
        &mut self,
        topology: &T,
        start: usize,
        goal: usize,
        speed: i32,
        mut on_pop: F,
    ) -> Result<(), PathError>
    where
        T: HexTopology + ?Sized,
        F: FnMut(usize, i32),
    {
        self.last = None;
        if let Err(e) = Self::validate(topology, start, goal, speed) {
            debug!("path request {start} -> {goal} rejected: {e}");
            return Err(e.into());
        }

        if self.states.len() < topology.cell_count() {
            self.states.resize(topology.cell_count(), SearchState::default());
        }
        self.frontier.clear();
        self.advance_phase();
        let phase = self.phase;
        let goal_coords = topology.coordinates(goal);

        {
            let s = &mut self.states[start];
            s.distance = 0;
            s.heuristic = hex_distance(topology.coordinates(start), goal_coords);
            s.predecessor = None;
            s.phase = phase;
        }
        self.frontier.push(start, self.states[start].priority());

        let mut pops = 0usize;
        let found = 'search: loop {
            let Some(current) = self.frontier.pop_min() else {
                break 'search false;
            };
            pops += 1;
            on_pop(current, self.states[current].priority());
            self.states[current].phase = phase + 1;
            if current == goal {
                break 'search true;
            }

            let current_distance = self.states[current].distance;
            trace!("expand cell {current} at distance {current_distance}");

            for d in HexDirection::ALL {
                let Some(next) = topology.neighbor(current, d) else {
                    continue;
                };
                if self.states[next].is_finalized(phase) {
                    continue;
                }
                if topology.is_underwater(next) || topology.occupant(next).is_some() {
                    continue;
                }
                let Some(move_cost) = self.costs.edge_cost(topology, current, d, next) else {
                    continue;
                };
                let distance = charge_move(current_distance, move_cost, speed);

                let n = &mut self.states[next];
                if n.phase != phase {
                    n.phase = phase;
                    n.distance = distance;
                    n.predecessor = Some(current);
                    n.heuristic = hex_distance(topology.coordinates(next), goal_coords);
                    self.frontier.push(next, n.priority());
                } else if distance < n.distance {
                    n.distance = distance;
                    n.predecessor = Some(current);
                    self.frontier.decrease_key(next, n.priority());
                }
            }
        };

        if !found {
            debug!("no path {start} -> {goal} (speed {speed}, {pops} cells expanded)");
            return Err(PathError::NoPathExists);
        }

        debug!(
            "path {start} -> {goal} costs {} (speed {speed}, {pops} cells expanded)",
            self.states[goal].distance
        );
        self.last = Some(Completed {
            start,
            goal,
            speed,
            phase,
        });
        Ok(())
    }

    fn validate<T: HexTopology + ?Sized>(
        topology: &T,
        start: usize,
        goal: usize,
        speed: i32,
    ) -> Result<(), RequestError> {
        let n = topology.cell_count();
        if start >= n {
            return Err(RequestError::UnknownCell(start));
        }
        if goal >= n {
            return Err(RequestError::UnknownCell(goal));
        }
        if start == goal {
            return Err(RequestError::SameCell);
        }
        if speed <= 0 {
            return Err(RequestError::InvalidSpeed(speed));
        }
        if topology.is_underwater(goal) {
            return Err(RequestError::GoalUnderwater);
        }
        if let Some(unit) = topology.occupant(goal) {
            return Err(RequestError::GoalOccupied(unit));
        }
        Ok(())
    }

    fn advance_phase(&mut self) {
        // Both the frontier and the finalized stamp must stay above every
        // stamp already written.
        if self.phase > u32::MAX - 4 {
            for s in self.states.iter_mut() {
                *s = SearchState::default();
            }
            self.phase = 0;
        }
        self.phase += 2;
    }

    // -----------------------------------------------------------------------
    // Results
    // -----------------------------------------------------------------------

    /// Whether the last search found a path that is still available.
    #[inline]
    pub fn has_path(&self) -> bool {
        self.last.is_some()
    }

    /// Rebuild the path found by the last successful search.
    ///
    /// Fails with [`PathError::NoPathExists`] if there has been no search,
    /// the last one failed, or its result was cleared.
    pub fn path(&self) -> Result<Path, PathError> {
        let last = self.last.ok_or(PathError::NoPathExists)?;
        let mut cells = Vec::new();
        let mut cur = Some(last.goal);
        while let Some(c) = cur {
            cells.push(c);
            cur = self.states[c].predecessor;
        }
        cells.reverse();
        debug_assert_eq!(cells.first(), Some(&last.start));
        Ok(Path {
            cells,
            cost: self.states[last.goal].distance,
            speed: last.speed,
        })
    }

    /// Cost at which the last successful search reached `cell`.
    ///
    /// Cells still in the frontier when the goal was reached report their
    /// best known, tentative cost. `None` for cells the search never reached.
    pub fn distance_at(&self, cell: usize) -> Option<i32> {
        let last = self.last?;
        let s = self.states.get(cell)?;
        s.is_visited(last.phase).then_some(s.distance)
    }

    /// Turn, counted from 0, in which the last successful search reached
    /// `cell`.
    pub fn turn_at(&self, cell: usize) -> Option<i32> {
        let speed = self.last?.speed;
        self.distance_at(cell).map(|d| turn_of(d, speed))
    }

    /// Forget the last path. Per-cell state is left as is.
    pub fn clear_path(&mut self) {
        self.last = None;
    }

    /// Drop the frontier and the last path, and advance the phase so every
    /// cell state reads as unvisited. No per-cell reset is done.
    pub fn clear_search_state(&mut self) {
        self.frontier.clear();
        self.advance_phase();
        self.last = None;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HexPathfinder {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.costs, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HexPathfinder {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let costs = <MoveCosts as serde::Deserialize>::deserialize(deserializer)?;
        Ok(HexPathfinder::with_costs(0, costs))
    }
}
