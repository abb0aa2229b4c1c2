//! Turn-budgeted pathfinding on hex terrain maps.
//!
//! [`HexPathfinder`] computes the cheapest route between two cells of any
//! map exposed through [`HexTopology`] (implemented for
//! [`hexmap_core::HexGrid`]). Movement cost depends on the terrain:
//!
//! | Edge | Cost ([`MoveCosts`] default) |
//! |---|---|
//! | road | 1 |
//! | flat | 5 + feature levels of the entered cell |
//! | one-step slope | 10 + feature levels of the entered cell |
//! | cliff, wall without road, water, occupied cell | impassable |
//!
//! Costs are spent from a per-turn budget (the unit's speed). A move that
//! does not fit in what is left of the current turn starts at the top of
//! the next turn, and the leftover points are lost.
//!
//! The pathfinder keeps its per-cell [`SearchState`] and its [`Frontier`]
//! between searches, so repeated queries do not reallocate or reset every
//! cell.

mod cost;
mod distance;
mod error;
mod pathfinder;
mod queue;
mod state;
mod traits;

pub use cost::{DEFAULT_SPEED, MoveCosts, charge_move, turn_of};
pub use distance::hex_distance;
pub use error::{PathError, RequestError};
pub use pathfinder::{HexPathfinder, Path};
pub use queue::Frontier;
pub use state::{SearchState, UNREACHABLE};
pub use traits::HexTopology;
