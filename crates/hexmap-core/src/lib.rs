//! **hexmap-core** — core types of a hexagonal terrain map.
//!
//! This crate provides the value types shared by the *hexmap* crates
//! (cube coordinates, directions, edge classification) and [`HexGrid`], an
//! arena of terrain cells with index-based, symmetric neighbor links.

pub mod cell;
pub mod coords;
pub mod direction;
pub mod edge;
pub mod grid;

pub use cell::{HexCell, UnitId};
pub use coords::HexCoordinates;
pub use direction::HexDirection;
pub use edge::HexEdgeType;
pub use grid::{GridError, HexGrid, MAX_FEATURE_LEVEL};
