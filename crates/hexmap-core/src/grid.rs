//! The cell arena: [`HexGrid`].
//!
//! Cells are stored row-major in a flat `Vec` and addressed by a stable
//! `usize` index. Neighbor links are kept in a parallel array of
//! `[Option<usize>; 6]`, one slot per [`HexDirection`], and are always
//! symmetric: if `b` is the `d` neighbor of `a`, then `a` is the
//! `d.opposite()` neighbor of `b`.

use std::fmt;

use crate::cell::{HexCell, UnitId};
use crate::coords::HexCoordinates;
use crate::direction::HexDirection;

/// Highest urban, farm or plant level a cell can have.
pub const MAX_FEATURE_LEVEL: i32 = 3;

/// A rectangular hex map of `width × height` cells in row-offset layout.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexGrid {
    cells: Vec<HexCell>,
    neighbors: Vec<[Option<usize>; 6]>,
    width: i32,
    height: i32,
}

impl HexGrid {
    /// Create a flat, dry map of `width` columns and `height` rows.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        let len = match width.checked_mul(height) {
            Some(len) if width > 0 && height > 0 => len as usize,
            _ => return Err(GridError::InvalidSize { width, height }),
        };
        let mut grid = Self {
            cells: Vec::with_capacity(len),
            neighbors: vec![[None; 6]; len],
            width,
            height,
        };
        let mut i = 0;
        for z in 0..height {
            for x in 0..width {
                grid.create_cell(x, z, i);
                i += 1;
            }
        }
        Ok(grid)
    }

    fn create_cell(&mut self, x: i32, z: i32, i: usize) {
        self.cells.push(HexCell::new(HexCoordinates::from_offset(x, z)));

        let w = self.width as usize;
        if x > 0 {
            self.link(i, HexDirection::W, i - 1);
        }
        if z > 0 {
            if z & 1 == 0 {
                self.link(i, HexDirection::SE, i - w);
                if x > 0 {
                    self.link(i, HexDirection::SW, i - w - 1);
                }
            } else {
                self.link(i, HexDirection::SW, i - w);
                if x < self.width - 1 {
                    self.link(i, HexDirection::SE, i - w + 1);
                }
            }
        }
    }

    fn link(&mut self, a: usize, d: HexDirection, b: usize) {
        self.neighbors[a][d.index()] = Some(b);
        self.neighbors[b][d.opposite().index()] = Some(a);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cells(&self) -> &[HexCell] {
        &self.cells
    }

    #[inline]
    pub fn cell(&self, i: usize) -> Option<&HexCell> {
        self.cells.get(i)
    }

    /// Index of the cell at `coordinates`, or `None` if off the map.
    pub fn index_of(&self, coordinates: HexCoordinates) -> Option<usize> {
        let (x, z) = coordinates.to_offset();
        self.index_at_offset(x, z)
    }

    /// Index of the cell at offset column `col`, row `row`.
    pub fn index_at_offset(&self, col: i32, row: i32) -> Option<usize> {
        if row < 0 || row >= self.height || col < 0 || col >= self.width {
            return None;
        }
        Some((col + row * self.width) as usize)
    }

    /// The neighbor of cell `i` in `direction`; `None` at the map edge.
    #[inline]
    pub fn neighbor(&self, i: usize, direction: HexDirection) -> Option<usize> {
        self.neighbors.get(i)?[direction.index()]
    }

    /// Absolute elevation difference across the edge in `direction`.
    pub fn elevation_difference(&self, i: usize, direction: HexDirection) -> Option<i32> {
        let n = self.neighbor(i, direction)?;
        Some((self.cells[i].elevation - self.cells[n].elevation).abs())
    }

    /// A unit may end its move on the cell: dry land with nobody on it.
    pub fn is_valid_destination(&self, i: usize) -> bool {
        self.cell(i).is_some_and(|c| !c.is_underwater() && c.unit.is_none())
    }

    // -----------------------------------------------------------------------
    // Terrain edits
    // -----------------------------------------------------------------------

    /// Set the elevation of cell `i`. Rivers that would flow uphill and roads
    /// across edges steeper than one step are removed.
    pub fn set_elevation(&mut self, i: usize, elevation: i32) {
        let Some(cell) = self.cells.get_mut(i) else {
            return;
        };
        if cell.elevation == elevation {
            return;
        }
        cell.elevation = elevation;
        self.validate_rivers(i);
        for d in HexDirection::ALL {
            if self.cells[i].roads[d.index()]
                && self.elevation_difference(i, d).is_some_and(|diff| diff > 1)
            {
                self.set_road(i, d, false);
            }
        }
    }

    pub fn set_water_level(&mut self, i: usize, level: i32) {
        let Some(cell) = self.cells.get_mut(i) else {
            return;
        };
        if cell.water_level == level {
            return;
        }
        cell.water_level = level;
        self.validate_rivers(i);
    }

    /// Set the urban level of cell `i`, clamped to `0..=MAX_FEATURE_LEVEL`.
    /// The farm and plant setters clamp the same way.
    pub fn set_urban_level(&mut self, i: usize, level: i32) {
        if let Some(cell) = self.cells.get_mut(i) {
            cell.urban_level = level.clamp(0, MAX_FEATURE_LEVEL);
        }
    }

    pub fn set_farm_level(&mut self, i: usize, level: i32) {
        if let Some(cell) = self.cells.get_mut(i) {
            cell.farm_level = level.clamp(0, MAX_FEATURE_LEVEL);
        }
    }

    pub fn set_plant_level(&mut self, i: usize, level: i32) {
        if let Some(cell) = self.cells.get_mut(i) {
            cell.plant_level = level.clamp(0, MAX_FEATURE_LEVEL);
        }
    }

    pub fn set_walled(&mut self, i: usize, walled: bool) {
        if let Some(cell) = self.cells.get_mut(i) {
            cell.walled = walled;
        }
    }

    /// Mark cell `i` as a special feature. Ignored on river cells; clears the
    /// cell's roads.
    pub fn set_special_index(&mut self, i: usize, index: i32) {
        let Some(cell) = self.cells.get_mut(i) else {
            return;
        };
        if cell.special_index != index && !cell.has_river() {
            cell.special_index = index;
            self.remove_roads(i);
        }
    }

    // -----------------------------------------------------------------------
    // Roads
    // -----------------------------------------------------------------------

    /// Add a road from cell `i` across the edge in `direction`.
    ///
    /// Returns `false` if the road is not allowed there: no neighbor, already
    /// a road, a river on that edge, an edge steeper than one step, or a
    /// special feature on either side.
    pub fn add_road(&mut self, i: usize, direction: HexDirection) -> bool {
        let Some(n) = self.neighbor(i, direction) else {
            return false;
        };
        let cell = &self.cells[i];
        let allowed = !cell.roads[direction.index()]
            && !cell.has_river_through_edge(direction)
            && (cell.elevation - self.cells[n].elevation).abs() <= 1
            && !cell.is_special()
            && !self.cells[n].is_special();
        if allowed {
            self.set_road(i, direction, true);
        }
        allowed
    }

    pub fn remove_roads(&mut self, i: usize) {
        for d in HexDirection::ALL {
            if self.cells.get(i).is_some_and(|c| c.roads[d.index()]) {
                self.set_road(i, d, false);
            }
        }
    }

    fn set_road(&mut self, i: usize, d: HexDirection, state: bool) {
        self.cells[i].roads[d.index()] = state;
        if let Some(n) = self.neighbor(i, d) {
            self.cells[n].roads[d.opposite().index()] = state;
        }
    }

    // -----------------------------------------------------------------------
    // Rivers
    // -----------------------------------------------------------------------

    /// Start a river in cell `i` flowing out across `direction`.
    ///
    /// The river may only flow downhill or into water at its level; the call
    /// is ignored otherwise. Any conflicting river on that edge and the road
    /// across it are removed.
    pub fn set_outgoing_river(&mut self, i: usize, direction: HexDirection) {
        if self.cells.get(i).is_none_or(|c| c.outgoing_river == Some(direction)) {
            return;
        }
        let Some(n) = self.neighbor(i, direction) else {
            return;
        };
        if !self.is_valid_river_destination(i, n) {
            return;
        }
        self.remove_outgoing_river(i);
        if self.cells[i].incoming_river == Some(direction) {
            self.remove_incoming_river(i);
        }
        self.cells[i].outgoing_river = Some(direction);
        self.cells[i].special_index = 0;

        self.remove_incoming_river(n);
        self.cells[n].incoming_river = Some(direction.opposite());
        self.cells[n].special_index = 0;

        self.set_road(i, direction, false);
    }

    pub fn remove_outgoing_river(&mut self, i: usize) {
        let Some(d) = self.cells.get_mut(i).and_then(|c| c.outgoing_river.take()) else {
            return;
        };
        if let Some(n) = self.neighbor(i, d) {
            self.cells[n].incoming_river = None;
        }
    }

    pub fn remove_incoming_river(&mut self, i: usize) {
        let Some(d) = self.cells.get_mut(i).and_then(|c| c.incoming_river.take()) else {
            return;
        };
        if let Some(n) = self.neighbor(i, d) {
            self.cells[n].outgoing_river = None;
        }
    }

    pub fn remove_river(&mut self, i: usize) {
        self.remove_outgoing_river(i);
        self.remove_incoming_river(i);
    }

    fn is_valid_river_destination(&self, from: usize, to: usize) -> bool {
        let (f, t) = (&self.cells[from], &self.cells[to]);
        f.elevation >= t.elevation || f.water_level == t.elevation
    }

    fn validate_rivers(&mut self, i: usize) {
        if let Some(d) = self.cells[i].outgoing_river {
            let valid = self
                .neighbor(i, d)
                .is_some_and(|n| self.is_valid_river_destination(i, n));
            if !valid {
                self.remove_outgoing_river(i);
            }
        }
        if let Some(d) = self.cells[i].incoming_river {
            let valid = self
                .neighbor(i, d)
                .is_some_and(|n| self.is_valid_river_destination(n, i));
            if !valid {
                self.remove_incoming_river(i);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Units
    // -----------------------------------------------------------------------

    /// Put `unit` on cell `i`.
    pub fn place_unit(&mut self, i: usize, unit: UnitId) -> Result<(), GridError> {
        let cell = self.cells.get_mut(i).ok_or(GridError::CellOutOfRange(i))?;
        if let Some(occupant) = cell.unit {
            return Err(GridError::CellOccupied { cell: i, occupant });
        }
        cell.unit = Some(unit);
        Ok(())
    }

    /// Take the unit off cell `i`, returning it.
    pub fn remove_unit(&mut self, i: usize) -> Option<UnitId> {
        self.cells.get_mut(i)?.unit.take()
    }
}

/// Errors from building or editing a [`HexGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Map dimensions must both be positive.
    InvalidSize { width: i32, height: i32 },
    /// No cell with that index.
    CellOutOfRange(usize),
    /// The cell already holds a unit.
    CellOccupied { cell: usize, occupant: UnitId },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "invalid hex grid size {width}x{height}")
            }
            Self::CellOutOfRange(i) => write!(f, "cell index {i} is out of range"),
            Self::CellOccupied { cell, occupant } => {
                write!(f, "cell {cell} is already occupied by unit {}", occupant.0)
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_size() {
        assert_eq!(
            HexGrid::new(0, 3).unwrap_err(),
            GridError::InvalidSize { width: 0, height: 3 }
        );
        assert!(HexGrid::new(4, -1).is_err());
        assert_eq!(
            HexGrid::new(i32::MAX, 2).unwrap_err(),
            GridError::InvalidSize {
                width: i32::MAX,
                height: 2
            }
        );
        assert!(HexGrid::new(-65_536, -65_536).is_err());
    }

    #[test]
    fn feature_levels_are_clamped() {
        let mut g = HexGrid::new(2, 1).unwrap();
        g.set_plant_level(0, -20);
        g.set_urban_level(0, i32::MAX);
        g.set_farm_level(0, 2);
        let c = &g.cells()[0];
        assert_eq!(c.plant_level(), 0);
        assert_eq!(c.urban_level(), MAX_FEATURE_LEVEL);
        assert_eq!(c.farm_level(), 2);
        assert_eq!(c.feature_levels(), MAX_FEATURE_LEVEL + 2);
    }

    #[test]
    fn cells_carry_offset_coordinates() {
        let g = HexGrid::new(4, 3).unwrap();
        assert_eq!(g.len(), 12);
        for (i, c) in g.cells().iter().enumerate() {
            let (col, row) = c.coordinates().to_offset();
            assert_eq!(g.index_at_offset(col, row), Some(i));
            assert_eq!(g.index_of(c.coordinates()), Some(i));
        }
        assert_eq!(g.index_at_offset(4, 0), None);
        assert_eq!(g.index_of(HexCoordinates::new(-1, 0)), None);
    }

    #[test]
    fn neighbor_links_are_symmetric() {
        let g = HexGrid::new(5, 5).unwrap();
        for i in 0..g.len() {
            for d in HexDirection::ALL {
                if let Some(n) = g.neighbor(i, d) {
                    assert_eq!(g.neighbor(n, d.opposite()), Some(i));
                }
            }
        }
    }

    #[test]
    fn neighbor_links_match_coordinates() {
        let g = HexGrid::new(6, 5).unwrap();
        for i in 0..g.len() {
            let c = g.cells()[i].coordinates();
            for d in HexDirection::ALL {
                assert_eq!(g.neighbor(i, d), g.index_of(c.neighbor(d)));
            }
        }
    }

    #[test]
    fn interior_cell_has_six_neighbors() {
        let g = HexGrid::new(5, 5).unwrap();
        let center = g.index_at_offset(2, 2).unwrap();
        assert!(HexDirection::ALL.iter().all(|&d| g.neighbor(center, d).is_some()));
        let corner = g.index_at_offset(0, 0).unwrap();
        assert_eq!(g.neighbor(corner, HexDirection::W), None);
        assert_eq!(g.neighbor(corner, HexDirection::SW), None);
        assert_eq!(g.neighbor(99, HexDirection::E), None);
    }

    #[test]
    fn roads_are_symmetric() {
        let mut g = HexGrid::new(3, 3).unwrap();
        let a = g.index_at_offset(1, 1).unwrap();
        let b = g.neighbor(a, HexDirection::E).unwrap();
        assert!(g.add_road(a, HexDirection::E));
        assert!(g.cells()[b].has_road_through_edge(HexDirection::W));
        assert!(!g.add_road(a, HexDirection::E));
        g.remove_roads(a);
        assert!(!g.cells()[a].has_roads());
        assert!(!g.cells()[b].has_roads());
    }

    #[test]
    fn road_needs_gentle_edge_and_no_special() {
        let mut g = HexGrid::new(3, 3).unwrap();
        let a = g.index_at_offset(1, 1).unwrap();
        let b = g.neighbor(a, HexDirection::E).unwrap();
        g.set_elevation(b, 2);
        assert!(!g.add_road(a, HexDirection::E));
        g.set_elevation(b, 1);
        assert!(g.add_road(a, HexDirection::E));
        // Raising the neighbor into a cliff drops the road.
        g.set_elevation(b, 3);
        assert!(!g.cells()[a].has_road_through_edge(HexDirection::E));

        let c = g.neighbor(a, HexDirection::W).unwrap();
        g.set_special_index(c, 1);
        assert!(!g.add_road(a, HexDirection::W));
    }

    #[test]
    fn rivers_flow_downhill_only() {
        let mut g = HexGrid::new(3, 3).unwrap();
        let a = g.index_at_offset(1, 1).unwrap();
        let b = g.neighbor(a, HexDirection::E).unwrap();
        g.set_elevation(b, 1);
        g.set_outgoing_river(a, HexDirection::E);
        assert!(!g.cells()[a].has_river());

        g.set_elevation(a, 2);
        g.set_outgoing_river(a, HexDirection::E);
        assert_eq!(g.cells()[a].outgoing_river(), Some(HexDirection::E));
        assert_eq!(g.cells()[b].incoming_river(), Some(HexDirection::W));

        // Lowering the source below the target invalidates the river.
        g.set_elevation(a, 0);
        assert!(!g.cells()[a].has_river());
        assert!(!g.cells()[b].has_river());
    }

    #[test]
    fn river_removes_road_and_blocks_new_one() {
        let mut g = HexGrid::new(3, 3).unwrap();
        let a = g.index_at_offset(1, 1).unwrap();
        assert!(g.add_road(a, HexDirection::NE));
        g.set_outgoing_river(a, HexDirection::NE);
        assert!(!g.cells()[a].has_road_through_edge(HexDirection::NE));
        assert!(!g.add_road(a, HexDirection::NE));
        g.remove_river(a);
        assert!(g.add_road(a, HexDirection::NE));
    }

    #[test]
    fn units_occupy_cells() {
        let mut g = HexGrid::new(2, 2).unwrap();
        assert!(g.is_valid_destination(0));
        g.place_unit(0, UnitId(7)).unwrap();
        assert!(!g.is_valid_destination(0));
        assert_eq!(
            g.place_unit(0, UnitId(8)),
            Err(GridError::CellOccupied {
                cell: 0,
                occupant: UnitId(7)
            })
        );
        assert_eq!(g.place_unit(10, UnitId(8)), Err(GridError::CellOutOfRange(10)));
        assert_eq!(g.remove_unit(0), Some(UnitId(7)));
        assert!(g.is_valid_destination(0));
    }

    #[test]
    fn underwater_is_not_a_destination() {
        let mut g = HexGrid::new(2, 2).unwrap();
        g.set_water_level(1, 1);
        assert!(!g.is_valid_destination(1));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = HexGrid::new(3, 2).unwrap();
        g.set_elevation(1, 2);
        g.set_walled(4, true);
        let json = serde_json::to_string(&g).unwrap();
        let back: HexGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cells(), g.cells());
        assert_eq!(back.neighbor(0, HexDirection::E), Some(1));
    }
}
