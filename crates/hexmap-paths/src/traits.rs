use hexmap_core::{HexCoordinates, HexDirection, HexGrid, UnitId};

/// Read-only view of a hex map, as needed by the pathfinder.
///
/// Cells are addressed by index in `0..cell_count()`. Every method other
/// than `cell_count` may assume it is given a valid index.
pub trait HexTopology {
    fn cell_count(&self) -> usize;

    /// The neighbor of `cell` in `direction`; `None` at the map edge.
    fn neighbor(&self, cell: usize, direction: HexDirection) -> Option<usize>;

    fn coordinates(&self, cell: usize) -> HexCoordinates;

    fn elevation(&self, cell: usize) -> i32;

    fn is_underwater(&self, cell: usize) -> bool;

    fn has_road_through_edge(&self, cell: usize, direction: HexDirection) -> bool;

    fn has_river_through_edge(&self, _cell: usize, _direction: HexDirection) -> bool {
        false
    }

    fn is_walled(&self, cell: usize) -> bool;

    fn urban_level(&self, _cell: usize) -> i32 {
        0
    }

    fn farm_level(&self, _cell: usize) -> i32 {
        0
    }

    fn plant_level(&self, _cell: usize) -> i32 {
        0
    }

    /// Sum of the urban, farm and plant levels of `cell`, with negative
    /// levels counted as zero.
    fn feature_levels(&self, cell: usize) -> i32 {
        self.urban_level(cell)
            .max(0)
            .saturating_add(self.farm_level(cell).max(0))
            .saturating_add(self.plant_level(cell).max(0))
    }

    /// The unit standing on `cell`, if any.
    fn occupant(&self, cell: usize) -> Option<UnitId>;
}

impl HexTopology for HexGrid {
    #[inline]
    fn cell_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn neighbor(&self, cell: usize, direction: HexDirection) -> Option<usize> {
        HexGrid::neighbor(self, cell, direction)
    }

    #[inline]
    fn coordinates(&self, cell: usize) -> HexCoordinates {
        self.cells()[cell].coordinates()
    }

    #[inline]
    fn elevation(&self, cell: usize) -> i32 {
        self.cells()[cell].elevation()
    }

    #[inline]
    fn is_underwater(&self, cell: usize) -> bool {
        self.cells()[cell].is_underwater()
    }

    #[inline]
    fn has_road_through_edge(&self, cell: usize, direction: HexDirection) -> bool {
        self.cells()[cell].has_road_through_edge(direction)
    }

    #[inline]
    fn has_river_through_edge(&self, cell: usize, direction: HexDirection) -> bool {
        self.cells()[cell].has_river_through_edge(direction)
    }

    #[inline]
    fn is_walled(&self, cell: usize) -> bool {
        self.cells()[cell].walled()
    }

    #[inline]
    fn urban_level(&self, cell: usize) -> i32 {
        self.cells()[cell].urban_level()
    }

    #[inline]
    fn farm_level(&self, cell: usize) -> i32 {
        self.cells()[cell].farm_level()
    }

    #[inline]
    fn plant_level(&self, cell: usize) -> i32 {
        self.cells()[cell].plant_level()
    }

    #[inline]
    fn feature_levels(&self, cell: usize) -> i32 {
        self.cells()[cell].feature_levels()
    }

    #[inline]
    fn occupant(&self, cell: usize) -> Option<UnitId> {
        self.cells()[cell].unit()
    }
}
