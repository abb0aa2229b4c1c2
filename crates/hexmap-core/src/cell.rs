//! The [`HexCell`] terrain record and [`UnitId`].

use crate::coords::HexCoordinates;
use crate::direction::HexDirection;

/// Opaque handle of a unit standing on a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

/// Terrain attributes of one hex cell.
///
/// Cells live in a [`HexGrid`](crate::HexGrid), which maintains the
/// cross-cell rules (symmetric roads, river validity). Fields are read
/// through accessors; edits go through the grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCell {
    pub(crate) coordinates: HexCoordinates,
    pub(crate) elevation: i32,
    pub(crate) water_level: i32,
    pub(crate) urban_level: i32,
    pub(crate) farm_level: i32,
    pub(crate) plant_level: i32,
    pub(crate) special_index: i32,
    pub(crate) walled: bool,
    pub(crate) roads: [bool; 6],
    pub(crate) incoming_river: Option<HexDirection>,
    pub(crate) outgoing_river: Option<HexDirection>,
    pub(crate) unit: Option<UnitId>,
}

impl HexCell {
    /// A bare cell at `coordinates`: elevation 0, dry, no features.
    pub fn new(coordinates: HexCoordinates) -> Self {
        Self {
            coordinates,
            ..Self::default()
        }
    }

    #[inline]
    pub fn coordinates(&self) -> HexCoordinates {
        self.coordinates
    }

    #[inline]
    pub fn elevation(&self) -> i32 {
        self.elevation
    }

    #[inline]
    pub fn water_level(&self) -> i32 {
        self.water_level
    }

    #[inline]
    pub fn urban_level(&self) -> i32 {
        self.urban_level
    }

    #[inline]
    pub fn farm_level(&self) -> i32 {
        self.farm_level
    }

    #[inline]
    pub fn plant_level(&self) -> i32 {
        self.plant_level
    }

    #[inline]
    pub fn special_index(&self) -> i32 {
        self.special_index
    }

    #[inline]
    pub fn is_special(&self) -> bool {
        self.special_index > 0
    }

    #[inline]
    pub fn walled(&self) -> bool {
        self.walled
    }

    /// Water covers the cell when its level is above the ground.
    #[inline]
    pub fn is_underwater(&self) -> bool {
        self.water_level > self.elevation
    }

    #[inline]
    pub fn incoming_river(&self) -> Option<HexDirection> {
        self.incoming_river
    }

    #[inline]
    pub fn outgoing_river(&self) -> Option<HexDirection> {
        self.outgoing_river
    }

    #[inline]
    pub fn has_river(&self) -> bool {
        self.incoming_river.is_some() || self.outgoing_river.is_some()
    }

    /// A river starts or ends here (exactly one of in/out is present).
    #[inline]
    pub fn has_river_begin_or_end(&self) -> bool {
        self.incoming_river.is_some() != self.outgoing_river.is_some()
    }

    #[inline]
    pub fn has_river_through_edge(&self, direction: HexDirection) -> bool {
        self.incoming_river == Some(direction) || self.outgoing_river == Some(direction)
    }

    #[inline]
    pub fn has_road_through_edge(&self, direction: HexDirection) -> bool {
        self.roads[direction.index()]
    }

    #[inline]
    pub fn has_roads(&self) -> bool {
        self.roads.iter().any(|&r| r)
    }

    #[inline]
    pub fn unit(&self) -> Option<UnitId> {
        self.unit
    }

    /// Vegetation and development levels that slow movement into the cell.
    /// Negative levels count as zero.
    #[inline]
    pub fn feature_levels(&self) -> i32 {
        self.urban_level
            .max(0)
            .saturating_add(self.farm_level.max(0))
            .saturating_add(self.plant_level.max(0))
    }
}
