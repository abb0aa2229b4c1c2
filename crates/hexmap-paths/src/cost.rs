//! Movement costs and turn quantization.

use hexmap_core::{HexDirection, HexEdgeType};

use crate::traits::HexTopology;

/// Movement points a unit spends per turn unless told otherwise.
pub const DEFAULT_SPEED: i32 = 24;

/// Cost of crossing one edge, by edge kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveCosts {
    /// Following a road, regardless of slope or features.
    pub road: i32,
    /// A flat edge, before feature levels are added.
    pub flat: i32,
    /// A one-step slope, before feature levels are added.
    pub slope: i32,
    /// Added when the edge is crossed by a river.
    pub river_crossing: i32,
}

impl Default for MoveCosts {
    fn default() -> Self {
        Self {
            road: 1,
            flat: 5,
            slope: 10,
            river_crossing: 0,
        }
    }
}

impl MoveCosts {
    /// Cost of moving from `from` across `direction` into its neighbor `to`,
    /// or `None` when the edge cannot be crossed (a cliff, or a wall without
    /// a road through it).
    ///
    /// The result is at least 1, whatever the configured costs and feature
    /// levels: road, flat and slope costs below 1 count as 1, and a negative
    /// river penalty counts as 0.
    pub fn edge_cost<T: HexTopology + ?Sized>(
        &self,
        topology: &T,
        from: usize,
        direction: HexDirection,
        to: usize,
    ) -> Option<i32> {
        let edge = HexEdgeType::from_elevations(topology.elevation(from), topology.elevation(to));
        if edge == HexEdgeType::Cliff {
            return None;
        }
        if topology.has_road_through_edge(from, direction) {
            return Some(self.road.max(1));
        }
        if topology.is_walled(from) != topology.is_walled(to) {
            return None;
        }
        let base = if edge == HexEdgeType::Flat {
            self.flat
        } else {
            self.slope
        };
        let mut cost = base.max(1).saturating_add(topology.feature_levels(to).max(0));
        if topology.has_river_through_edge(from, direction) {
            cost = cost.saturating_add(self.river_crossing.max(0));
        }
        Some(cost)
    }
}

/// Distance charged for a move of `move_cost` made from `distance`, with
/// `speed` movement points per turn.
///
/// A move that would run past the end of the current turn starts at the
/// beginning of the next one instead: the rest of the current turn is lost.
/// Turns are numbered from the first point spent, hence the `- 1`.
/// Distances saturate at `i32::MAX` instead of overflowing.
#[inline]
pub fn charge_move(distance: i32, move_cost: i32, speed: i32) -> i32 {
    let current_turn = (distance - 1) / speed;
    let tentative = distance.saturating_add(move_cost);
    let turn = (tentative - 1) / speed;
    if turn > current_turn {
        (turn * speed).saturating_add(move_cost)
    } else {
        tentative
    }
}

/// Turn in which a cell reached at `distance` is entered, counting from 0.
#[inline]
pub fn turn_of(distance: i32, speed: i32) -> i32 {
    (distance - 1) / speed
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexmap_core::HexGrid;

    #[test]
    fn quantization_boundary() {
        // Turn 0 ends at 5; a 3-point move from 4 spills over and is
        // charged as if started at the top of turn 1.
        assert_eq!(charge_move(4, 3, 5), 8);
    }

    #[test]
    fn quantization_within_turn() {
        assert_eq!(charge_move(0, 5, 24), 5);
        assert_eq!(charge_move(15, 5, 24), 20);
        assert_eq!(charge_move(19, 5, 24), 24);
        assert_eq!(charge_move(20, 5, 24), 29);
        assert_eq!(charge_move(24, 5, 24), 29);
        assert_eq!(charge_move(25, 5, 24), 30);
    }

    #[test]
    fn quantization_saturates() {
        assert_eq!(charge_move(i32::MAX - 2, 10, 24), i32::MAX);
        assert_eq!(charge_move(i32::MAX, i32::MAX, 1), i32::MAX);
        assert_eq!(charge_move(0, i32::MAX, 24), i32::MAX);
    }

    #[test]
    fn turns_count_from_first_point() {
        assert_eq!(turn_of(0, 24), 0);
        assert_eq!(turn_of(1, 24), 0);
        assert_eq!(turn_of(24, 24), 0);
        assert_eq!(turn_of(25, 24), 1);
    }

    fn pair() -> (HexGrid, usize, usize) {
        let g = HexGrid::new(2, 1).unwrap();
        (g, 0, 1)
    }

    #[test]
    fn flat_and_slope() {
        let costs = MoveCosts::default();
        let (mut g, a, b) = pair();
        assert_eq!(costs.edge_cost(&g, a, HexDirection::E, b), Some(5));
        g.set_elevation(b, 1);
        assert_eq!(costs.edge_cost(&g, a, HexDirection::E, b), Some(10));
        g.set_elevation(b, 2);
        assert_eq!(costs.edge_cost(&g, a, HexDirection::E, b), None);
    }

    #[test]
    fn features_slow_movement_into_cell() {
        let costs = MoveCosts::default();
        let (mut g, a, b) = pair();
        g.set_urban_level(b, 1);
        g.set_farm_level(b, 2);
        g.set_plant_level(b, 3);
        assert_eq!(costs.edge_cost(&g, a, HexDirection::E, b), Some(11));
        // Only the entered cell counts.
        assert_eq!(costs.edge_cost(&g, b, HexDirection::W, a), Some(5));
    }

    /// Reports fixed feature levels for every cell, bypassing the grid's
    /// clamping.
    struct RawLevels {
        grid: HexGrid,
        levels: i32,
    }

    impl HexTopology for RawLevels {
        fn cell_count(&self) -> usize {
            self.grid.cell_count()
        }
        fn neighbor(&self, cell: usize, direction: HexDirection) -> Option<usize> {
            self.grid.neighbor(cell, direction)
        }
        fn coordinates(&self, cell: usize) -> hexmap_core::HexCoordinates {
            HexTopology::coordinates(&self.grid, cell)
        }
        fn elevation(&self, cell: usize) -> i32 {
            HexTopology::elevation(&self.grid, cell)
        }
        fn is_underwater(&self, cell: usize) -> bool {
            HexTopology::is_underwater(&self.grid, cell)
        }
        fn has_road_through_edge(&self, cell: usize, direction: HexDirection) -> bool {
            HexTopology::has_road_through_edge(&self.grid, cell, direction)
        }
        fn is_walled(&self, cell: usize) -> bool {
            HexTopology::is_walled(&self.grid, cell)
        }
        fn plant_level(&self, _cell: usize) -> i32 {
            self.levels
        }
        fn urban_level(&self, _cell: usize) -> i32 {
            self.levels.signum()
        }
        fn occupant(&self, cell: usize) -> Option<hexmap_core::UnitId> {
            HexTopology::occupant(&self.grid, cell)
        }
    }

    #[test]
    fn negative_feature_levels_do_not_lower_cost() {
        let (g, a, b) = pair();
        let t = RawLevels {
            grid: g,
            levels: -20,
        };
        assert_eq!(MoveCosts::default().edge_cost(&t, a, HexDirection::E, b), Some(5));
    }

    #[test]
    fn huge_feature_levels_saturate() {
        let (g, a, b) = pair();
        let t = RawLevels {
            grid: g,
            levels: i32::MAX,
        };
        assert_eq!(
            MoveCosts::default().edge_cost(&t, a, HexDirection::E, b),
            Some(i32::MAX)
        );
    }

    #[test]
    fn nonpositive_costs_are_floored() {
        let costs = MoveCosts {
            road: 0,
            flat: -5,
            slope: i32::MIN,
            river_crossing: -100,
        };
        let (mut g, a, b) = pair();
        g.set_outgoing_river(a, HexDirection::E);
        assert_eq!(costs.edge_cost(&g, a, HexDirection::E, b), Some(1));
        g.remove_river(a);
        g.set_elevation(b, 1);
        assert_eq!(costs.edge_cost(&g, a, HexDirection::E, b), Some(1));
        assert!(g.add_road(a, HexDirection::E));
        assert_eq!(costs.edge_cost(&g, a, HexDirection::E, b), Some(1));
    }

    #[test]
    fn road_overrides_slope_and_features() {
        let costs = MoveCosts::default();
        let (mut g, a, b) = pair();
        g.set_elevation(b, 1);
        g.set_plant_level(b, 3);
        assert!(g.add_road(a, HexDirection::E));
        assert_eq!(costs.edge_cost(&g, a, HexDirection::E, b), Some(1));
        assert_eq!(costs.edge_cost(&g, b, HexDirection::W, a), Some(1));
    }

    #[test]
    fn walls_block_unless_road() {
        let costs = MoveCosts::default();
        let (mut g, a, b) = pair();
        g.set_walled(b, true);
        assert_eq!(costs.edge_cost(&g, a, HexDirection::E, b), None);
        g.set_walled(a, true);
        assert_eq!(costs.edge_cost(&g, a, HexDirection::E, b), Some(5));
        g.set_walled(a, false);
        assert!(g.add_road(a, HexDirection::E));
        assert_eq!(costs.edge_cost(&g, a, HexDirection::E, b), Some(1));
    }

    #[test]
    fn river_crossing_penalty() {
        let costs = MoveCosts {
            river_crossing: 4,
            ..MoveCosts::default()
        };
        let (mut g, a, b) = pair();
        g.set_outgoing_river(a, HexDirection::E);
        assert_eq!(costs.edge_cost(&g, a, HexDirection::E, b), Some(9));
        assert_eq!(costs.edge_cost(&g, b, HexDirection::W, a), Some(9));
        assert_eq!(
            MoveCosts::default().edge_cost(&g, a, HexDirection::E, b),
            Some(5)
        );
    }
}
