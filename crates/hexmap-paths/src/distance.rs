use hexmap_core::HexCoordinates;

/// Hex-step distance between two cells, used as the search heuristic.
///
/// Admissible as long as every step costs at least 1.
#[inline]
pub fn hex_distance(a: HexCoordinates, b: HexCoordinates) -> i32 {
    a.distance_to(b)
}
