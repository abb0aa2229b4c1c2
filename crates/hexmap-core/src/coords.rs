//! Cube coordinates for hex cells: [`HexCoordinates`].
//!
//! Only `x` and `z` are stored; `y` is always derived as `-x - z`, so the
//! cube invariant `x + y + z == 0` holds by construction.

use std::fmt;
use std::ops::{Add, Sub};

use crate::direction::HexDirection;

// ---------------------------------------------------------------------------
// HexCoordinates
// ---------------------------------------------------------------------------

/// Cube coordinates of a hex cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoordinates {
    x: i32,
    z: i32,
}

impl HexCoordinates {
    /// Origin (0, 0, 0).
    pub const ZERO: Self = Self { x: 0, z: 0 };

    /// Create coordinates from the stored `x` and `z` components.
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Convert row-offset coordinates (`col`, `row`) to cube coordinates.
    ///
    /// Every other row is shifted half a cell, so the column maps to `x`
    /// with a correction of `row / 2`.
    #[inline]
    pub const fn from_offset(col: i32, row: i32) -> Self {
        Self::new(col - row / 2, row)
    }

    /// Inverse of [`from_offset`](Self::from_offset).
    #[inline]
    pub const fn to_offset(self) -> (i32, i32) {
        (self.x + self.z / 2, self.z)
    }

    #[inline]
    pub const fn x(self) -> i32 {
        self.x
    }

    /// Derived component, `-x - z`.
    #[inline]
    pub const fn y(self) -> i32 {
        -self.x - self.z
    }

    #[inline]
    pub const fn z(self) -> i32 {
        self.z
    }

    /// Number of hex steps between `self` and `other`.
    #[inline]
    pub fn distance_to(self, other: Self) -> i32 {
        ((self.x - other.x).abs() + (self.y() - other.y()).abs() + (self.z - other.z).abs()) / 2
    }

    /// The coordinates one step away in `direction`.
    #[inline]
    pub fn neighbor(self, direction: HexDirection) -> Self {
        self + direction.step()
    }

    /// The three components on separate lines, for cell labels.
    pub fn to_string_on_separate_lines(self) -> String {
        format!("{}\n{}\n{}", self.x, self.y(), self.z)
    }
}

impl fmt::Display for HexCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y(), self.z)
    }
}

impl Add for HexCoordinates {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for HexCoordinates {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.z - rhs.z)
    }
}
