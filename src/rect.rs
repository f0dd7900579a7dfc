use serde::{Deserialize, Serialize};

use crate::coord::Coord2;
use crate::floor::FloorSet;

/// Axis-aligned rectangle of cells: min corner plus size.
///
/// Covers `x..x + width` and `y..y + height`. Non-positive sizes are empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_min_size(min: Coord2, size: Coord2) -> Self {
        Self::new(min.x, min.y, size.x, size.y)
    }

    #[inline]
    pub const fn min(&self) -> Coord2 {
        Coord2::new(self.x, self.y)
    }

    /// Exclusive max corner.
    #[inline]
    pub const fn max(&self) -> Coord2 {
        Coord2::new(self.x + self.width, self.y + self.height)
    }

    #[inline]
    pub const fn size(&self) -> Coord2 {
        Coord2::new(self.width, self.height)
    }

    #[inline]
    pub fn area(&self) -> i64 {
        if self.is_empty() {
            return 0;
        }
        self.width as i64 * self.height as i64
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Integer center, half sizes truncated.
    #[inline]
    pub fn center(&self) -> Coord2 {
        Coord2::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Exact center rounded half-to-even on each axis.
    pub fn rounded_center(&self) -> Coord2 {
        let cx = self.x as f64 + self.width as f64 / 2.0;
        let cy = self.y as f64 + self.height as f64 / 2.0;
        Coord2::new(cx.round_ties_even() as i32, cy.round_ties_even() as i32)
    }

    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// Grows the rectangle by `margin` cells on every side.
    pub fn expanded(&self, margin: i32) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.width + margin * 2,
            self.height + margin * 2,
        )
    }

    pub fn cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        let (w, h) = (self.width.max(0), self.height.max(0));
        (0..w).flat_map(move |dx| (0..h).map(move |dy| Coord2::new(self.x + dx, self.y + dy)))
    }

    pub fn to_floor(&self) -> FloorSet {
        self.cells().collect()
    }
}
