use core::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// 2D integer coordinate for grid positions. The y axis points up.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord2 {
    pub x: i32,
    pub y: i32,
}

impl Coord2 {
    pub const ZERO: Coord2 = Coord2 { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn manhattan_distance(self, other: Coord2) -> u32 {
        (self.x - other.x).unsigned_abs() + (self.y - other.y).unsigned_abs()
    }

    /// Squared straight-line distance. Ordering-equivalent to the Euclidean
    /// distance without the square root.
    #[inline]
    pub fn distance_squared(self, other: Coord2) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

impl Add for Coord2 {
    type Output = Coord2;

    fn add(self, rhs: Self) -> Self::Output {
        Coord2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord2 {
    type Output = Coord2;

    fn sub(self, rhs: Self) -> Self::Output {
        Coord2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Coord2 {
    type Output = Coord2;

    fn mul(self, rhs: i32) -> Self::Output {
        Coord2::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(i32, i32)> for Coord2 {
    fn from((x, y): (i32, i32)) -> Self {
        Coord2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord2_add() {
        assert_eq!(Coord2::new(1, 2) + Coord2::new(3, 4), Coord2::new(4, 6));
    }

    #[test]
    fn coord2_sub() {
        assert_eq!(Coord2::new(5, 6) - Coord2::new(1, 4), Coord2::new(4, 2));
    }

    #[test]
    fn coord2_scale() {
        assert_eq!(Coord2::new(0, 1) * 4, Coord2::new(0, 4));
    }

    #[test]
    fn coord2_manhattan() {
        assert_eq!(Coord2::new(0, 0).manhattan_distance(Coord2::new(3, 4)), 7);
        assert_eq!(Coord2::new(-2, 5).manhattan_distance(Coord2::new(1, 1)), 7);
    }

    #[test]
    fn coord2_distance_squared() {
        assert_eq!(Coord2::new(0, 0).distance_squared(Coord2::new(3, 4)), 25);
    }
}
