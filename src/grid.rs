use crate::coord::Coord2;

/// Dense 2D grid over a window of world coordinates, backed by a flat Vec.
///
/// Row 0 holds the cells with the lowest y.
#[derive(Clone, Debug)]
pub struct Grid<T> {
    cells: Vec<T>,
    origin: Coord2,
    width: u32,
    height: u32,
}

impl<T: Clone> Grid<T> {
    pub fn new_filled(origin: Coord2, width: u32, height: u32, fill: T) -> Self {
        let len = width as usize * height as usize;
        Self {
            cells: vec![fill; len],
            origin,
            width,
            height,
        }
    }

    /// Grid spanning the inclusive corners `min` and `max`.
    pub fn spanning(min: Coord2, max: Coord2, fill: T) -> Self {
        let width = (max.x - min.x + 1).max(0) as u32;
        let height = (max.y - min.y + 1).max(0) as u32;
        Self::new_filled(min, width, height, fill)
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, coord: Coord2) -> bool {
        let local = coord - self.origin;
        local.x >= 0
            && local.y >= 0
            && local.x < self.width as i32
            && local.y < self.height as i32
    }

    fn index_of(&self, coord: Coord2) -> Option<usize> {
        if !self.in_bounds(coord) {
            return None;
        }
        let local = coord - self.origin;
        Some(local.y as usize * self.width as usize + local.x as usize)
    }

    pub fn get(&self, coord: Coord2) -> Option<&T> {
        self.index_of(coord).and_then(|i| self.cells.get(i))
    }

    /// Writes inside the window; out-of-window writes are ignored.
    pub fn set(&mut self, coord: Coord2, value: T) {
        if let Some(index) = self.index_of(coord) {
            self.cells[index] = value;
        }
    }

    pub fn row(&self, y: u32) -> &[T] {
        assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }
}
