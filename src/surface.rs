//! Where finished layouts go.

use crate::coord::Coord2;
use crate::floor::{self, FloorSet};
use crate::grid::Grid;
use crate::neighborhood::Neighborhood;

/// Receiver of a finished layout. Painting is all-or-nothing: a surface only
/// ever sees complete floor sets.
pub trait TileSurface {
    /// Wipes everything painted so far.
    fn clear(&mut self);

    fn paint_floor(&mut self, floor: &FloorSet);

    /// Derives and paints walls around `floor`.
    fn paint_walls(&mut self, floor: &FloorSet);
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Tile {
    #[default]
    Empty,
    Floor,
    Wall,
}

impl Tile {
    pub const fn glyph(self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::Floor => '.',
            Tile::Wall => '#',
        }
    }
}

/// In-memory surface. Walls are every Moore neighbor of a floor cell that is
/// not floor itself.
#[derive(Clone, Debug, Default)]
pub struct TileCanvas {
    floor: FloorSet,
    walls: FloorSet,
    clears: u32,
}

impl TileCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn floor(&self) -> &FloorSet {
        &self.floor
    }

    pub fn walls(&self) -> &FloorSet {
        &self.walls
    }

    /// Number of times the canvas has been cleared.
    pub fn clear_count(&self) -> u32 {
        self.clears
    }

    pub fn is_blank(&self) -> bool {
        self.floor.is_empty() && self.walls.is_empty()
    }

    pub fn tile_at(&self, coord: Coord2) -> Tile {
        if self.floor.contains(&coord) {
            Tile::Floor
        } else if self.walls.contains(&coord) {
            Tile::Wall
        } else {
            Tile::Empty
        }
    }

    /// Dense copy of everything painted, `None` when blank.
    pub fn render(&self) -> Option<Grid<Tile>> {
        let all = floor::union_all([&self.floor, &self.walls]);
        let (min, max) = floor::bounds(&all)?;
        let mut grid = Grid::spanning(min, max, Tile::Empty);
        for &cell in &self.walls {
            grid.set(cell, Tile::Wall);
        }
        for &cell in &self.floor {
            grid.set(cell, Tile::Floor);
        }
        Some(grid)
    }

    /// Text rendering with the highest row first.
    pub fn to_ascii(&self) -> String {
        let Some(grid) = self.render() else {
            return String::new();
        };
        let mut out = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);
        for y in (0..grid.height()).rev() {
            out.extend(grid.row(y).iter().map(|t| t.glyph()));
            out.push('\n');
        }
        out
    }
}

impl TileSurface for TileCanvas {
    fn clear(&mut self) {
        self.floor.clear();
        self.walls.clear();
        self.clears += 1;
    }

    fn paint_floor(&mut self, floor: &FloorSet) {
        floor::union(&mut self.floor, floor);
        self.walls.retain(|c| !floor.contains(c));
    }

    fn paint_walls(&mut self, floor: &FloorSet) {
        for &cell in floor {
            for next in floor::neighbors(cell, Neighborhood::Moore) {
                if !floor.contains(&next) && !self.floor.contains(&next) {
                    self.walls.insert(next);
                }
            }
        }
    }
}
