use crate::floor::FloorSet;
use crate::rect::Rect;

/// Footprint of a room kept in a finished layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoomFootprint {
    /// Grown room (random walk or box around an anchor).
    Cells(FloorSet),
    Rect(Rect),
}

impl RoomFootprint {
    pub fn cell_count(&self) -> usize {
        match self {
            RoomFootprint::Cells(cells) => cells.len(),
            RoomFootprint::Rect(rect) => rect.area() as usize,
        }
    }
}

/// Result of one generation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    /// Every walkable cell: rooms and widened corridors.
    pub floor: FloorSet,
    /// Rooms that take part in the connectivity graph.
    pub main_rooms: Vec<RoomFootprint>,
    /// Rooms attached only because they touch the main floor.
    pub side_rooms: Vec<Rect>,
    pub corridor_count: usize,
}

impl Layout {
    pub fn room_count(&self) -> usize {
        self.main_rooms.len() + self.side_rooms.len()
    }
}
