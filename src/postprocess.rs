//! Whole-floor clean-up passes run after the raw generators.

use crate::coord::Coord2;
use crate::floor::{self, FloorSet};

/// Fills enclosed gaps: each round, every boundary cell with at least three
/// cardinal floor neighbors becomes floor. Neighbor counts use the floor as it
/// stood at the start of the round.
pub fn fill_holes(floor: &mut FloorSet, iterations: u32) {
    for _ in 0..iterations {
        let fills: Vec<Coord2> = floor::boundary(floor)
            .into_iter()
            .filter(|&gap| floor::cardinal_floor_neighbors(floor, gap) >= 3)
            .collect();
        if fills.is_empty() {
            break;
        }
        floor.extend(fills);
    }
}

/// One-ring cardinal dilation, `strength` times.
pub fn dilate(floor: &mut FloorSet, strength: u32) {
    for _ in 0..strength {
        let ring = floor::boundary(floor);
        floor.extend(ring);
    }
}

/// Cells with exactly one cardinal floor neighbor.
pub fn find_dead_ends(floor: &FloorSet) -> Vec<Coord2> {
    floor
        .iter()
        .copied()
        .filter(|&cell| floor::cardinal_floor_neighbors(floor, cell) == 1)
        .collect()
}

/// Builds a room at every dead end not already covered by `rooms`, merging each
/// into `rooms` before the next dead end is checked. Returns how many rooms
/// were built.
pub fn backfill_dead_ends<F>(dead_ends: &[Coord2], rooms: &mut FloorSet, mut build: F) -> usize
where
    F: FnMut(Coord2) -> FloorSet,
{
    let mut built = 0;
    for &end in dead_ends {
        if rooms.contains(&end) {
            continue;
        }
        let room = build(end);
        rooms.extend(room);
        built += 1;
    }
    built
}
