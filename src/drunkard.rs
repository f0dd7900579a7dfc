use rand::seq::IteratorRandom;
use rand::Rng;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::coord::Coord2;
use crate::floor::FloorSet;
use crate::neighborhood::Dir4;

/// Parameters of a repeated drunkard's walk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Steps per walk.
    pub walk_length: u32,
    /// Number of walks unioned together.
    pub iterations: u32,
    /// Restart each walk from a random already-visited cell instead of the anchor.
    pub start_randomly: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            walk_length: 10,
            iterations: 10,
            start_randomly: true,
        }
    }
}

impl WalkConfig {
    pub fn generate(&self, start: Coord2, rng: &mut impl RngCore) -> FloorSet {
        multi_walk(
            start,
            self.walk_length,
            self.iterations,
            self.start_randomly,
            rng,
        )
    }
}

#[inline]
pub fn random_direction(rng: &mut impl RngCore) -> Dir4 {
    Dir4::ALL[rng.gen_range(0..Dir4::ALL.len())]
}

/// Single walk of `step_length` random cardinal steps. Revisits are allowed,
/// so the result holds between 1 and `step_length + 1` cells.
pub fn walk(start: Coord2, step_length: u32, rng: &mut impl RngCore) -> FloorSet {
    let mut visited = FloorSet::default();
    visited.insert(start);
    let mut pos = start;
    for _ in 0..step_length {
        pos = pos + random_direction(rng).offset();
        visited.insert(pos);
    }
    visited
}

/// Union of `iterations` walks.
pub fn multi_walk(
    start: Coord2,
    step_length: u32,
    iterations: u32,
    restart_from_visited: bool,
    rng: &mut impl RngCore,
) -> FloorSet {
    let mut visited = FloorSet::default();
    let mut current = start;
    for _ in 0..iterations {
        let path = walk(current, step_length, rng);
        visited.extend(path);
        if restart_from_visited {
            if let Some(next) = visited.iter().copied().choose(rng) {
                current = next;
            }
        }
    }
    visited
}

/// Straight corridor in one random cardinal direction holding `length` cells
/// (at least the start cell), ordered from `start`.
pub fn walk_corridor(start: Coord2, length: u32, rng: &mut impl RngCore) -> Vec<Coord2> {
    let step = random_direction(rng).offset();
    let mut corridor = Vec::with_capacity(length.max(1) as usize);
    let mut pos = start;
    corridor.push(pos);
    while (corridor.len() as u32) < length {
        pos = pos + step;
        corridor.push(pos);
    }
    corridor
}
