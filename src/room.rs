use rand::Rng;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::coord::Coord2;
use crate::drunkard::WalkConfig;
use crate::floor::FloorSet;
use crate::postprocess;

/// Every cell of the `size.x` by `size.y` rectangle centered on `center`.
/// The min corner is `center - size / 2`, truncated toward zero.
pub fn box_room(center: Coord2, size: Coord2) -> FloorSet {
    let mut room = FloorSet::default();
    if size.x <= 0 || size.y <= 0 {
        return room;
    }
    let min = Coord2::new(center.x - size.x / 2, center.y - size.y / 2);
    for x in 0..size.x {
        for y in 0..size.y {
            room.insert(min + Coord2::new(x, y));
        }
    }
    room
}

/// Uniform in `[0, delta)`, zero for non-positive deltas.
#[inline]
pub(crate) fn jitter(rng: &mut impl RngCore, delta: i32) -> i32 {
    if delta <= 0 {
        0
    } else {
        rng.gen_range(0..delta)
    }
}

/// How a room is grown around an anchor cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoomShape {
    /// Rectangle of `min_size + [0, size_delta)` cells per axis.
    Box { min_size: Coord2, size_delta: Coord2 },
    RandomWalk(WalkConfig),
}

impl Default for RoomShape {
    fn default() -> Self {
        RoomShape::Box {
            min_size: Coord2::new(4, 4),
            size_delta: Coord2::new(4, 4),
        }
    }
}

impl RoomShape {
    pub fn build(&self, anchor: Coord2, rng: &mut impl RngCore) -> FloorSet {
        match self {
            RoomShape::Box {
                min_size,
                size_delta,
            } => {
                let size = *min_size
                    + Coord2::new(jitter(rng, size_delta.x), jitter(rng, size_delta.y));
                box_room(anchor, size)
            }
            RoomShape::RandomWalk(walk) => walk.generate(anchor, rng),
        }
    }
}

/// Optional clean-up applied to every freshly built room.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomFinish {
    /// Hole-filling rounds, `None` to skip.
    pub remove_holes: Option<u32>,
    /// Dilation strength, `None` to skip.
    pub expand_floor: Option<u32>,
}

impl RoomFinish {
    pub fn apply(&self, room: &mut FloorSet) {
        if let Some(iterations) = self.remove_holes {
            postprocess::fill_holes(room, iterations);
        }
        if let Some(strength) = self.expand_floor {
            postprocess::dilate(room, strength);
        }
    }
}
