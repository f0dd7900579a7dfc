//! Room-first layouts: partition an area into rectangles, carve a room in each,
//! then chain the rooms together nearest-first.

use rand::Rng;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::bsp;
use crate::coord::Coord2;
use crate::corridor::{self, CorridorWidth};
use crate::drunkard::WalkConfig;
use crate::error::GenerationWarning;
use crate::floor::FloorSet;
use crate::layout::{Layout, RoomFootprint};
use crate::rect::Rect;

/// Termination policy for the partitioner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitPolicy {
    /// Split while halves still fit `min_room_size`; cap at `rooms_count` when
    /// `fixed_rooms_count` is set.
    #[default]
    MinSize,
    /// Halve everything until exactly `rooms_count` rectangles exist.
    ToCount,
}

/// How the floor of a partition cell is carved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoomFill {
    /// The whole cell inset by `space_between_rooms` on every side.
    #[default]
    Simple,
    /// A random walk from the cell center, clipped to the cell.
    RandomWalk(WalkConfig),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomFirstConfig {
    pub origin: Coord2,
    pub area_size: Coord2,
    pub min_room_size: Coord2,
    pub space_between_rooms: i32,
    pub corridor_width: CorridorWidth,
    pub rooms_count: u32,
    pub fixed_rooms_count: bool,
    pub split: SplitPolicy,
    pub fill: RoomFill,
}

impl Default for RoomFirstConfig {
    fn default() -> Self {
        Self {
            origin: Coord2::ZERO,
            area_size: Coord2::new(60, 60),
            min_room_size: Coord2::new(8, 8),
            space_between_rooms: 1,
            corridor_width: CorridorWidth::One,
            rooms_count: 10,
            fixed_rooms_count: false,
            split: SplitPolicy::MinSize,
            fill: RoomFill::Simple,
        }
    }
}

pub fn room_first_generate(
    config: &RoomFirstConfig,
    rng: &mut impl RngCore,
) -> Result<Layout, GenerationWarning> {
    let area = Rect::from_min_size(config.origin, config.area_size);
    let rooms = match config.split {
        SplitPolicy::MinSize => bsp::partition(
            area,
            config.min_room_size.x,
            config.min_room_size.y,
            config.rooms_count as usize,
            config.fixed_rooms_count,
            rng,
        ),
        SplitPolicy::ToCount => bsp::partition_to_count(area, config.rooms_count as usize, rng),
    };
    if rooms.is_empty() {
        return Err(GenerationWarning::NoRooms);
    }
    log::debug!("partitioned {area:?} into {} rooms", rooms.len());

    let space = config.space_between_rooms;
    let mut floor = match &config.fill {
        RoomFill::Simple => simple_rooms(&rooms, space),
        RoomFill::RandomWalk(walk) => random_walk_rooms(&rooms, space, walk, rng),
    };

    let centers: Vec<Coord2> = rooms.iter().map(Rect::rounded_center).collect();
    let corridors = connect_nearest(centers, config.corridor_width, rng);
    floor.extend(corridors);

    Ok(Layout {
        floor,
        corridor_count: rooms.len() - 1,
        main_rooms: rooms.into_iter().map(RoomFootprint::Rect).collect(),
        side_rooms: Vec::new(),
    })
}

fn simple_rooms(rooms: &[Rect], space: i32) -> FloorSet {
    let mut floor = FloorSet::default();
    for room in rooms {
        for col in space..room.width - space {
            for row in space..room.height - space {
                floor.insert(room.min() + Coord2::new(col, row));
            }
        }
    }
    floor
}

// The y window starts `space` below the cell, unlike the x window.
fn random_walk_rooms(
    rooms: &[Rect],
    space: i32,
    walk: &WalkConfig,
    rng: &mut impl RngCore,
) -> FloorSet {
    let mut floor = FloorSet::default();
    for room in rooms {
        let (min, max) = (room.min(), room.max());
        let cells = walk.generate(room.rounded_center(), rng);
        floor.extend(cells.into_iter().filter(|c| {
            c.x >= min.x + space
                && c.x <= max.x - space
                && c.y >= min.y - space
                && c.y <= max.y - space
        }));
    }
    floor
}

/// Greedy chain: start at a random center, then repeatedly link the current
/// center to the nearest unvisited one.
fn connect_nearest(
    mut centers: Vec<Coord2>,
    width: CorridorWidth,
    rng: &mut impl RngCore,
) -> FloorSet {
    let mut corridors = FloorSet::default();
    if centers.is_empty() {
        return corridors;
    }
    let mut current = centers.remove(rng.gen_range(0..centers.len()));
    while let Some(index) = closest(current, &centers) {
        let next = centers.remove(index);
        corridors.extend(corridor::connect(current, next, width));
        current = next;
    }
    corridors
}

/// First center with the strictly smallest Euclidean distance.
fn closest(from: Coord2, centers: &[Coord2]) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (index, &center) in centers.iter().enumerate() {
        let distance = from.distance_squared(center);
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}
