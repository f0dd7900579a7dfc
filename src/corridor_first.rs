//! Corridor-first layouts: carve a chain of straight random corridors, then
//! grow rooms at some of the joints and at every dead end.

use rand::seq::IteratorRandom;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::coord::Coord2;
use crate::corridor::{self, CorridorWidth};
use crate::drunkard::walk_corridor;
use crate::error::GenerationWarning;
use crate::floor::FloorSet;
use crate::layout::{Layout, RoomFootprint};
use crate::postprocess::{backfill_dead_ends, find_dead_ends};
use crate::room::{RoomFinish, RoomShape};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorridorFirstConfig {
    pub start: Coord2,
    /// Cells per corridor, start included.
    pub corridor_length: u32,
    /// Number of corridors chained end to start.
    pub build_iterations: u32,
    pub corridor_width: CorridorWidth,
    /// Share of corridor joints promoted to rooms, in `[0, 1]`.
    pub room_percent: f32,
    pub room_shape: RoomShape,
    pub finish: RoomFinish,
}

impl Default for CorridorFirstConfig {
    fn default() -> Self {
        Self {
            start: Coord2::ZERO,
            corridor_length: 14,
            build_iterations: 8,
            corridor_width: CorridorWidth::One,
            room_percent: 0.8,
            room_shape: RoomShape::default(),
            finish: RoomFinish::default(),
        }
    }
}

pub fn corridor_first_generate(
    config: &CorridorFirstConfig,
    rng: &mut impl RngCore,
) -> Result<Layout, GenerationWarning> {
    let mut corridor_floor = FloorSet::default();
    let mut anchors = FloorSet::default();
    let mut corridors = Vec::with_capacity(config.build_iterations as usize);

    let mut current = config.start;
    anchors.insert(current);
    for _ in 0..config.build_iterations {
        let corridor = walk_corridor(current, config.corridor_length, rng);
        if let Some(&end) = corridor.last() {
            current = end;
        }
        anchors.insert(current);
        corridor_floor.extend(corridor.iter().copied());
        corridors.push(corridor);
    }
    log::debug!(
        "carved {} corridors over {} cells, {} room anchors",
        corridors.len(),
        corridor_floor.len(),
        anchors.len()
    );

    let mut main_rooms = Vec::new();
    let mut room_floor = FloorSet::default();

    let promote = (anchors.len() as f32 * config.room_percent).round_ties_even() as usize;
    let chosen = anchors.iter().copied().choose_multiple(rng, promote);
    for anchor in chosen {
        let room = grow_room(config, anchor, rng, &mut main_rooms);
        room_floor.extend(room);
    }

    let dead_ends = find_dead_ends(&corridor_floor);
    let backfilled = backfill_dead_ends(&dead_ends, &mut room_floor, |end| {
        grow_room(config, end, rng, &mut main_rooms)
    });
    log::debug!(
        "promoted {promote} anchors, backfilled {backfilled} of {} dead ends",
        dead_ends.len()
    );

    if main_rooms.is_empty() {
        return Err(GenerationWarning::NoRooms);
    }

    let mut floor = corridor_floor;
    if config.corridor_width != CorridorWidth::One {
        for path in &corridors {
            floor.extend(corridor::widen(path, config.corridor_width));
        }
    }
    floor.extend(room_floor);

    Ok(Layout {
        floor,
        main_rooms,
        side_rooms: Vec::new(),
        corridor_count: corridors.len(),
    })
}

fn grow_room(
    config: &CorridorFirstConfig,
    anchor: Coord2,
    rng: &mut impl RngCore,
    main_rooms: &mut Vec<RoomFootprint>,
) -> FloorSet {
    let mut room = config.room_shape.build(anchor, rng);
    config.finish.apply(&mut room);
    main_rooms.push(RoomFootprint::Cells(room.clone()));
    room
}
