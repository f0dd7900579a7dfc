//! Graph-based layouts: scatter random rooms, let a placement service pull
//! them apart, keep the big ones as main rooms and join those along a minimum
//! spanning tree. Smaller rooms touching the result are kept as side rooms.

use std::f32::consts::TAU;

use rand::Rng;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::coord::Coord2;
use crate::corridor::{self, CorridorWidth};
use crate::error::GenerationWarning;
use crate::floor::FloorSet;
use crate::layout::{Layout, RoomFootprint};
use crate::mst::{build_minimum_spanning_tree, Graph};
use crate::rect::Rect;
use crate::room::jitter;
use crate::separation::RoomPlacementService;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Width of the scatter box, or the x semi-axis of the scatter ellipse.
    pub area_width: f32,
    /// Height of the scatter box, or the y semi-axis of the scatter ellipse.
    pub area_height: f32,
    pub min_room_size: Coord2,
    pub room_size_delta: Coord2,
    /// Free cells requested around every room during placement.
    pub space_between_rooms: i32,
    pub start_rooms_count: u32,
    pub corridor_width: CorridorWidth,
    /// A room is main when its area reaches the average room area times this.
    pub main_room_multiplier: f32,
    pub only_main_rooms: bool,
    pub generate_in_circle: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            area_width: 30.0,
            area_height: 30.0,
            min_room_size: Coord2::new(4, 4),
            room_size_delta: Coord2::new(8, 8),
            space_between_rooms: 1,
            start_rooms_count: 40,
            corridor_width: CorridorWidth::One,
            main_room_multiplier: 1.25,
            only_main_rooms: false,
            generate_in_circle: false,
        }
    }
}

impl GraphConfig {
    /// Area of a room of average size, half deltas truncated.
    pub fn average_room_area(&self) -> i64 {
        let w = self.min_room_size.x + self.room_size_delta.x / 2;
        let h = self.min_room_size.y + self.room_size_delta.y / 2;
        w as i64 * h as i64
    }

    pub fn is_main_room(&self, room: &Rect) -> bool {
        room.area() as f64 >= self.average_room_area() as f64 * self.main_room_multiplier as f64
    }
}

pub async fn graph_generate(
    config: &GraphConfig,
    placement: &mut impl RoomPlacementService,
    rng: &mut impl RngCore,
) -> Result<Layout, GenerationWarning> {
    let candidates = candidate_rooms(config, rng);
    if candidates.is_empty() {
        return Err(GenerationWarning::NoRooms);
    }
    classify(config, &candidates)?;

    let space = config.space_between_rooms;
    let padded = candidates.iter().map(|r| r.expanded(space)).collect();
    let placed: Vec<Rect> = placement
        .separate(padded)
        .await
        .into_iter()
        .map(|r| r.expanded(-space))
        .collect();

    let is_main = classify(config, &placed)?;
    let (mut main_rooms, mut side_candidates) = (Vec::new(), Vec::new());
    for (room, main) in placed.into_iter().zip(is_main) {
        if main {
            main_rooms.push(room);
        } else {
            side_candidates.push(room);
        }
    }

    let mut floor = FloorSet::default();
    for room in &main_rooms {
        floor.extend(room.to_floor());
    }

    let centers: Vec<Coord2> = main_rooms.iter().map(Rect::center).collect();
    let tree = room_tree(&main_rooms);
    let mut corridor_count = 0;
    for (from, to, _) in tree.edges() {
        floor.extend(corridor::connect(centers[from], centers[to], config.corridor_width));
        corridor_count += 1;
    }

    let mut side_rooms = Vec::new();
    if !config.only_main_rooms {
        for room in side_candidates {
            let cells = room.to_floor();
            if cells.iter().any(|c| floor.contains(c)) {
                floor.extend(cells);
                side_rooms.push(room);
            }
        }
    }
    log::debug!(
        "graph layout: {} main rooms, {} side rooms, {corridor_count} corridors",
        main_rooms.len(),
        side_rooms.len()
    );

    Ok(Layout {
        floor,
        main_rooms: main_rooms.into_iter().map(RoomFootprint::Rect).collect(),
        side_rooms,
        corridor_count,
    })
}

/// Spanning tree over `rooms`, weighted on doubled exact centers so odd sizes
/// do not skew the distances. Vertex `i` is room `i`.
fn room_tree(rooms: &[Rect]) -> Graph {
    let doubled: Vec<Coord2> = rooms.iter().map(|r| r.min() * 2 + r.size()).collect();
    build_minimum_spanning_tree(&doubled)
}

/// Randomly placed, possibly overlapping rooms with sizes in
/// `[min_room_size, min_room_size + room_size_delta)`.
pub fn candidate_rooms(config: &GraphConfig, rng: &mut impl RngCore) -> Vec<Rect> {
    (0..config.start_rooms_count)
        .map(|_| {
            let (cx, cy) = if config.generate_in_circle {
                point_in_ellipse(config.area_width, config.area_height, rng)
            } else {
                point_in_box(config.area_width, config.area_height, rng)
            };
            let w = config.min_room_size.x + jitter(rng, config.room_size_delta.x);
            let h = config.min_room_size.y + jitter(rng, config.room_size_delta.y);
            let x = (cx - w as f32 / 2.0).floor() as i32;
            let y = (cy - h as f32 / 2.0).floor() as i32;
            Rect::new(x, y, w, h)
        })
        .collect()
}

/// Main-room flags for `rooms`. Falls back to all rooms with
/// `only_main_rooms`; fails when no room qualifies.
fn classify(config: &GraphConfig, rooms: &[Rect]) -> Result<Vec<bool>, GenerationWarning> {
    let mut flags: Vec<bool> = rooms.iter().map(|r| config.is_main_room(r)).collect();
    if !flags.contains(&true) && config.only_main_rooms {
        flags.fill(true);
    }
    if !flags.contains(&true) {
        return Err(GenerationWarning::NoMainRooms);
    }
    Ok(flags)
}

fn point_in_box(width: f32, height: f32, rng: &mut impl RngCore) -> (f32, f32) {
    let x = if width > 0.0 { rng.gen_range(0.0..width) } else { 0.0 };
    let y = if height > 0.0 { rng.gen_range(0.0..height) } else { 0.0 };
    (x, y)
}

/// Uniform over the ellipse centered on the origin with semi-axes `a` and `b`.
fn point_in_ellipse(a: f32, b: f32, rng: &mut impl RngCore) -> (f32, f32) {
    let angle = rng.gen_range(0.0..TAU);
    let distance = rng.gen::<f32>().sqrt();
    (a * distance * angle.cos(), b * distance * angle.sin())
}
