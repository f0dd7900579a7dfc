//! Procedural 2D dungeon layouts on an integer grid.
//!
//! Three pipelines build a [`Layout`]: corridor-first (straight random
//! corridors with rooms grown at their joints and dead ends), room-first (BSP
//! rooms chained nearest-first) and graph-based (scattered rooms separated by a
//! [`RoomPlacementService`] and joined along a minimum spanning tree). A
//! [`Generator`] runs the configured pipeline and paints the result on a
//! [`TileSurface`].

pub mod bsp;
pub mod config;
pub mod coord;
pub mod corridor;
pub mod corridor_first;
pub mod drunkard;
pub mod error;
pub mod flood;
pub mod floor;
pub mod generator;
pub mod graph_layout;
pub mod grid;
pub mod layout;
pub mod mst;
pub mod neighborhood;
pub mod postprocess;
pub mod rect;
pub mod room;
pub mod room_first;
pub mod separation;
pub mod surface;

pub use bsp::{partition, partition_to_count, SplitAxis};
pub use config::{GenerationConfig, Strategy};
pub use coord::Coord2;
pub use corridor::{connect, straight_path, widen, CorridorWidth};
pub use corridor_first::{corridor_first_generate, CorridorFirstConfig};
pub use drunkard::{multi_walk, walk, walk_corridor, WalkConfig};
pub use error::{GenerationWarning, LayoutError};
pub use flood::{flood_fill, is_connected};
pub use floor::FloorSet;
pub use generator::{Generator, Outcome};
pub use graph_layout::{graph_generate, GraphConfig};
pub use grid::Grid;
pub use layout::{Layout, RoomFootprint};
pub use mst::{build_minimum_spanning_tree, Edge, Graph};
pub use neighborhood::{Dir4, Dir8, Neighborhood};
pub use postprocess::{backfill_dead_ends, dilate, fill_holes, find_dead_ends};
pub use rect::Rect;
pub use room::{box_room, RoomFinish, RoomShape};
pub use room_first::{room_first_generate, RoomFill, RoomFirstConfig, SplitPolicy};
pub use separation::{RoomPlacementService, SteeringSeparation};
pub use surface::{Tile, TileCanvas, TileSurface};
