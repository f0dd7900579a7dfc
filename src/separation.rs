//! Room placement: turning freely scattered candidate rooms into a set of
//! non-overlapping ones.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::coord::Coord2;
use crate::rect::Rect;

/// Separates overlapping candidate rooms.
///
/// The returned rectangles must not overlap; how that is achieved (physics,
/// steering, rejection) is up to the implementation. Sizes should be kept, since
/// main rooms are picked by area. The layout engine awaits the future to
/// completion and never looks at intermediate positions.
pub trait RoomPlacementService {
    fn separate(&mut self, candidates: Vec<Rect>) -> impl Future<Output = Vec<Rect>>;
}

/// Iterative pairwise push-apart along the axis of least penetration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringSeparation {
    /// Minimum free cells kept between two rooms.
    pub padding: i32,
    pub max_iterations: u32,
}

impl Default for SteeringSeparation {
    fn default() -> Self {
        Self {
            padding: 1,
            max_iterations: 1000,
        }
    }
}

impl SteeringSeparation {
    pub fn new(padding: i32) -> Self {
        Self {
            padding,
            ..Self::default()
        }
    }

    /// Moves the rectangles in place until no padded pair overlaps. Returns
    /// the number of steering sweeps made.
    ///
    /// When the sweep cap is hit, rooms still in contact with an earlier room
    /// are moved to the nearest free spot instead, so the output never
    /// overlaps.
    pub fn resolve(&self, rooms: &mut [Rect]) -> u32 {
        for sweep in 0..self.max_iterations {
            let mut moved = false;
            for i in 0..rooms.len() {
                for j in (i + 1)..rooms.len() {
                    moved |= self.push_apart(rooms, i, j);
                }
            }
            if !moved {
                return sweep;
            }
        }
        let relocated = self.settle(rooms);
        log::warn!(
            "room separation hit its cap of {} sweeps, relocated {relocated} rooms",
            self.max_iterations
        );
        self.max_iterations
    }

    fn clashes(&self, room: &Rect, placed: &[Rect]) -> bool {
        let padded = room.expanded(self.padding);
        placed.iter().any(|other| padded.intersects(other))
    }

    /// Keeps rooms in order; each one touching an earlier room is moved to
    /// the first free offset on growing square rings around its position.
    fn settle(&self, rooms: &mut [Rect]) -> usize {
        let mut relocated = 0;
        for i in 1..rooms.len() {
            let (placed, rest) = rooms.split_at_mut(i);
            let room = &mut rest[0];
            if !self.clashes(room, placed) {
                continue;
            }
            let origin = room.min();
            let mut radius: i32 = 1;
            'rings: loop {
                for dx in -radius..=radius {
                    for dy in -radius..=radius {
                        if dx.abs() != radius && dy.abs() != radius {
                            continue;
                        }
                        let min = origin + Coord2::new(dx, dy);
                        let candidate = Rect::from_min_size(min, room.size());
                        if !self.clashes(&candidate, placed) {
                            *room = candidate;
                            break 'rings;
                        }
                    }
                }
                radius += 1;
            }
            relocated += 1;
        }
        relocated
    }

    fn push_apart(&self, rooms: &mut [Rect], i: usize, j: usize) -> bool {
        let a = rooms[i].expanded(self.padding);
        let b = rooms[j];
        if !a.intersects(&b) {
            return false;
        }
        let overlap_x = (a.x + a.width).min(b.x + b.width) - a.x.max(b.x);
        let overlap_y = (a.y + a.height).min(b.y + b.height) - a.y.max(b.y);

        // Doubled centers keep the comparison in integers.
        let (overlap, a_center, b_center, along_x) = if overlap_x <= overlap_y {
            (overlap_x, 2 * a.x + a.width, 2 * b.x + b.width, true)
        } else {
            (overlap_y, 2 * a.y + a.height, 2 * b.y + b.height, false)
        };
        let step = (overlap + 1) / 2;
        let sign = if a_center <= b_center { -1 } else { 1 };
        let (da, db) = (step * sign, -step * sign);

        if along_x {
            rooms[i].x += da;
            rooms[j].x += db;
        } else {
            rooms[i].y += da;
            rooms[j].y += db;
        }
        true
    }
}

impl RoomPlacementService for SteeringSeparation {
    fn separate(&mut self, mut candidates: Vec<Rect>) -> impl Future<Output = Vec<Rect>> {
        let sweeps = self.resolve(&mut candidates);
        log::debug!("separated {} rooms in {sweeps} sweeps", candidates.len());
        std::future::ready(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_separated(rooms: &[Rect], padding: i32) {
        for i in 0..rooms.len() {
            for j in (i + 1)..rooms.len() {
                assert!(
                    !rooms[i].expanded(padding).intersects(&rooms[j]),
                    "{:?} too close to {:?}",
                    rooms[i],
                    rooms[j]
                );
            }
        }
    }

    #[test]
    fn stacked_rooms_fan_out() {
        let mut rooms = vec![Rect::new(0, 0, 4, 4); 8];
        let sep = SteeringSeparation::new(1);
        let sweeps = sep.resolve(&mut rooms);
        assert!(sweeps < sep.max_iterations);
        assert_separated(&rooms, 1);
    }

    #[test]
    fn sizes_are_kept() {
        let mut rooms = vec![Rect::new(0, 0, 5, 3), Rect::new(1, 1, 2, 6), Rect::new(2, 0, 4, 4)];
        SteeringSeparation::new(0).resolve(&mut rooms);
        assert_eq!(
            rooms.iter().map(|r| (r.width, r.height)).collect::<Vec<_>>(),
            vec![(5, 3), (2, 6), (4, 4)]
        );
        assert_separated(&rooms, 0);
    }

    #[test]
    fn already_apart_rooms_do_not_move() {
        let original = vec![Rect::new(0, 0, 3, 3), Rect::new(10, 10, 3, 3)];
        let mut rooms = original.clone();
        assert_eq!(SteeringSeparation::default().resolve(&mut rooms), 0);
        assert_eq!(rooms, original);
    }

    #[test]
    fn crowded_rooms_are_disjoint_after_cap() {
        let crowded: Vec<Rect> = (0..60)
            .map(|i| Rect::new(i % 5, (i / 5) % 5, 3 + i % 4, 2 + i % 3))
            .collect();
        for padding in [0, 1] {
            let sep = SteeringSeparation {
                padding,
                max_iterations: 1,
            };
            let mut rooms = crowded.clone();
            assert_eq!(sep.resolve(&mut rooms), 1);
            assert_separated(&rooms, padding);
            let sizes = |v: &[Rect]| v.iter().map(|r| r.size()).collect::<Vec<_>>();
            assert_eq!(sizes(&rooms), sizes(&crowded));
        }
    }

    #[test]
    fn dense_service_output_is_disjoint() {
        let mut service = SteeringSeparation {
            padding: 1,
            max_iterations: 3,
        };
        let out = pollster::block_on(service.separate(vec![Rect::new(0, 0, 4, 4); 100]));
        assert_eq!(out.len(), 100);
        assert_separated(&out, 1);
    }

    #[test]
    fn service_future_resolves() {
        let mut service = SteeringSeparation::default();
        let out = pollster::block_on(service.separate(vec![Rect::new(0, 0, 4, 4); 3]));
        assert_eq!(out.len(), 3);
        assert_separated(&out, 1);
    }
}
