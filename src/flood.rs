use crate::coord::Coord2;
use crate::floor::{self, FloorSet};
use crate::neighborhood::Neighborhood;

/// Cells of `floor` cardinally reachable from `start`. Empty when `start` is
/// not floor.
pub fn flood_fill(floor: &FloorSet, start: Coord2) -> FloorSet {
    let mut visited = FloorSet::default();
    if !floor.contains(&start) {
        return visited;
    }

    let mut stack = vec![start];
    visited.insert(start);

    while let Some(current) = stack.pop() {
        for next in floor::neighbors(current, Neighborhood::VonNeumann) {
            if !floor.contains(&next) || visited.contains(&next) {
                continue;
            }
            visited.insert(next);
            stack.push(next);
        }
    }

    visited
}

/// Whether every floor cell is reachable from every other one.
pub fn is_connected(floor: &FloorSet) -> bool {
    let Some(&start) = floor.iter().next() else {
        return true;
    };
    flood_fill(floor, start).len() == floor.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::box_room;

    #[test]
    fn flood_fill_room() {
        let room = box_room(Coord2::ZERO, Coord2::new(5, 5));
        assert_eq!(flood_fill(&room, Coord2::ZERO).len(), 25);
    }

    #[test]
    fn flood_fill_outside_floor_is_empty() {
        let room = box_room(Coord2::ZERO, Coord2::new(2, 2));
        assert!(flood_fill(&room, Coord2::new(9, 9)).is_empty());
    }

    #[test]
    fn diagonal_contact_does_not_connect() {
        let floor: FloorSet = [Coord2::new(0, 0), Coord2::new(1, 1)].into_iter().collect();
        assert!(!is_connected(&floor));
    }

    #[test]
    fn is_connected_test() {
        let mut floor = box_room(Coord2::ZERO, Coord2::new(3, 3));
        assert!(is_connected(&floor));
        floor.extend(box_room(Coord2::new(10, 0), Coord2::new(3, 3)));
        assert!(!is_connected(&floor));
        assert!(is_connected(&FloorSet::default()));
    }
}
