//! Set algebra over walkable grid cells.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::BuildHasherDefault;

use crate::coord::Coord2;
use crate::neighborhood::Neighborhood;

/// Set of walkable cells.
///
/// Hashed with fixed keys so iteration order only depends on the insertion
/// history, which keeps seeded picks from a set reproducible between runs.
pub type FloorSet = HashSet<Coord2, BuildHasherDefault<DefaultHasher>>;

#[inline]
pub fn contains(set: &FloorSet, coord: Coord2) -> bool {
    set.contains(&coord)
}

/// Plain set union into `into`.
pub fn union(into: &mut FloorSet, other: &FloorSet) {
    into.extend(other.iter().copied());
}

pub fn union_all<'a>(sets: impl IntoIterator<Item = &'a FloorSet>) -> FloorSet {
    let mut out = FloorSet::default();
    for set in sets {
        union(&mut out, set);
    }
    out
}

#[inline]
pub fn neighbors(coord: Coord2, neighborhood: Neighborhood) -> impl Iterator<Item = Coord2> {
    neighborhood.offsets().iter().map(move |&offset| coord + offset)
}

/// Number of the 4 cardinal neighbors of `coord` that are in `set`.
pub fn cardinal_floor_neighbors(set: &FloorSet, coord: Coord2) -> usize {
    neighbors(coord, Neighborhood::VonNeumann)
        .filter(|n| set.contains(n))
        .count()
}

/// Cells cardinally adjacent to the set but not part of it.
pub fn boundary(set: &FloorSet) -> FloorSet {
    let mut out = FloorSet::default();
    for &cell in set {
        for next in neighbors(cell, Neighborhood::VonNeumann) {
            if !set.contains(&next) {
                out.insert(next);
            }
        }
    }
    out
}

/// Inclusive min/max corners of the set, `None` when empty.
pub fn bounds(set: &FloorSet) -> Option<(Coord2, Coord2)> {
    let mut iter = set.iter();
    let first = *iter.next()?;
    let (mut min, mut max) = (first, first);
    for c in iter {
        min = Coord2::new(min.x.min(c.x), min.y.min(c.y));
        max = Coord2::new(max.x.max(c.x), max.y.max(c.y));
    }
    Some((min, max))
}
