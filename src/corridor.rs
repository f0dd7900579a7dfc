use serde::{Deserialize, Serialize};

use crate::coord::Coord2;
use crate::error::LayoutError;
use crate::floor::FloorSet;
use crate::neighborhood::{Dir4, Dir8};

/// Corridor thickness in cells. Only 1 to 3 are supported.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CorridorWidth {
    #[default]
    One,
    Two,
    Three,
}

impl TryFrom<u8> for CorridorWidth {
    type Error = LayoutError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CorridorWidth::One),
            2 => Ok(CorridorWidth::Two),
            3 => Ok(CorridorWidth::Three),
            other => Err(LayoutError::InvalidCorridorWidth(other)),
        }
    }
}

impl From<CorridorWidth> for u8 {
    fn from(width: CorridorWidth) -> Self {
        match width {
            CorridorWidth::One => 1,
            CorridorWidth::Two => 2,
            CorridorWidth::Three => 3,
        }
    }
}

/// L-shaped path from `a` to `b`: the whole x leg first, then the y leg.
/// Both endpoints are included and consecutive cells are one cardinal step apart.
pub fn straight_path(a: Coord2, b: Coord2) -> Vec<Coord2> {
    let mut path = Vec::with_capacity(a.manhattan_distance(b) as usize + 1);
    let mut pos = a;
    path.push(pos);

    let x_step = Coord2::new((b.x - a.x).signum(), 0);
    while pos.x != b.x {
        pos = pos + x_step;
        path.push(pos);
    }
    let y_step = Coord2::new(0, (b.y - a.y).signum());
    while pos.y != b.y {
        pos = pos + y_step;
        path.push(pos);
    }
    path
}

/// Widens a one-cell path. The result always contains every path cell.
///
/// Width two adds the up and right neighbor of each cell plus the up-right
/// diagonal of the first cell, which keeps the starting corner solid. Width
/// three adds the full Moore ring around each cell.
pub fn widen(path: &[Coord2], width: CorridorWidth) -> FloorSet {
    let mut out: FloorSet = path.iter().copied().collect();
    match width {
        CorridorWidth::One => {}
        CorridorWidth::Two => {
            for &cell in path {
                out.insert(cell + Dir4::Up.offset());
                out.insert(cell + Dir4::Right.offset());
            }
            if let Some(&first) = path.first() {
                out.insert(first + Dir8::NE.offset());
            }
        }
        CorridorWidth::Three => {
            for &cell in path {
                for dir in Dir8::ALL {
                    out.insert(cell + dir.offset());
                }
            }
        }
    }
    out
}

/// Routes and widens a corridor between two points.
pub fn connect(a: Coord2, b: Coord2, width: CorridorWidth) -> FloorSet {
    widen(&straight_path(a, b), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(a: Coord2, b: Coord2) {
        let path = straight_path(a, b);
        assert_eq!(path[0], a);
        assert_eq!(*path.last().unwrap(), b);
        assert_eq!(path.len() as u32, a.manhattan_distance(b) + 1);
        for pair in path.windows(2) {
            assert_eq!(pair[0].manhattan_distance(pair[1]), 1);
        }
    }

    #[test]
    fn straight_path_endpoints_and_steps() {
        let points = [
            Coord2::new(0, 0),
            Coord2::new(5, 3),
            Coord2::new(-4, 7),
            Coord2::new(2, -6),
            Coord2::new(0, 9),
        ];
        for &a in &points {
            for &b in &points {
                assert_well_formed(a, b);
            }
        }
    }

    #[test]
    fn straight_path_x_leg_first() {
        let path = straight_path(Coord2::new(0, 0), Coord2::new(2, 2));
        assert_eq!(
            path,
            vec![
                Coord2::new(0, 0),
                Coord2::new(1, 0),
                Coord2::new(2, 0),
                Coord2::new(2, 1),
                Coord2::new(2, 2),
            ]
        );
    }

    #[test]
    fn straight_path_same_point() {
        assert_eq!(straight_path(Coord2::new(3, 3), Coord2::new(3, 3)), vec![Coord2::new(3, 3)]);
    }

    #[test]
    fn width_one_is_path_set() {
        let path = straight_path(Coord2::new(-3, 1), Coord2::new(4, -2));
        let expected: FloorSet = path.iter().copied().collect();
        assert_eq!(widen(&path, CorridorWidth::One), expected);
    }

    #[test]
    fn wider_corridors_are_supersets() {
        let path = straight_path(Coord2::new(-3, 1), Coord2::new(4, -2));
        for width in [CorridorWidth::Two, CorridorWidth::Three] {
            let wide = widen(&path, width);
            assert!(path.iter().all(|c| wide.contains(c)));
            assert!(wide.len() > path.len());
        }
    }

    #[test]
    fn width_two_on_horizontal_run() {
        let path = straight_path(Coord2::new(0, 0), Coord2::new(3, 0));
        let wide = widen(&path, CorridorWidth::Two);
        // Bottom row spans x 0..=4, top row x 0..=3.
        assert_eq!(wide.len(), 9);
        assert!(wide.contains(&Coord2::new(1, 1)));
        assert!(wide.contains(&Coord2::new(4, 0)));
        assert!(!wide.contains(&Coord2::new(0, -1)));
    }

    #[test]
    fn width_three_on_single_cell() {
        let wide = widen(&[Coord2::ZERO], CorridorWidth::Three);
        assert_eq!(wide.len(), 9);
    }

    #[test]
    fn widen_empty_path() {
        assert!(widen(&[], CorridorWidth::Two).is_empty());
    }

    #[test]
    fn width_parsing_rejects_out_of_range() {
        assert_eq!(CorridorWidth::try_from(2), Ok(CorridorWidth::Two));
        assert_eq!(
            CorridorWidth::try_from(4),
            Err(LayoutError::InvalidCorridorWidth(4))
        );
        assert!(CorridorWidth::try_from(0).is_err());
        assert_eq!(u8::from(CorridorWidth::Three), 3);
    }
}
