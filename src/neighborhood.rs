use crate::coord::Coord2;

/// 4-directional movement (Von Neumann neighborhood).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dir4 {
    Up,
    Right,
    Down,
    Left,
}

impl Dir4 {
    /// Fixed order used for uniform random direction picks.
    pub const ALL: [Dir4; 4] = [Dir4::Up, Dir4::Right, Dir4::Down, Dir4::Left];

    #[inline]
    pub const fn offset(self) -> Coord2 {
        match self {
            Dir4::Up => Coord2::new(0, 1),
            Dir4::Right => Coord2::new(1, 0),
            Dir4::Down => Coord2::new(0, -1),
            Dir4::Left => Coord2::new(-1, 0),
        }
    }
}

/// 8-directional movement (Moore neighborhood), clockwise from up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dir8 {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Dir8 {
    pub const ALL: [Dir8; 8] = [
        Dir8::N,
        Dir8::NE,
        Dir8::E,
        Dir8::SE,
        Dir8::S,
        Dir8::SW,
        Dir8::W,
        Dir8::NW,
    ];

    #[inline]
    pub const fn offset(self) -> Coord2 {
        match self {
            Dir8::N => Coord2::new(0, 1),
            Dir8::NE => Coord2::new(1, 1),
            Dir8::E => Coord2::new(1, 0),
            Dir8::SE => Coord2::new(1, -1),
            Dir8::S => Coord2::new(0, -1),
            Dir8::SW => Coord2::new(-1, -1),
            Dir8::W => Coord2::new(-1, 0),
            Dir8::NW => Coord2::new(-1, 1),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Neighborhood {
    VonNeumann,
    Moore,
}

impl Neighborhood {
    const VON_NEUMANN: [Coord2; 4] = [
        Dir4::Up.offset(),
        Dir4::Right.offset(),
        Dir4::Down.offset(),
        Dir4::Left.offset(),
    ];

    const MOORE: [Coord2; 8] = [
        Dir8::N.offset(),
        Dir8::NE.offset(),
        Dir8::E.offset(),
        Dir8::SE.offset(),
        Dir8::S.offset(),
        Dir8::SW.offset(),
        Dir8::W.offset(),
        Dir8::NW.offset(),
    ];

    #[inline]
    pub fn offsets(self) -> &'static [Coord2] {
        match self {
            Neighborhood::VonNeumann => &Self::VON_NEUMANN,
            Neighborhood::Moore => &Self::MOORE,
        }
    }
}
