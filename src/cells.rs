use smallvec::SmallVec;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Position {
        Position { x, y }
    }

    /// Creates a new `Position` `stride` cells away in the given direction.
    /// Returns None if the result would have a negative coordinate.
    pub fn offset(self, dir: CompassPrimary, stride: usize) -> Option<Position> {
        let (x, y) = (self.x, self.y);
        match dir {
            CompassPrimary::West => x.checked_sub(stride).map(|x| Position { x, y }),
            CompassPrimary::East => Some(Position { x: x + stride, y }),
            CompassPrimary::North => y.checked_sub(stride).map(|y| Position { x, y }),
            CompassPrimary::South => Some(Position { x, y: y + stride }),
        }
    }

    /// Are the two positions next to each other horizontally or vertically?
    pub fn is_adjacent(self, other: Position) -> bool {
        let dx = (self.x as isize - other.x as isize).abs();
        let dy = (self.y as isize - other.y as isize).abs();
        dx + dy == 1
    }
}

pub type PositionSmallVec = SmallVec<[Position; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    /// Neighbour query order: left, right, top, bottom.
    pub const QUERY_ORDER: [CompassPrimary; 4] = [CompassPrimary::West,
                                                  CompassPrimary::East,
                                                  CompassPrimary::North,
                                                  CompassPrimary::South];

    /// Direction of travel when moving from `from` to `to`.
    ///
    /// Positions sharing a column are vertical moves, anything else is read as horizontal.
    pub fn of_move(from: Position, to: Position) -> CompassPrimary {
        if from.x == to.x {
            if from.y > to.y {
                CompassPrimary::North
            } else {
                CompassPrimary::South
            }
        } else if from.x > to.x {
            CompassPrimary::West
        } else {
            CompassPrimary::East
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellKind {
    Space,
    Wall,
}

/// Snapshot of one grid cell. Identity is its position in the grid.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Cell {
    pub kind: CellKind,
    pub visited: bool,
}

impl Cell {
    #[inline]
    pub fn is_wall(&self) -> bool {
        self.kind == CellKind::Wall
    }
}
