//! Grid coordinates and the four cardinal directions between them

use num_traits::{CheckedAdd, CheckedSub, One};
use std::fmt;

/// Position of a unit cell on the unsigned 32-bit grid
///
/// Ordered by `x` first and `y` second, which is the order tiles are stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    /// Column index
    pub x: u32,
    /// Row index
    pub y: u32,
}

impl Coordinate {
    /// Create a coordinate from its components
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell in the given direction, if it is representable
    ///
    /// Returns `None` instead of wrapping at either end of the `u32` range.
    pub fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::North => checked_increment(self.y).map(|y| Self { y, ..self }),
            Direction::East => checked_increment(self.x).map(|x| Self { x, ..self }),
            Direction::South => checked_decrement(self.y).map(|y| Self { y, ..self }),
            Direction::West => checked_decrement(self.x).map(|x| Self { x, ..self }),
        }
    }

    /// Manhattan distance to another coordinate
    pub const fn manhattan_distance(self, other: Self) -> u64 {
        self.x.abs_diff(other.x) as u64 + self.y.abs_diff(other.y) as u64
    }

    /// Whether the two cells share an edge
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

impl From<(u32, u32)> for Coordinate {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

fn checked_increment<T: CheckedAdd + One>(value: T) -> Option<T> {
    value.checked_add(&T::one())
}

fn checked_decrement<T: CheckedSub + One>(value: T) -> Option<T> {
    value.checked_sub(&T::one())
}

/// Cardinal direction between edge-adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards larger `y`
    North,
    /// Towards larger `x`
    East,
    /// Towards smaller `y`
    South,
    /// Towards smaller `x`
    West,
}

impl Direction {
    /// Exploration order used by the augmenting-path search
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// The direction pointing back
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}
