//! Shared domain types: coordinates, directions, attack outcomes, board errors.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{BOARD_MAX, BOARD_MIN};
use crate::ship::ShipKind;

/// A 1-based board coordinate. Signed so a provisional ship placement can
/// step past the north or west edge and remain representable until the
/// bounds check rolls it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: i8,
    pub col: i8,
}

impl Coordinate {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Both axes within `[BOARD_MIN, BOARD_MAX]`.
    pub fn in_bounds(self) -> bool {
        (BOARD_MIN..=BOARD_MAX).contains(&self.row)
            && (BOARD_MIN..=BOARD_MAX).contains(&self.col)
    }

    /// The neighbouring coordinate one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            write!(f, "{}{}", (b'A' + (self.col - 1) as u8) as char, self.row)
        } else {
            write!(f, "({},{})", self.row, self.col)
        }
    }
}

/// Axis-aligned placement direction. North decreases the row, west the
/// column. No diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// (row, col) delta of one step.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}

/// Outcome of a single attack against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackResult {
    /// No ship occupies the coordinate.
    Miss,
    /// A ship was damaged but stays afloat.
    Hit,
    /// The hit sank the carried ship.
    HitAndSunk(ShipKind),
}

/// Errors returned by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Provisional placement has a cell outside the board.
    OutOfBounds,
    /// Provisional placement overlaps another ship.
    Overlap,
    /// Coordinate was already attacked on this board.
    AlreadyAttacked,
    /// Random placement gave up after too many collisions.
    UnableToPlaceShip,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "ship placement is out of bounds"),
            BoardError::Overlap => write!(f, "ship placement overlaps another ship"),
            BoardError::AlreadyAttacked => write!(f, "coordinate was already attacked"),
            BoardError::UnableToPlaceShip => write!(f, "unable to find a valid placement"),
        }
    }
}

impl std::error::Error for BoardError {}
