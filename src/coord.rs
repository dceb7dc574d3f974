//! Grid coordinates and their textual form (`6A`, `a6`, ...).

use core::fmt;
use core::str::FromStr;

use crate::common::ParseError;
use crate::config::{BOARD_SIZE, COLUMN_LABELS};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// An in-bounds cell on the 10×10 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coordinate {
    row: usize,
    col: usize,
}

/// Axis-aligned step directions, in the order the hunt probes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const PROBE_ORDER: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
}

impl Coordinate {
    /// Returns `None` when either index is off the grid.
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Checkerboard colour of the cell: `(row + col) % 2`.
    pub fn parity(&self) -> usize {
        (self.row + self.col) % 2
    }

    /// Neighbouring cell one step in `direction`, if it is on the grid.
    pub fn step(&self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Up => self.row.checked_sub(1).and_then(|r| Self::new(r, self.col)),
            Direction::Down => Self::new(self.row + 1, self.col),
            Direction::Left => self.col.checked_sub(1).and_then(|c| Self::new(self.row, c)),
            Direction::Right => Self::new(self.row, self.col + 1),
        }
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Coordinate { row, col }))
    }

    /// Parse a two-character cell name: one row digit and one column letter,
    /// in either order, letters case-insensitive.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut chars = text.chars();
        let (first, second) = match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => (a, b),
            _ => {
                return Err(ParseError::WrongLength {
                    len: text.chars().count(),
                })
            }
        };
        if let (Some(row), Some(col)) = (row_of(first), col_of(second)) {
            return Ok(Coordinate { row, col });
        }
        match (col_of(first), row_of(second)) {
            (Some(col), Some(row)) => Ok(Coordinate { row, col }),
            _ => Err(ParseError::InvalidCharacters),
        }
    }
}

fn row_of(ch: char) -> Option<usize> {
    ch.to_digit(10)
        .map(|d| d as usize)
        .filter(|&d| d < GRID_SIZE)
}

fn col_of(ch: char) -> Option<usize> {
    let upper = ch.to_ascii_uppercase();
    COLUMN_LABELS.iter().position(|&label| label == upper)
}

impl FromStr for Coordinate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::parse(s)
    }
}

/// Canonical `<digit><LETTER>` form.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, COLUMN_LABELS[self.col])
    }
}
