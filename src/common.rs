//! Common types for the board and the computer opponent: shot results, cell
//! views and error enums.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::coord::Coordinate;

/// Outcome of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotResult {
    /// The cell had already been fired upon; nothing changed.
    AlreadyShot,
    /// No vessel at the cell.
    Miss,
    /// Hit a vessel that is still afloat.
    Hit,
    /// Hit that sank a vessel, carrying its length.
    HitAndSunk(usize),
}

impl ShotResult {
    /// True for `Hit` and `HitAndSunk`.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::HitAndSunk(_))
    }
}

impl fmt::Display for ShotResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotResult::AlreadyShot => write!(f, "You already shot here."),
            ShotResult::Miss => write!(f, "Miss."),
            ShotResult::Hit => write!(f, "Hit!"),
            ShotResult::HitAndSunk(len) => write!(f, "Hit! Sunk a ship of length {}.", len),
        }
    }
}

/// Which layers of a board a view exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Vessel positions only.
    Ships,
    /// Shots only; sunk vessels are revealed, the rest stay hidden.
    Shots,
    /// Vessels and shots together (the owner's view).
    Combined,
}

/// What a single cell shows in a given [`ViewMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Empty,
    ShipOfLength(usize),
    Miss,
    HitUnsunk,
    HitAndRevealedLength(usize),
}

/// Malformed coordinate text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input was not exactly two characters.
    WrongLength { len: usize },
    /// Input did not hold one row digit and one column letter.
    InvalidCharacters,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::WrongLength { len } => {
                write!(f, "Expected 2 characters, got {}", len)
            }
            ParseError::InvalidCharacters => {
                write!(f, "Expected a row digit 0-9 and a column letter A-J")
            }
        }
    }
}

/// Errors returned by placement operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Vessel length outside 2..=5.
    InvalidLength { length: usize },
    /// Footprint leaves the grid.
    OutOfBounds,
    /// Footprint overlaps an existing vessel.
    Occupied,
    /// Ten vessels are already on the board.
    FleetFull,
    /// Random placement found no cell that fits this length.
    PlacementExhausted { length: usize },
    /// Random fleet placement requires an empty board.
    AlreadyPopulated,
    /// A match needs a complete fleet; only `placed` vessels are on the board.
    FleetIncomplete { placed: usize },
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
}

impl From<BitBoardError> for PlacementError {
    fn from(err: BitBoardError) -> Self {
        PlacementError::BitBoardError(err)
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::InvalidLength { length } => {
                write!(f, "Ship length {} is not between 2 and 5", length)
            }
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::Occupied => write!(f, "Ship placement overlaps with another ship"),
            PlacementError::FleetFull => write!(f, "All ten ships are already placed"),
            PlacementError::PlacementExhausted { length } => {
                write!(f, "No space left for a ship of length {}", length)
            }
            PlacementError::AlreadyPopulated => {
                write!(f, "Random placement requires an empty board")
            }
            PlacementError::FleetIncomplete { placed } => {
                write!(f, "Fleet is incomplete: {} of 10 ships placed", placed)
            }
            PlacementError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

/// Errors returned by the computer opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetingError {
    /// Every vessel is already sunk.
    AlreadyWon,
    /// Every cell has been fired upon.
    NoMovesLeft,
    /// A pending hit had no direction left to probe. This means the board
    /// and the pending queue disagree.
    ProbeExhausted { origin: Coordinate },
}

impl fmt::Display for TargetingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetingError::AlreadyWon => write!(f, "The computer player has already won"),
            TargetingError::NoMovesLeft => write!(f, "Every space has already been shot at"),
            TargetingError::ProbeExhausted { origin } => {
                write!(f, "No direction left to probe around pending hit {}", origin)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for TargetingError {}
