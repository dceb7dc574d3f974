//! Commonly used types for ease of import.

pub use crate::{
    Board, CellView, Coordinate, GameEngine, GameStatus, Orientation, PlacementError, ShotOutcome,
    ShotResult, TargetingError, TargetingStrategy, ViewMode,
};

#[cfg(feature = "std")]
pub use crate::CliSession;
