// Shot selection for the computer opponent: a checkerboard scan to find
// vessels, then a directional hunt around each hit until it sinks.
//
// The strategy only uses the board's public shot queries; it never looks at
// where vessels are.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use log::{error, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::common::{CellView, ShotResult, TargetingError, ViewMode};
use crate::coord::{Coordinate, Direction};

/// A shot taken by the strategy and what it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotOutcome {
    pub coordinate: Coordinate,
    pub result: ShotResult,
}

/// What the strategy is doing next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Walking the checkerboard scan lists.
    Scanning,
    /// Probing around a pending hit.
    Hunting,
    /// Every vessel on the target board is sunk.
    Won,
}

/// Parity-scan plus hunt targeting.
///
/// Every vessel is at least two cells long, and any run of two or more cells
/// contains a cell of each checkerboard colour. Scanning all of one colour
/// (the primary list) therefore hits every vessel at least once; the other
/// colour is only consulted if the primary list runs dry.
#[derive(Debug, Clone)]
pub struct TargetingStrategy {
    primary: Vec<Coordinate>,
    secondary: Vec<Coordinate>,
    primary_cursor: usize,
    secondary_cursor: usize,
    pending: VecDeque<Coordinate>,
    won: bool,
}

impl TargetingStrategy {
    /// Shuffle both parity classes with `rng`. Even parity is scanned first.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let (mut primary, mut secondary) = parity_classes();
        primary.shuffle(rng);
        secondary.shuffle(rng);
        Self::from_scan_order(primary, secondary)
    }

    /// Both parity classes in row-major order.
    pub fn unshuffled() -> Self {
        let (primary, secondary) = parity_classes();
        Self::from_scan_order(primary, secondary)
    }

    /// Use explicit scan lists. `primary` is exhausted before `secondary`.
    pub fn from_scan_order(primary: Vec<Coordinate>, secondary: Vec<Coordinate>) -> Self {
        Self {
            primary,
            secondary,
            primary_cursor: 0,
            secondary_cursor: 0,
            pending: VecDeque::new(),
            won: false,
        }
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn phase(&self) -> Phase {
        if self.won {
            Phase::Won
        } else if self.pending.is_empty() {
            Phase::Scanning
        } else {
            Phase::Hunting
        }
    }

    /// Hits on vessels not yet known to be sunk, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &Coordinate> {
        self.pending.iter()
    }

    /// Fire the next shot at `board`.
    pub fn take_shot(&mut self, board: &mut Board) -> Result<ShotOutcome, TargetingError> {
        if self.won {
            return Err(TargetingError::AlreadyWon);
        }
        let target = match self.pending.front() {
            Some(&origin) => self.hunt_target(board, origin)?,
            None => self.scan_target(board)?,
        };
        Ok(self.fire_at(board, target))
    }

    /// Walk outward from `origin` in probe order. Pending hits are walked
    /// through; any other fired cell or the edge ends that direction.
    fn hunt_target(
        &self,
        board: &Board,
        origin: Coordinate,
    ) -> Result<Coordinate, TargetingError> {
        for direction in Direction::PROBE_ORDER {
            let mut cursor = origin;
            while let Some(next) = cursor.step(direction) {
                if !board.already_fired(next) {
                    return Ok(next);
                }
                if !self.pending.contains(&next) {
                    break;
                }
                cursor = next;
            }
        }
        error!(
            "no direction left to probe around pending hit {} (pending: {:?})",
            origin, self.pending
        );
        Err(TargetingError::ProbeExhausted { origin })
    }

    fn scan_target(&mut self, board: &Board) -> Result<Coordinate, TargetingError> {
        while let Some(&cell) = self.primary.get(self.primary_cursor) {
            self.primary_cursor += 1;
            if !board.already_fired(cell) {
                return Ok(cell);
            }
        }
        while let Some(&cell) = self.secondary.get(self.secondary_cursor) {
            self.secondary_cursor += 1;
            if !board.already_fired(cell) {
                return Ok(cell);
            }
        }
        Err(TargetingError::NoMovesLeft)
    }

    fn fire_at(&mut self, board: &mut Board, target: Coordinate) -> ShotOutcome {
        let was_hunting = !self.pending.is_empty();
        let result = board.fire(target);
        if result.is_hit() {
            self.pending.push_back(target);
        }
        if let ShotResult::HitAndSunk(length) = result {
            self.pending.retain(|&cell| {
                !matches!(
                    board.cell_view(cell, ViewMode::Shots),
                    CellView::HitAndRevealedLength(_)
                )
            });
            info!("computer sank a ship of length {} at {}", length, target);
        }
        if !was_hunting && !self.pending.is_empty() {
            info!("computer hit at {}, hunting", target);
        } else if was_hunting && self.pending.is_empty() {
            info!("no pending hits, back to scanning");
        }
        if board.all_sunk() {
            info!("computer sank every ship");
            self.won = true;
        }
        ShotOutcome {
            coordinate: target,
            result,
        }
    }
}

fn parity_classes() -> (Vec<Coordinate>, Vec<Coordinate>) {
    Coordinate::all().partition(|c| c.parity() == 0)
}
