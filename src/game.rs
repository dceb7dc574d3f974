use log::info;
use rand::Rng;

use crate::{
    ai::{ShotOutcome, TargetingStrategy},
    board::Board,
    common::{PlacementError, ShotResult, TargetingError},
    coord::Coordinate,
};

/// Current status of a match, from the human player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The human sank the computer's fleet.
    Won,
    /// The computer sank the human's fleet.
    Lost,
}

/// A human versus computer match: both boards and the computer's targeting.
pub struct GameEngine {
    player_board: Board,
    computer_board: Board,
    computer: TargetingStrategy,
    player_shots: usize,
    computer_shots: usize,
}

impl GameEngine {
    /// Start a match against `player_board`, which must hold a complete
    /// fleet. The computer's fleet and scan order are drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, player_board: Board) -> Result<Self, PlacementError> {
        if !player_board.fleet_complete() {
            return Err(PlacementError::FleetIncomplete {
                placed: player_board.vessel_count(),
            });
        }
        let mut computer_board = Board::new();
        computer_board.place_fleet_randomly(rng)?;
        let computer = TargetingStrategy::new(rng);
        Ok(Self::from_parts(player_board, computer_board, computer))
    }

    /// Assemble a match from prepared boards and strategy.
    pub fn from_parts(
        player_board: Board,
        computer_board: Board,
        computer: TargetingStrategy,
    ) -> Self {
        Self {
            player_board,
            computer_board,
            computer,
            player_shots: 0,
            computer_shots: 0,
        }
    }

    /// The human's own board, targeted by the computer.
    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// The computer's board, targeted by the human.
    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    pub fn computer(&self) -> &TargetingStrategy {
        &self.computer
    }

    /// Shots that counted as a turn for each side: (human, computer).
    pub fn shot_counts(&self) -> (usize, usize) {
        (self.player_shots, self.computer_shots)
    }

    /// Human fires at the computer's board. `AlreadyShot` does not use up
    /// the turn.
    pub fn player_fire(&mut self, at: Coordinate) -> ShotResult {
        let result = self.computer_board.fire(at);
        if result != ShotResult::AlreadyShot {
            self.player_shots += 1;
        }
        if self.computer_board.all_sunk() {
            info!("player sank every ship after {} shots", self.player_shots);
        }
        result
    }

    /// Computer fires at the human's board.
    pub fn computer_turn(&mut self) -> Result<ShotOutcome, TargetingError> {
        let outcome = self.computer.take_shot(&mut self.player_board)?;
        self.computer_shots += 1;
        Ok(outcome)
    }

    pub fn status(&self) -> GameStatus {
        if self.computer_board.all_sunk() {
            GameStatus::Won
        } else if self.player_board.all_sunk() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }
}
