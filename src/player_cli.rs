#![cfg(feature = "std")]

//! Interactive console match against the computer.

use std::io::{BufRead, Write};
use std::string::String;

use log::debug;
use rand::Rng;

use crate::{
    board::Board,
    common::{ShotResult, ViewMode},
    config::FLEET,
    coord::Coordinate,
    game::{GameEngine, GameStatus},
    ship::Orientation,
    ui::{render_board, render_side_by_side},
};

/// Console session over any line-based input and output.
///
/// `Q` at any prompt, or end of input, quits the session.
pub struct CliSession<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> CliSession<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Print `text` and read one trimmed line. `None` means quit.
    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed");
            return Ok(None);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        Ok(Some(line.to_string()))
    }

    /// Ask whether to place the fleet by hand or at random.
    pub fn choose_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> anyhow::Result<Option<Board>> {
        writeln!(self.output, "Press 1 and enter to place the ships on your map manually.")?;
        writeln!(self.output, "Press 2 and enter to have the ships placed on your map randomly.")?;
        writeln!(self.output, "Press Q and enter at any time to quit.")?;
        loop {
            match self.prompt("Enter your choice here: ")?.as_deref() {
                None => return Ok(None),
                Some("1") => return self.place_manually(),
                Some("2") => return random_board(rng).map(Some),
                Some(_) => continue,
            }
        }
    }

    fn place_manually(&mut self) -> anyhow::Result<Option<Board>> {
        let mut board = Board::new();
        for &length in FLEET.iter() {
            writeln!(self.output, "Place a ship of size {}.", length)?;
            writeln!(self.output, "Press H and enter to place the ship horizontally.")?;
            writeln!(self.output, "Press V and enter to place the ship vertically.")?;
            let orientation = loop {
                match self.prompt("Enter your choice here: ")? {
                    None => return Ok(None),
                    Some(s) if s.eq_ignore_ascii_case("h") => break Orientation::Horizontal,
                    Some(s) if s.eq_ignore_ascii_case("v") => break Orientation::Vertical,
                    Some(_) => continue,
                }
            };
            writeln!(
                self.output,
                "Enter the location of the top/left side of the ship with a letter and a number."
            )?;
            loop {
                let Some(text) = self.prompt("Enter your location here: ")? else {
                    return Ok(None);
                };
                let anchor = match Coordinate::parse(&text) {
                    Ok(anchor) => anchor,
                    Err(_) => {
                        writeln!(self.output, "That is not a valid location.")?;
                        continue;
                    }
                };
                match board.place(length, orientation, anchor) {
                    Ok(_) => {
                        writeln!(self.output, "Ship placed. Here is the resulting map.")?;
                        writeln!(self.output, "{}", render_board(&board, ViewMode::Ships))?;
                        break;
                    }
                    Err(e) => writeln!(self.output, "Could not place ship there: {}", e)?,
                }
            }
        }
        Ok(Some(board))
    }

    fn print_maps(&mut self, engine: &GameEngine) -> anyhow::Result<()> {
        let computer = render_board(engine.computer_board(), ViewMode::Shots);
        let player = render_board(engine.player_board(), ViewMode::Combined);
        write!(
            self.output,
            "{}",
            render_side_by_side("  CP Ships", &computer, "Your Ships", &player)
        )?;
        Ok(())
    }

    /// Run a whole match. Returns `None` if the player quit.
    pub fn play<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        random_placement: bool,
    ) -> anyhow::Result<Option<GameStatus>> {
        writeln!(self.output, "Welcome to Battleship!")?;
        let board = if random_placement {
            random_board(rng)?
        } else {
            match self.choose_fleet(rng)? {
                Some(board) => board,
                None => return Ok(None),
            }
        };
        let mut engine = GameEngine::new(rng, board)?;

        writeln!(
            self.output,
            "The computer player's map is on the left, your map is on the right."
        )?;
        self.print_maps(&engine)?;
        writeln!(self.output, ". is a miss.")?;
        writeln!(self.output, "* is a hit.")?;

        while engine.status() == GameStatus::InProgress {
            loop {
                let Some(text) = self.prompt("Enter your shot here: ")? else {
                    return Ok(None);
                };
                let at = match Coordinate::parse(&text) {
                    Ok(at) => at,
                    Err(_) => {
                        writeln!(self.output, "That is not a valid location.")?;
                        continue;
                    }
                };
                let result = engine.player_fire(at);
                writeln!(self.output, "{}", result)?;
                if result != ShotResult::AlreadyShot {
                    break;
                }
            }
            if engine.status() == GameStatus::Won {
                writeln!(self.output, "You win!")?;
                break;
            }

            let outcome = engine.computer_turn()?;
            writeln!(self.output, "Computer Player's next shot: {}", outcome.coordinate)?;
            writeln!(self.output, "{}", outcome.result)?;
            self.print_maps(&engine)?;
        }

        if engine.status() == GameStatus::Lost {
            writeln!(self.output, "The Computer Player wins.")?;
            writeln!(self.output, "Here were the computer player's ships.")?;
            writeln!(
                self.output,
                "{}",
                render_board(engine.computer_board(), ViewMode::Ships)
            )?;
        }
        Ok(Some(engine.status()))
    }
}

fn random_board<R: Rng + ?Sized>(rng: &mut R) -> anyhow::Result<Board> {
    let mut board = Board::new();
    board.place_fleet_randomly(rng)?;
    Ok(board)
}
