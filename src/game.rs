//! Match driver: wires the placement and guess line sources to an outcome
//! sink, with immediate stop once the whole fleet is sunk.

use alloc::string::ToString;
use log::debug;

use crate::board::Board;
use crate::common::{GameError, GuessOutcome};

/// One side of a match: the validated board plus the terminal flag.
pub struct Game {
    board: Board,
    over: bool,
}

impl Game {
    /// Validate the fleet and build the board.
    pub fn from_placements<I>(lines: I) -> Result<Self, GameError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let board = Board::from_placements(lines)?;
        debug!("fleet accepted, {} ships placed", board.ships().len());
        Ok(Game { board, over: false })
    }

    /// Parse and resolve one guess record (`X Y`). Surplus tokens are
    /// ignored; fewer than two integer fields is fatal.
    pub fn resolve(&mut self, line: &str) -> Result<GuessOutcome, GameError> {
        let record = line.trim();
        let mut tokens = record.split_whitespace();
        let mut next_coord = || {
            tokens
                .next()
                .and_then(|t| t.parse::<i32>().ok())
                .ok_or_else(|| GameError::MalformedGuess(record.to_string()))
        };
        let x = next_coord()?;
        let y = next_coord()?;
        let outcome = self.board.guess(x, y);
        if matches!(outcome, GuessOutcome::Sunk(_)) && self.board.all_sunk() {
            self.over = true;
        }
        Ok(outcome)
    }

    /// True once every ship is sunk; no further guesses are resolved.
    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// Run a whole match: build the board from `placements`, then resolve
/// `guesses` in order, emitting one outcome per record to `emit`.
///
/// When the last ship sinks, the terminal [`GuessOutcome::AllSunk`] is
/// emitted right after the final sink line and remaining guesses are left
/// unread. Fatal input errors abort the run with no partial recovery.
pub fn run<P, G, F>(placements: P, guesses: G, mut emit: F) -> Result<(), GameError>
where
    P: IntoIterator,
    P::Item: AsRef<str>,
    G: IntoIterator,
    G::Item: AsRef<str>,
    F: FnMut(GuessOutcome),
{
    let mut game = Game::from_placements(placements)?;
    for line in guesses {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        let outcome = game.resolve(line)?;
        emit(outcome);
        if game.is_over() {
            emit(GuessOutcome::AllSunk);
            break;
        }
    }
    Ok(())
}
