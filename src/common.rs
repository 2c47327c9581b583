//! Common types: fatal validation errors and the per-guess outcome vocabulary.

use alloc::string::String;
use core::fmt;

/// Classification of a single guess. Each value maps to exactly one output
/// line; `Display` produces the wording verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Coordinates outside the board; no state was touched.
    Illegal,
    /// First guess of an empty cell.
    Miss,
    /// Repeated guess of an empty cell.
    MissAgain,
    /// First hit on an undepleted ship segment.
    Hit,
    /// Repeated guess of a cell whose hit was already recorded.
    HitAgain,
    /// First hit on a ship's last unhit segment, carrying its class code.
    Sunk(char),
    /// Every ship is sunk; the match is over.
    AllSunk,
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessOutcome::Illegal => write!(f, "illegal guess"),
            GuessOutcome::Miss => write!(f, "miss"),
            GuessOutcome::MissAgain => write!(f, "miss (again)"),
            GuessOutcome::Hit => write!(f, "hit"),
            GuessOutcome::HitAgain => write!(f, "hit (again)"),
            GuessOutcome::Sunk(code) => write!(f, "{} sunk", code),
            GuessOutcome::AllSunk => write!(f, "all ships sunk: game over"),
        }
    }
}

/// Fatal input errors. Any of these ends the run after one explanatory
/// line; variants that concern a single record carry the offending line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Placement record with missing or non-integer fields.
    MalformedPlacement(String),
    /// An endpoint coordinate lies outside the board.
    ShipOutOfBounds(String),
    /// Endpoints differ on both axes.
    NotAxisAligned(String),
    /// Span length does not match the class's required length.
    IncorrectSize(String),
    /// Unknown class code, duplicated class, or an incomplete fleet.
    FleetComposition,
    /// A span cell is already occupied by an earlier ship.
    OverlappingShip(String),
    /// Guess record with fewer than two integer fields.
    MalformedGuess(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::MalformedPlacement(line) => {
                write!(f, "ERROR: malformed placement line: {}", line)
            }
            GameError::ShipOutOfBounds(line) => {
                write!(f, "ERROR: ship out-of-bounds: {}", line)
            }
            GameError::NotAxisAligned(line) => {
                write!(f, "ERROR: ship not horizontal or vertical: {}", line)
            }
            GameError::IncorrectSize(line) => {
                write!(f, "ERROR: incorrect ship size: {}", line)
            }
            GameError::FleetComposition => write!(f, "ERROR: fleet composition incorrect"),
            GameError::OverlappingShip(line) => {
                write!(f, "ERROR: overlapping ship: {}", line)
            }
            GameError::MalformedGuess(line) => {
                write!(f, "ERROR: malformed guess: {}", line)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
