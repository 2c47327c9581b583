//! Board state: occupancy grid, guessed plane, fleet loading, and the
//! per-guess state machine.

use alloc::string::ToString;
use alloc::vec::Vec;
use log::{debug, trace};

use crate::bitboard::BitBoard;
use crate::common::{GameError, GuessOutcome};
use crate::config::{BOARD_SIZE, NUM_SHIPS};
use crate::ship::Ship;

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// The 10×10 grid plus the placed fleet. Cells refer to ships by index
/// into the fleet vector; ships are never removed, sinking is derived
/// from the per-ship hit counter.
#[derive(Debug)]
pub struct Board {
    occupancy: [[Option<usize>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    ship_map: BB,
    guessed: BB,
    ships: Vec<Ship>,
    sunk: usize,
}

impl Board {
    /// Create an empty board with no ships placed.
    pub fn new() -> Self {
        Board {
            occupancy: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            ship_map: BB::new(),
            guessed: BB::new(),
            ships: Vec::new(),
            sunk: 0,
        }
    }

    /// Build a board from a sequence of placement records, one ship per
    /// line. Any violation is fatal: the first error ends the load.
    pub fn from_placements<I>(lines: I) -> Result<Self, GameError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut board = Board::new();
        let mut seen: Vec<char> = Vec::new();
        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            let ship = Ship::parse(line)?;
            let code = ship.class().code();
            if seen.contains(&code) {
                return Err(GameError::FleetComposition);
            }
            seen.push(code);
            board.place(ship)?;
        }
        // Duplicates and unknown codes were already rejected per record,
        // so this only catches a short or empty file.
        if seen.len() != NUM_SHIPS {
            return Err(GameError::FleetComposition);
        }
        Ok(board)
    }

    /// Place one validated ship, rejecting any overlap with an earlier one.
    pub fn place(&mut self, ship: Ship) -> Result<(), GameError> {
        for &(x, y) in ship.cells() {
            if self.occupancy[x as usize][y as usize].is_some() {
                return Err(GameError::OverlappingShip(ship.record().to_string()));
            }
        }
        let index = self.ships.len();
        for &(x, y) in ship.cells() {
            self.occupancy[x as usize][y as usize] = Some(index);
            let _ = self.ship_map.set(x as usize, y as usize);
        }
        debug!(
            "placed {} ({:?}, {} cells)",
            ship.class().name(),
            ship.orientation(),
            ship.cells().len()
        );
        self.ships.push(ship);
        Ok(())
    }

    /// Classify one guess and update the cell/ship state.
    ///
    /// Out-of-range coordinates are legal input and touch nothing. For
    /// in-bounds guesses the previously-guessed flag is read before and
    /// set after classification, so a repeated guess always yields an
    /// "(again)" variant and never decrements a hit counter twice.
    pub fn guess(&mut self, x: i32, y: i32) -> GuessOutcome {
        let range = 0..BOARD_SIZE as i32;
        if !range.contains(&x) || !range.contains(&y) {
            trace!("guess ({}, {}) off the board", x, y);
            return GuessOutcome::Illegal;
        }
        let (xu, yu) = (x as usize, y as usize);
        let already = self.guessed.get(xu, yu).unwrap_or(false);
        let outcome = match self.occupancy[xu][yu] {
            None if already => GuessOutcome::MissAgain,
            None => GuessOutcome::Miss,
            Some(_) if already => GuessOutcome::HitAgain,
            Some(index) => {
                let ship = &mut self.ships[index];
                ship.record_hit();
                if ship.is_sunk() {
                    self.sunk += 1;
                    GuessOutcome::Sunk(ship.class().code())
                } else {
                    GuessOutcome::Hit
                }
            }
        };
        let _ = self.guessed.set(xu, yu);
        trace!("guess ({}, {}) -> {}", x, y, outcome);
        outcome
    }

    /// Returns `true` when every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.sunk == NUM_SHIPS
    }

    /// Count of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// The placed fleet, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The ship occupying `(x, y)`, if any.
    pub fn ship_at(&self, x: u8, y: u8) -> Option<&Ship> {
        self.occupancy[x as usize][y as usize].map(|i| &self.ships[i])
    }

    /// Aggregate occupancy mask of all ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    /// Plane of previously-guessed cells.
    pub fn guessed(&self) -> BB {
        self.guessed
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
