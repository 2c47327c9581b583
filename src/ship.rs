//! Ship classes and placement-record parsing.
//!
//! A placement record is one line of the form `TYPE X1 Y1 X2 Y2`. Parsing
//! validates the geometry (bounds, axis alignment, span length) and yields
//! the full span of occupied cells in ascending order.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::common::GameError;
use crate::config::{class_for_code, BOARD_SIZE};

/// Orientation of a ship on the board. A single-cell span counts as
/// horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Class of ship: code letter used in placement files, display name, and
/// required span length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    code: char,
    name: &'static str,
    length: usize,
}

impl ShipClass {
    pub const fn new(code: char, name: &'static str, length: usize) -> Self {
        Self { code, name, length }
    }

    /// One-letter code identifying this class in placement records.
    pub fn code(&self) -> char {
        self.code
    }

    /// Human-readable class name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Required span length for this class.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// One placed vessel: its class, orientation, occupied span, and the count
/// of segments not yet hit. The source record is retained for error
/// reporting.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    orientation: Orientation,
    cells: Vec<(u8, u8)>,
    remaining: usize,
    record: String,
}

impl Ship {
    /// Parse and validate one placement record.
    ///
    /// Checks run in order: field syntax, endpoint bounds, axis alignment,
    /// class code, span length. Composition checks across records
    /// (duplicates, completeness) belong to the board.
    pub fn parse(line: &str) -> Result<Self, GameError> {
        let record = line.trim();
        let malformed = || GameError::MalformedPlacement(record.to_string());

        let mut tokens = record.split_whitespace();
        let code_token = tokens.next().ok_or_else(malformed)?;
        let mut code_chars = code_token.chars();
        let code = code_chars.next().ok_or_else(malformed)?;
        if code_chars.next().is_some() {
            return Err(malformed());
        }

        let mut coords = [0i32; 4];
        for slot in coords.iter_mut() {
            let token = tokens.next().ok_or_else(malformed)?;
            *slot = token.parse().map_err(|_| malformed())?;
        }
        let [x1, y1, x2, y2] = coords;

        if coords.iter().any(|c| !(0..BOARD_SIZE as i32).contains(c)) {
            return Err(GameError::ShipOutOfBounds(record.to_string()));
        }

        let dx = (x1 - x2).unsigned_abs() as usize;
        let dy = (y1 - y2).unsigned_abs() as usize;
        let (orientation, length) = if dx == 0 && dy > 0 {
            (Orientation::Vertical, dy + 1)
        } else if dy == 0 {
            (Orientation::Horizontal, dx + 1)
        } else {
            return Err(GameError::NotAxisAligned(record.to_string()));
        };

        let class = class_for_code(code).ok_or(GameError::FleetComposition)?;
        if length != class.length() {
            return Err(GameError::IncorrectSize(record.to_string()));
        }

        // Span cells inclusive of both endpoints, ascending on the varying
        // axis. Endpoint order in the record does not matter.
        let cells: Vec<(u8, u8)> = match orientation {
            Orientation::Horizontal => {
                (x1.min(x2)..=x1.max(x2)).map(|x| (x as u8, y1 as u8)).collect()
            }
            Orientation::Vertical => {
                (y1.min(y2)..=y1.max(y2)).map(|y| (x1 as u8, y as u8)).collect()
            }
        };

        Ok(Ship {
            class,
            orientation,
            cells,
            remaining: length,
            record: record.to_string(),
        })
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells, ascending along the varying axis.
    pub fn cells(&self) -> &[(u8, u8)] {
        &self.cells
    }

    /// True if the ship occupies `(x, y)`.
    pub fn contains(&self, x: u8, y: u8) -> bool {
        self.cells.contains(&(x, y))
    }

    /// Segments not yet hit.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Record a first-time hit on one of this ship's cells.
    pub fn record_hit(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// True once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.remaining == 0
    }

    /// The source placement record, trimmed.
    pub fn record(&self) -> &str {
        &self.record
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ code: '{}', orientation: {:?}, cells: {:?}, remaining: {} }}",
            self.class.code(),
            self.orientation,
            self.cells,
            self.remaining,
        )
    }
}
