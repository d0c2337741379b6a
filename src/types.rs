//! Core domain types for numerical tic-tac-toe.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Lowest playable digit.
pub const MIN_VALUE: u8 = 1;

/// Highest playable digit.
pub const MAX_VALUE: u8 = 9;

/// Sum a completed row, column, or diagonal must reach to win.
pub const MAGIC_SUM: u32 = 15;

/// A party making moves in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mover {
    /// The external agent; places odd digits.
    Agent,
    /// The built-in opponent; places even digits.
    Opponent,
}

impl Mover {
    /// Returns the other party.
    pub fn other(self) -> Self {
        match self {
            Mover::Agent => Mover::Opponent,
            Mover::Opponent => Mover::Agent,
        }
    }

    /// Whether this party may place the given digit.
    ///
    /// The digit pool 1-9 is partitioned by parity: odd digits belong
    /// to the agent, even digits to the opponent.
    pub fn owns_value(self, value: u8) -> bool {
        match self {
            Mover::Agent => value % 2 == 1,
            Mover::Opponent => value % 2 == 0,
        }
    }
}

impl std::fmt::Display for Mover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mover::Agent => write!(f, "agent"),
            Mover::Opponent => write!(f, "opponent"),
        }
    }
}

/// A cell on the board.
///
/// Emptiness is an explicit variant rather than a sentinel number, so an
/// incomplete line can never be summed by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No digit placed yet.
    Empty,
    /// A placed digit (1-9).
    Filled(u8),
}

/// 3x3 board of digits in row-major order.
///
/// Each digit 1-9 appears at most once across the whole board. The board
/// is dumb storage; legality checks live in the environment and the rules
/// module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Creates a board from explicit cells (row-major).
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position without any legality check.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if the cell at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Checks if every cell is filled.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Whether the digit has already been placed somewhere on the board.
    pub fn contains_value(&self, value: u8) -> bool {
        self.cells.iter().any(|c| *c == Cell::Filled(value))
    }

    /// Digits already placed, in board order.
    pub fn used_values(&self) -> Vec<u8> {
        self.cells
            .iter()
            .filter_map(|c| match c {
                Cell::Filled(v) => Some(*v),
                Cell::Empty => None,
            })
            .collect()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.cells[row * 3 + col] {
                    Cell::Empty => ".".to_string(),
                    Cell::Filled(v) => v.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of evaluating a board snapshot.
///
/// A win is detected independent of whose move produced it; the caller
/// attributes it to whichever party just moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The game continues.
    Resume,
    /// A completed line sums to the magic total.
    Win,
    /// The board is full with no winning line.
    Tie,
}

impl GameOutcome {
    /// Whether this outcome ends the episode.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Resume)
    }
}
