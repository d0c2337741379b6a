//! First-class action types.
//!
//! Moves are domain events, not side effects. They represent a party's
//! intent and can be validated, serialized for replay, and logged
//! independently of execution.

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::types::Mover;

/// A candidate move: placing `value` at `position`.
///
/// Legality (empty cell, unused digit, correct parity) is checked by the
/// environment, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Target cell.
    pub position: Position,
    /// Digit to place (1-9).
    pub value: u8,
}

impl Action {
    /// Creates a new action.
    pub fn new(position: Position, value: u8) -> Self {
        Self { position, value }
    }

    /// Returns the target cell of this action.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the digit this action places.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// The party this action belongs to, derived from digit parity.
    pub fn mover(&self) -> Mover {
        if self.value % 2 == 1 {
            Mover::Agent
        } else {
            Mover::Opponent
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.value, self.position.label())
    }
}
