//! Game rules for numerical tic-tac-toe.
//!
//! This module contains pure functions for evaluating board snapshots.
//! Rules are separated from board storage so the environment, tests, and
//! invariants can all reason over the same functions.

pub mod moves;
pub mod win;

pub use moves::{action_space, allowed_positions, allowed_values};
pub use win::is_winning;

use crate::types::{Board, GameOutcome};
use tracing::instrument;

/// Evaluates a board snapshot.
///
/// Returns `Win` if any completed line sums to the magic total, `Tie` if
/// the board is full without one, and `Resume` otherwise. The win is
/// attributed by the caller to whichever party just moved.
#[instrument]
pub fn evaluate(board: &Board) -> GameOutcome {
    if win::is_winning(board) {
        GameOutcome::Win
    } else if board.is_full() {
        GameOutcome::Tie
    } else {
        GameOutcome::Resume
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Cell;

    #[test]
    fn test_empty_board_resumes() {
        assert_eq!(evaluate(&Board::new()), GameOutcome::Resume);
    }

    #[test]
    fn test_winning_line_terminates() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Filled(8));
        board.set(Position::TopCenter, Cell::Filled(3));
        board.set(Position::TopRight, Cell::Filled(4));
        assert_eq!(evaluate(&board), GameOutcome::Win);
        assert!(evaluate(&board).is_terminal());
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        // 2 1 4 / 3 5 6 / 7 8 9: no row, column, or diagonal reaches 15.
        let board = Board::from_cells([
            Cell::Filled(2),
            Cell::Filled(1),
            Cell::Filled(4),
            Cell::Filled(3),
            Cell::Filled(5),
            Cell::Filled(6),
            Cell::Filled(7),
            Cell::Filled(8),
            Cell::Filled(9),
        ]);
        assert_eq!(evaluate(&board), GameOutcome::Tie);
    }
}
