//! Win detection: a completed line summing to the magic total.

use crate::position::Position;
use crate::types::{Board, Cell, MAGIC_SUM};
use tracing::instrument;

/// The 8 lines of the grid: 3 rows, 3 columns, 2 diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether any row, column, or diagonal sums to the magic total.
///
/// A line only counts when all three of its cells are filled. The sum of
/// an incomplete line is `None`, never zero, so a partial line whose
/// filled digits happen to reach the total cannot win.
#[instrument]
pub fn is_winning(board: &Board) -> bool {
    LINES
        .iter()
        .any(|line| line_sum(board, line) == Some(MAGIC_SUM))
}

/// Sum of a line's digits, or `None` if any cell is empty.
fn line_sum(board: &Board, line: &[Position; 3]) -> Option<u32> {
    line.iter().try_fold(0u32, |acc, pos| match board.get(*pos) {
        Cell::Filled(v) => Some(acc + u32::from(v)),
        Cell::Empty => None,
    })
}
