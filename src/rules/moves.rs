//! Legal-move enumeration: free positions, unused digits, action spaces.

use strum::IntoEnumIterator;
use tracing::instrument;

use crate::action::Action;
use crate::position::Position;
use crate::types::{Board, MAX_VALUE, MIN_VALUE, Mover};

/// All currently-empty cells, in row-major order.
#[instrument]
pub fn allowed_positions(board: &Board) -> Vec<Position> {
    Position::iter().filter(|pos| board.is_empty(*pos)).collect()
}

/// Digits not yet placed on the board, partitioned by party.
///
/// Returns `(odd, even)`, each ascending. Together with the used digits
/// they always make up exactly {1, ..., 9}.
#[instrument]
pub fn allowed_values(board: &Board) -> (Vec<u8>, Vec<u8>) {
    let unused = |mover: Mover| {
        (MIN_VALUE..=MAX_VALUE)
            .filter(|v| mover.owns_value(*v) && !board.contains_value(*v))
            .collect::<Vec<u8>>()
    };
    (unused(Mover::Agent), unused(Mover::Opponent))
}

/// Every legal (position, value) pair for each party.
///
/// The cross product of free positions with each party's unused digits,
/// as `(agent_actions, opponent_actions)`. Both are exhaustive: every
/// matching pair appears exactly once.
#[instrument]
pub fn action_space(board: &Board) -> (Vec<Action>, Vec<Action>) {
    let positions = allowed_positions(board);
    let (odd, even) = allowed_values(board);
    let cross = |values: &[u8]| {
        positions
            .iter()
            .flat_map(|pos| values.iter().map(move |v| Action::new(*pos, *v)))
            .collect::<Vec<Action>>()
    };
    (cross(&odd), cross(&even))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_empty_board_enumerations() {
        let board = Board::new();
        assert_eq!(allowed_positions(&board).len(), 9);

        let (odd, even) = allowed_values(&board);
        assert_eq!(odd, vec![1, 3, 5, 7, 9]);
        assert_eq!(even, vec![2, 4, 6, 8]);

        let (agent, opponent) = action_space(&board);
        assert_eq!(agent.len(), 9 * 5);
        assert_eq!(opponent.len(), 9 * 4);
    }

    #[test]
    fn test_used_digits_are_excluded() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Filled(5));
        board.set(Position::Center, Cell::Filled(4));

        let positions = allowed_positions(&board);
        assert_eq!(positions.len(), 7);
        assert!(!positions.contains(&Position::TopLeft));
        assert!(!positions.contains(&Position::Center));

        let (odd, even) = allowed_values(&board);
        assert_eq!(odd, vec![1, 3, 7, 9]);
        assert_eq!(even, vec![2, 6, 8]);
    }

    #[test]
    fn test_action_space_cardinality() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Filled(1));
        board.set(Position::TopCenter, Cell::Filled(2));
        board.set(Position::TopRight, Cell::Filled(3));

        let positions = allowed_positions(&board);
        let (odd, even) = allowed_values(&board);
        let (agent, opponent) = action_space(&board);
        assert_eq!(agent.len(), positions.len() * odd.len());
        assert_eq!(opponent.len(), positions.len() * even.len());
    }

    #[test]
    fn test_action_space_pairs_are_unique() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Filled(7));

        let (agent, opponent) = action_space(&board);
        for actions in [&agent, &opponent] {
            let mut seen = actions.clone();
            seen.sort_by_key(|a| (a.position.to_index(), a.value));
            seen.dedup();
            assert_eq!(seen.len(), actions.len());
        }
        assert!(agent.iter().all(|a| a.mover() == Mover::Agent));
        assert!(opponent.iter().all(|a| a.mover() == Mover::Opponent));
    }
}
