//! First-class board invariants.
//!
//! Invariants are logical properties that must hold throughout an episode.
//! They are checked in debug builds after every step and are testable
//! independently, serving as documentation of system guarantees.

use tracing::warn;

use crate::types::{Board, Cell, MAX_VALUE, MIN_VALUE};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: every filled cell holds a digit in 1-9.
pub struct ValueRangeInvariant;

impl Invariant<Board> for ValueRangeInvariant {
    fn holds(board: &Board) -> bool {
        for cell in board.cells() {
            if let Cell::Filled(v) = cell
                && !(MIN_VALUE..=MAX_VALUE).contains(v)
            {
                warn!(value = *v, "digit outside the playable range");
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "every filled cell holds a digit in 1-9"
    }
}

/// Invariant: no digit appears on the board twice.
///
/// The digit pool is shared across both parties and never refilled, so a
/// repeated digit means a transition bypassed legality checking.
pub struct UniqueValuesInvariant;

impl Invariant<Board> for UniqueValuesInvariant {
    fn holds(board: &Board) -> bool {
        let mut seen = [false; (MAX_VALUE as usize) + 1];
        for value in board.used_values() {
            let slot = value as usize;
            if slot >= seen.len() {
                // Out of range; ValueRangeInvariant reports it.
                continue;
            }
            if seen[slot] {
                warn!(value, "digit placed twice");
                return false;
            }
            seen[slot] = true;
        }
        true
    }

    fn description() -> &'static str {
        "each digit 1-9 appears at most once"
    }
}

/// Invariant: odd and even digit counts stay balanced.
///
/// The agent opens every episode and the parties strictly alternate, so
/// the number of odd digits on the board is always equal to or one more
/// than the number of even digits.
pub struct ParityBalanceInvariant;

impl Invariant<Board> for ParityBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let odd = board.used_values().iter().filter(|v| *v % 2 == 1).count();
        let even = board.used_values().iter().filter(|v| *v % 2 == 0).count();

        let valid = odd == even || odd == even + 1;
        if !valid {
            warn!(odd, even, "parity balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "odd digit count equals or exceeds even digit count by one"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (
    ValueRangeInvariant,
    UniqueValuesInvariant,
    ParityBalanceInvariant,
);

/// Asserts that all board invariants hold (panics on violation in debug
/// builds).
pub fn assert_invariants(board: &Board) {
    debug_assert!(
        ValueRangeInvariant::holds(board),
        "value range violated: {}",
        board.display(),
    );
    debug_assert!(
        UniqueValuesInvariant::holds(board),
        "digit uniqueness violated: {}",
        board.display(),
    );
    debug_assert!(
        ParityBalanceInvariant::holds(board),
        "parity balance violated: {}",
        board.display(),
    );
}
