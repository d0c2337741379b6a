//! The environment state machine: reset, state transition, and the
//! two-phase step protocol driven by an external training loop.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::action::Action;
use crate::invariants;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Cell, GameOutcome, MAX_VALUE, MIN_VALUE, Mover};

/// Reward when the agent's own move completes a winning line.
pub const REWARD_WIN: i32 = 10;

/// Reward when the opponent's move completes a winning line.
pub const REWARD_LOSS: i32 = -10;

/// Reward for a tie, from either mover.
pub const REWARD_TIE: i32 = 0;

/// Per-turn cost while the episode continues; encourages faster wins.
pub const REWARD_STEP: i32 = -1;

/// Errors that can occur when transitioning or stepping the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EnvError {
    /// The target cell already holds a digit.
    #[display("cell {_0} is already filled")]
    PositionFilled(Position),

    /// The digit has already been placed elsewhere on the board.
    #[display("digit {_0} has already been placed")]
    ValueUsed(u8),

    /// The digit is outside the playable pool.
    #[display("digit {_0} is outside the playable range 1-9")]
    ValueOutOfRange(u8),

    /// A party supplied a digit belonging to the other party.
    #[display("digit {value} has the wrong parity for the {mover}")]
    WrongParity {
        /// The offending digit.
        value: u8,
        /// The party that tried to place it.
        mover: Mover,
    },

    /// The game is over, or the party has no legal action left.
    #[display("no legal moves remain for the {_0}")]
    NoLegalMoves(Mover),
}

impl std::error::Error for EnvError {}

/// Action selection for the built-in opponent.
///
/// The opponent's uniform draw is the environment's only nondeterminism.
/// Keeping it behind a trait lets tests supply a fixed seed or a
/// deterministic stub and reproduce an episode exactly.
pub trait OpponentPolicy {
    /// Picks one action from the opponent's legal set, or `None` if the
    /// set is empty.
    fn choose(&mut self, actions: &[Action]) -> Option<Action>;
}

/// Uniform random selection over the legal action set.
#[derive(Debug)]
pub struct UniformRandom {
    rng: StdRng,
}

impl UniformRandom {
    /// A policy seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A policy with a fixed seed, for reproducible episodes.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl OpponentPolicy for UniformRandom {
    fn choose(&mut self, actions: &[Action]) -> Option<Action> {
        actions.choose(&mut self.rng).copied()
    }
}

/// One external transition of the environment.
///
/// Carries the board after the agent's move and (when the game continued)
/// the opponent's reply, the reward for the transition, and whether the
/// episode ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvStep {
    /// Board after all physical moves of this step.
    pub board: Board,
    /// Reward: +10 agent win, -10 opponent win, 0 tie, -1 otherwise.
    pub reward: i32,
    /// Whether the episode is over.
    pub done: bool,
    /// Outcome evaluated after the last physical move.
    pub outcome: GameOutcome,
}

/// Numerical tic-tac-toe environment.
///
/// Owns the board and the opponent policy. A single [`step`] call applies
/// the agent's move and, when the game continues, one opponent move - the
/// standard single-agent convention against a built-in stochastic
/// opponent. Fully synchronous; callers needing parallelism should run
/// one environment per concurrent game.
///
/// [`step`]: Environment::step
#[derive(Debug)]
pub struct Environment<P = UniformRandom> {
    board: Board,
    opponent: P,
}

impl Environment<UniformRandom> {
    /// Creates an environment with an entropy-seeded random opponent.
    pub fn new() -> Self {
        Self::with_policy(UniformRandom::from_entropy())
    }

    /// Creates an environment with a seeded random opponent.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_policy(UniformRandom::seeded(seed))
    }
}

impl Default for Environment<UniformRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: OpponentPolicy> Environment<P> {
    /// Creates an environment with the given opponent policy.
    pub fn with_policy(opponent: P) -> Self {
        Self {
            board: Board::new(),
            opponent,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Clears the board and returns the starting state.
    ///
    /// Always yields an all-empty board regardless of prior state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &Board {
        self.board = Board::new();
        &self.board
    }

    /// Terminal check for the current board.
    ///
    /// Returns `(true, Win)` on a completed magic-sum line, `(true, Tie)`
    /// when no empty cell remains, and `(false, Resume)` otherwise.
    pub fn is_terminal(&self) -> (bool, GameOutcome) {
        let outcome = rules::evaluate(&self.board);
        (outcome.is_terminal(), outcome)
    }

    /// Writes the action's digit into its cell, in place.
    ///
    /// The transition is mover-agnostic: parity belongs to turn
    /// sequencing, which [`step`] enforces. Occupied cells, reused
    /// digits, and out-of-range digits are rejected rather than
    /// corrupting the board.
    ///
    /// [`step`]: Environment::step
    ///
    /// # Errors
    ///
    /// [`EnvError::ValueOutOfRange`], [`EnvError::PositionFilled`], or
    /// [`EnvError::ValueUsed`] when the action is illegal.
    #[instrument(skip(self))]
    pub fn state_transition(&mut self, action: Action) -> Result<&Board, EnvError> {
        if !(MIN_VALUE..=MAX_VALUE).contains(&action.value) {
            return Err(EnvError::ValueOutOfRange(action.value));
        }
        if !self.board.is_empty(action.position) {
            return Err(EnvError::PositionFilled(action.position));
        }
        if self.board.contains_value(action.value) {
            return Err(EnvError::ValueUsed(action.value));
        }

        self.board.set(action.position, Cell::Filled(action.value));
        debug!(%action, "digit placed");
        Ok(&self.board)
    }

    /// Applies the agent's action and advances the environment one step.
    ///
    /// The two-phase protocol: apply the agent's move, evaluate; if the
    /// game continues, apply one opponent action drawn from the opponent
    /// policy over the full legal set, and evaluate again. The reward is
    /// +10 when the agent's move won, -10 when the opponent's move won,
    /// 0 on a tie from either mover, and -1 when the episode continues.
    ///
    /// # Errors
    ///
    /// - [`EnvError::NoLegalMoves`] when the board is already terminal,
    ///   or the opponent has no legal action left;
    /// - [`EnvError::WrongParity`] when the agent supplies an even digit;
    /// - the [`state_transition`] rejections for illegal placements.
    ///
    /// [`state_transition`]: Environment::state_transition
    #[instrument(skip(self))]
    pub fn step(&mut self, action: Action) -> Result<EnvStep, EnvError> {
        if rules::evaluate(&self.board).is_terminal() {
            return Err(EnvError::NoLegalMoves(Mover::Agent));
        }
        if !Mover::Agent.owns_value(action.value) {
            return Err(EnvError::WrongParity {
                value: action.value,
                mover: Mover::Agent,
            });
        }

        self.state_transition(action)?;
        let agent_outcome = rules::evaluate(&self.board);
        if agent_outcome.is_terminal() {
            let reward = match agent_outcome {
                GameOutcome::Win => REWARD_WIN,
                _ => REWARD_TIE,
            };
            return Ok(self.report(reward, agent_outcome));
        }

        let (_, opponent_actions) = rules::action_space(&self.board);
        let reply = self
            .opponent
            .choose(&opponent_actions)
            .ok_or(EnvError::NoLegalMoves(Mover::Opponent))?;
        self.state_transition(reply)?;
        debug!(%reply, "opponent replied");

        // The reward reads the opponent-move outcome; the tie branch must
        // not re-read the agent's.
        let outcome = rules::evaluate(&self.board);
        let reward = match outcome {
            GameOutcome::Win => REWARD_LOSS,
            GameOutcome::Tie => REWARD_TIE,
            GameOutcome::Resume => REWARD_STEP,
        };
        Ok(self.report(reward, outcome))
    }

    fn report(&self, reward: i32, outcome: GameOutcome) -> EnvStep {
        invariants::assert_invariants(&self.board);
        EnvStep {
            board: self.board.clone(),
            reward,
            done: outcome.is_terminal(),
            outcome,
        }
    }
}
