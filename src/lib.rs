//! Numerical tic-tac-toe as a reinforcement learning environment.
//!
//! A 3x3 board is filled with the digits 1-9, each usable once per game.
//! The external agent places odd digits, a built-in uniformly-random
//! opponent places even digits, and any row, column, or diagonal whose
//! three cells sum to exactly 15 wins.
//!
//! # Architecture
//!
//! - **Types**: board storage, movers, and outcomes ([`Board`], [`Cell`],
//!   [`Mover`], [`GameOutcome`])
//! - **Rules**: pure evaluation and legal-move enumeration over board
//!   snapshots ([`rules`])
//! - **Environment**: the stepping state machine a training loop drives
//!   ([`Environment`])
//! - **Invariants**: first-class board properties checked in debug builds
//!   ([`invariants`])
//!
//! # Example
//!
//! ```
//! use fifteen_env::{Action, Environment, Position};
//!
//! let mut env = Environment::with_seed(7);
//! env.reset();
//!
//! // The agent places an odd digit; the opponent replies automatically.
//! let step = env.step(Action::new(Position::Center, 5))?;
//! assert!(!step.done);
//! assert_eq!(step.reward, fifteen_env::REWARD_STEP);
//! # Ok::<(), fifteen_env::EnvError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod env;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::Action;
pub use env::{
    EnvError, EnvStep, Environment, OpponentPolicy, REWARD_LOSS, REWARD_STEP, REWARD_TIE,
    REWARD_WIN, UniformRandom,
};
pub use position::Position;
pub use types::{Board, Cell, GameOutcome, MAGIC_SUM, MAX_VALUE, MIN_VALUE, Mover};
