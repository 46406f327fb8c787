//! Decision making under uncertainty.
//!
//! [`DecisionMaker`] holds a payoff matrix (alternatives as rows, states of
//! nature as columns) and recommends an alternative under the Maximax,
//! Maximin, Hurwicz, Minimax Regret and Laplace criteria. The [`shell`]
//! module is the terminal front end built on top of it.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod shell;

pub use error::{DecisionError, InputError, Result};
pub use evaluator::{
    Criterion, Decision, DecisionMaker, Evaluation, DEFAULT_HURWICZ_ALPHA, DEFAULT_SUMMARY_ALPHA,
};
