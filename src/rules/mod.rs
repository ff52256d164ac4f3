//! Game rules: legal move generation and win evaluation.
//!
//! Both halves are pure functions over borrowed state. The engine calls
//! into them but never duplicates their logic.

pub mod generator;
pub mod outcome;

pub use generator::{legal_moves, MoveSet};
pub use outcome::{evaluate, Outcome, Side, WinCheck, WinReason};
