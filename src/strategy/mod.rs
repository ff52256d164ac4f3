//! Move-choosing collaborators.
//!
//! The engine does not decide anything. For every turn it hands the seat's
//! `Strategy` a read-only view, the seat's own true location and the legal
//! move set, and expects exactly one move back. The answer is untrusted:
//! the engine validates it against the legal set by value.
//!
//! Closures with the right signature are strategies too:
//!
//! ```
//! use pursuit_engine::core::{GameState, Move};
//! use pursuit_engine::rules::MoveSet;
//! use pursuit_engine::strategy::Strategy;
//!
//! fn takes_strategy(_: impl Strategy) {}
//!
//! takes_strategy(|_: &GameState, _: u32, moves: &MoveSet| -> Move {
//!     *moves.first().unwrap()
//! });
//! ```

mod simple;

pub use simple::{FirstMoveStrategy, RandomStrategy, ScriptedStrategy};

use crate::board::LocationId;
use crate::core::{GameState, Move};
use crate::rules::MoveSet;

/// Decides one move per invocation.
pub trait Strategy {
    /// Choose a move. Returning a move outside `moves` is rejected.
    fn choose_move(&mut self, view: &GameState, location: LocationId, moves: &MoveSet) -> Move;
}

impl<F> Strategy for F
where
    F: FnMut(&GameState, LocationId, &MoveSet) -> Move,
{
    fn choose_move(&mut self, view: &GameState, location: LocationId, moves: &MoveSet) -> Move {
        self(view, location, moves)
    }
}
