//! Reference strategies.
//!
//! - `FirstMoveStrategy`: always the first move in set order
//! - `RandomStrategy`: uniform over the legal set, seeded
//! - `ScriptedStrategy`: replays a fixed list of moves

use std::collections::VecDeque;

use super::Strategy;
use crate::board::LocationId;
use crate::core::{GameRng, GameState, Move};
use crate::rules::MoveSet;

/// Picks the first move in the set's deterministic order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMoveStrategy;

impl Strategy for FirstMoveStrategy {
    fn choose_move(&mut self, _view: &GameState, _location: LocationId, moves: &MoveSet) -> Move {
        moves.first_move()
    }
}

/// Uniform random choice over the legal set.
///
/// Deterministic for a given seed and sequence of positions.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Use an existing stream, typically a fork of a master RNG.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&mut self, _view: &GameState, _location: LocationId, moves: &MoveSet) -> Move {
        let index = self.rng.gen_range_usize(0..moves.len());
        moves.get(index).copied().unwrap_or_else(|| moves.first_move())
    }
}

/// Plays queued moves in order, then falls back to the first legal move.
///
/// Queued moves are returned as-is, legal or not; this is how tests feed
/// the engine a bad answer.
#[derive(Clone, Debug, Default)]
pub struct ScriptedStrategy {
    script: VecDeque<Move>,
}

impl ScriptedStrategy {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = Move>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl Strategy for ScriptedStrategy {
    fn choose_move(&mut self, _view: &GameState, _location: LocationId, moves: &MoveSet) -> Move {
        self.script.pop_front().unwrap_or_else(|| moves.first_move())
    }
}
