//! Recorded game events.
//!
//! `GameEvent` is the value form of one spectator notification. `EventLog`
//! is a ready-made spectator that appends every notification it receives,
//! which is what replays, transcripts and tests usually want.

use std::cell::RefCell;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::bus::Spectator;
use crate::core::{Colour, GameState, Move};

/// One notification, as a value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted(usize),
    MoveMade(Move),
    RotationComplete,
    GameOver(BTreeSet<Colour>),
}

/// Spectator that records every notification in order.
#[derive(Debug, Default)]
pub struct EventLog {
    events: RefCell<Vec<GameEvent>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Only the moves, in the order they were announced.
    #[must_use]
    pub fn moves(&self) -> Vec<Move> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                GameEvent::MoveMade(mv) => Some(*mv),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    fn push(&self, event: GameEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl Spectator for EventLog {
    fn on_round_started(&self, _view: &GameState, round: usize) {
        self.push(GameEvent::RoundStarted(round));
    }

    fn on_move_made(&self, _view: &GameState, mv: &Move) {
        self.push(GameEvent::MoveMade(*mv));
    }

    fn on_rotation_complete(&self, _view: &GameState) {
        self.push(GameEvent::RotationComplete);
    }

    fn on_game_over(&self, _view: &GameState, winners: &BTreeSet<Colour>) {
        self.push(GameEvent::GameOver(winners.clone()));
    }
}
