//! Spectator registration and snapshot iteration.

use std::collections::BTreeSet;
use std::rc::Rc;

use im::Vector;
use tracing::warn;

use crate::core::{Colour, GameError, GameState, Move};

/// Observer of a running game.
///
/// Every method has an empty default so spectators only implement what
/// they care about. Methods take `&self`; spectators that record use
/// interior mutability.
pub trait Spectator {
    /// A fugitive leg completed; `round` is the new round index.
    fn on_round_started(&self, _view: &GameState, _round: usize) {}

    /// A move was applied. Fugitive destinations are already masked.
    fn on_move_made(&self, _view: &GameState, _mv: &Move) {}

    /// Every pursuer has moved since the fugitive last did.
    fn on_rotation_complete(&self, _view: &GameState) {}

    /// The game ended.
    fn on_game_over(&self, _view: &GameState, _winners: &BTreeSet<Colour>) {}
}

/// Ordered list of registered spectators.
///
/// Backed by `im::Vector`, so `snapshot` is O(1) and later registrations
/// never affect a snapshot already taken.
#[derive(Clone, Default)]
pub struct SpectatorBus {
    subscribers: Vector<Rc<dyn Spectator>>,
}

impl SpectatorBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a spectator. Registering the same one twice is an error.
    pub fn register(&mut self, spectator: Rc<dyn Spectator>) -> Result<(), GameError> {
        if self.position(&spectator).is_some() {
            warn!("spectator already registered");
            return Err(GameError::InvalidArgument("spectator already registered"));
        }
        self.subscribers.push_back(spectator);
        Ok(())
    }

    /// Remove a spectator. Removing one that is not registered is an error.
    pub fn unregister(&mut self, spectator: Rc<dyn Spectator>) -> Result<(), GameError> {
        match self.position(&spectator) {
            Some(index) => {
                self.subscribers.remove(index);
                Ok(())
            }
            None => {
                warn!("spectator not registered");
                Err(GameError::InvalidArgument("spectator not registered"))
            }
        }
    }

    #[must_use]
    pub fn contains(&self, spectator: &Rc<dyn Spectator>) -> bool {
        self.position(spectator).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// O(1) copy of the current registration list.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Rc<dyn Spectator>> {
        self.subscribers.clone()
    }

    /// Registered spectators in registration order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Rc<dyn Spectator>> {
        self.subscribers.iter().cloned().collect()
    }

    /// Identity is the allocation, not the value.
    fn position(&self, spectator: &Rc<dyn Spectator>) -> Option<usize> {
        let target = Rc::as_ptr(spectator) as *const ();
        self.subscribers
            .iter()
            .position(|existing| Rc::as_ptr(existing) as *const () == target)
    }
}

impl std::fmt::Debug for SpectatorBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpectatorBus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
