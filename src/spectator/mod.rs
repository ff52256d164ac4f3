//! Spectators: observers notified as the game unfolds.
//!
//! A spectator receives four kinds of notification:
//!
//! - `on_round_started`: a fugitive leg completed and a new round began
//! - `on_move_made`: a move was applied (fugitive legs masked)
//! - `on_rotation_complete`: every pursuer answered the fugitive
//! - `on_game_over`: an outcome was decided
//!
//! Registration lives in a [`SpectatorBus`]. Every notification pass
//! iterates over a snapshot of the bus, so the list seen by one pass is
//! fixed even if registrations change afterwards.
//!
//! ## Example Usage
//!
//! ```
//! use std::rc::Rc;
//! use pursuit_engine::spectator::{EventLog, SpectatorBus};
//!
//! let log = Rc::new(EventLog::new());
//! let mut bus = SpectatorBus::new();
//!
//! bus.register(log.clone()).unwrap();
//! assert!(bus.register(log.clone()).is_err());
//! assert_eq!(bus.len(), 1);
//!
//! bus.unregister(log.clone()).unwrap();
//! assert!(bus.is_empty());
//! ```

mod bus;
mod event;

pub use bus::{Spectator, SpectatorBus};
pub use event::{EventLog, GameEvent};
