//! Core engine types: colours, tickets, participants, moves, configuration,
//! state, errors and RNG.
//!
//! Everything here is data. The behaviour that reads it lives in `rules`
//! and the behaviour that mutates it lives in `engine`.

pub mod colour;
pub mod config;
pub mod error;
pub mod moves;
pub mod player;
pub mod rng;
pub mod state;
pub mod ticket;

pub use colour::Colour;
pub use config::{GameSetup, RoundSchedule};
pub use error::{GameError, SetupError};
pub use moves::{DoubleMove, Move, SingleMove};
pub use player::{Participant, PlayerConfig};
pub use rng::GameRng;
pub use state::{GameState, Phase, UNREVEALED};
pub use ticket::{Ticket, TicketPurse, Transport};
