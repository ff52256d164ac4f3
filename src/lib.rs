//! # pursuit-engine
//!
//! A turn-based, hidden-movement pursuit game engine on a transport graph.
//!
//! One concealed fugitive evades a fixed set of pursuers who move openly.
//! Every move is paid for with a ticket matching the edge's transport, the
//! fugitive's location is only revealed on scheduled rounds, and the game
//! ends on capture, on a trapped fugitive, on stranded pursuers or when the
//! schedule runs out.
//!
//! ## Design Principles
//!
//! 1. **Decisions Are External**: The engine never chooses a move. Each seat
//!    has a `Strategy` that answers a `MoveSet`, and every answer is
//!    validated by value before it is applied.
//!
//! 2. **Concealment Is Structural**: Strategies and spectators only see
//!    `&GameState`, whose queries report the last revealed fugitive
//!    location, never the true one.
//!
//! 3. **Single Thread Of Control**: One synchronous simulation core. The
//!    board is immutable and shared; everything else is owned by the engine.
//!
//! ## Modules
//!
//! - `board`: Locations and transport edges
//! - `core`: Colours, tickets, participants, moves, configuration, state
//! - `rules`: Move generation and win evaluation
//! - `engine`: The turn/round state machine and its builder
//! - `spectator`: Notification bus and a recording spectator
//! - `strategy`: The decision seam plus reference strategies
//! - `games`: The classic game on a demonstration board

pub mod board;
pub mod core;
pub mod engine;
pub mod games;
pub mod rules;
pub mod spectator;
pub mod strategy;

// Re-export commonly used types
pub use crate::board::{Board, Edge, LocationId};

pub use crate::core::{
    Colour, DoubleMove, GameError, GameRng, GameSetup, GameState, Move, Participant, Phase,
    PlayerConfig, RoundSchedule, SetupError, SingleMove, Ticket, TicketPurse, Transport,
    UNREVEALED,
};

pub use crate::engine::{validate_setup, Engine, EngineBuilder, MoveRequest};

pub use crate::rules::{evaluate, legal_moves, MoveSet, Outcome, Side, WinCheck, WinReason};

pub use crate::spectator::{EventLog, GameEvent, Spectator, SpectatorBus};

pub use crate::strategy::{FirstMoveStrategy, RandomStrategy, ScriptedStrategy, Strategy};
