//! The board: location ids joined by transport-typed edges.
//!
//! A board is built once, then shared read-only (`Arc<Board>`) by the
//! engine, the move generator and every query.

pub mod graph;

pub use graph::{Board, Edge, LocationId};
pub use crate::core::Transport;
