//! The classic pursuit game on a small demonstration board.
//!
//! A compact board that exercises every rule of the engine:
//! - A taxi ring of twenty locations with a few taxi shortcuts
//! - Bus and underground lines across the ring
//! - One ferry crossing, usable only with a secret ticket
//!
//! The reveal schedule and ticket allocations are the classic ones: 24
//! rounds revealing on rounds 3, 8, 13, 18 and 24, and up to five pursuers.

mod game;

pub use game::{
    classic_board, classic_schedule, fugitive_tickets, pursuer_tickets, ClassicGameBuilder,
    FUGITIVE_STARTS, PURSUER_STARTS,
};
