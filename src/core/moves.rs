//! Move representation.
//!
//! A move is a tagged union:
//! - `Pass`: the participant has nowhere to go
//! - `Single`: one ticket, one edge
//! - `Double`: fugitive-only, a double token plus two single legs
//!
//! Moves are plain values. Equality, hashing and ordering are structural,
//! so a move handed back by a strategy is validated by value.

use serde::{Deserialize, Serialize};

use super::colour::Colour;
use super::ticket::Ticket;
use crate::board::LocationId;

/// One leg: a ticket spent to reach a destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SingleMove {
    pub colour: Colour,
    pub ticket: Ticket,
    pub destination: LocationId,
}

impl SingleMove {
    #[must_use]
    pub const fn new(colour: Colour, ticket: Ticket, destination: LocationId) -> Self {
        Self {
            colour,
            ticket,
            destination,
        }
    }

    /// The same leg reporting a different destination.
    #[must_use]
    pub const fn showing(self, destination: LocationId) -> Self {
        Self {
            destination,
            ..self
        }
    }
}

/// Two legs played in one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DoubleMove {
    pub colour: Colour,
    pub first: SingleMove,
    pub second: SingleMove,
}

impl DoubleMove {
    #[must_use]
    pub const fn new(colour: Colour, first: SingleMove, second: SingleMove) -> Self {
        Self {
            colour,
            first,
            second,
        }
    }
}

/// A complete move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Move {
    Pass(Colour),
    Single(SingleMove),
    Double(DoubleMove),
}

impl Move {
    /// Shorthand for a single move.
    #[must_use]
    pub const fn single(colour: Colour, ticket: Ticket, destination: LocationId) -> Self {
        Move::Single(SingleMove::new(colour, ticket, destination))
    }

    /// Shorthand for a double move built from two `(ticket, destination)` legs.
    #[must_use]
    pub const fn double(
        colour: Colour,
        first: (Ticket, LocationId),
        second: (Ticket, LocationId),
    ) -> Self {
        Move::Double(DoubleMove::new(
            colour,
            SingleMove::new(colour, first.0, first.1),
            SingleMove::new(colour, second.0, second.1),
        ))
    }

    /// The colour making this move.
    #[must_use]
    pub const fn colour(&self) -> Colour {
        match self {
            Move::Pass(colour) => *colour,
            Move::Single(single) => single.colour,
            Move::Double(double) => double.colour,
        }
    }

    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Move::Pass(_))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Pass(colour) => write!(f, "{colour} passes"),
            Move::Single(single) => {
                write!(f, "{} {} -> {}", single.colour, single.ticket, single.destination)
            }
            Move::Double(double) => write!(
                f,
                "{} double {} -> {}, {} -> {}",
                double.colour,
                double.first.ticket,
                double.first.destination,
                double.second.ticket,
                double.second.destination
            ),
        }
    }
}

impl From<SingleMove> for Move {
    fn from(single: SingleMove) -> Self {
        Move::Single(single)
    }
}

impl From<DoubleMove> for Move {
    fn from(double: DoubleMove) -> Self {
        Move::Double(double)
    }
}
