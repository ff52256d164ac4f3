//! Error types.
//!
//! - `SetupError`: construction rejected. There is never a partially built
//!   engine.
//! - `GameError`: a runtime call was rejected. Engine state is unchanged.

use thiserror::Error;

use super::colour::Colour;
use super::ticket::Ticket;
use crate::board::LocationId;

/// Why a game could not be constructed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("round schedule is empty")]
    EmptySchedule,
    #[error("board has no locations")]
    EmptyBoard,
    #[error("location {0} is reserved and cannot be on the board")]
    ReservedLocation(LocationId),
    #[error("no fugitive was seated")]
    MissingFugitive,
    #[error("fugitive must be {expected}, got {found}")]
    WrongFugitiveColour { expected: Colour, found: Colour },
    #[error("pursuer cannot use the fugitive colour {0}")]
    PursuerIsFugitive(Colour),
    #[error("at least one pursuer is required")]
    NoPursuers,
    #[error("colour {0} is used by more than one participant")]
    DuplicateColour(Colour),
    #[error("location {location} is the start of more than one participant")]
    DuplicateLocation { location: LocationId },
    #[error("{colour} starts on location {location}, which is not on the board")]
    UnknownLocation { colour: Colour, location: LocationId },
    #[error("{colour} has no entry for {ticket} tickets")]
    MissingTicket { colour: Colour, ticket: Ticket },
    #[error("pursuer {colour} holds {count} {ticket} tickets")]
    ForbiddenPursuerTicket {
        colour: Colour,
        ticket: Ticket,
        count: u32,
    },
    #[error("{total} tickets in play exceed the purse limit")]
    TooManyTickets { total: u64 },
    #[error("expected {expected} strategies, got {found}")]
    StrategyCount { expected: usize, found: usize },
}

/// Why a runtime call was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid move for {colour}: {reason}")]
    InvalidMove { colour: Colour, reason: String },
    #[error("illegal state: {0}")]
    IllegalState(&'static str),
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl GameError {
    pub(crate) fn invalid_move(colour: Colour, reason: impl Into<String>) -> Self {
        GameError::InvalidMove {
            colour,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_error_messages() {
        let err = SetupError::MissingTicket {
            colour: Colour::Red,
            ticket: Ticket::Bus,
        };
        assert_eq!(err.to_string(), "red has no entry for bus tickets");

        let err = SetupError::WrongFugitiveColour {
            expected: Colour::Black,
            found: Colour::Blue,
        };
        assert_eq!(err.to_string(), "fugitive must be black, got blue");
    }

    #[test]
    fn test_game_error_messages() {
        let err = GameError::invalid_move(Colour::Black, "not a legal move");
        assert_eq!(err.to_string(), "invalid move for black: not a legal move");
    }
}
