//! Engine construction and setup validation.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use tracing::debug;

use super::Engine;
use crate::board::Board;
use crate::core::{
    Colour, GameSetup, GameState, Participant, PlayerConfig, RoundSchedule, SetupError, Ticket,
    UNREVEALED,
};
use crate::strategy::Strategy;

/// Builder for an [`Engine`].
///
/// ```
/// use pursuit_engine::{Colour, EngineBuilder, FirstMoveStrategy, PlayerConfig};
/// use pursuit_engine::{Board, Ticket, TicketPurse, Transport};
///
/// let board = Board::new()
///     .with_route(1, 2, Transport::Taxi)
///     .with_route(2, 3, Transport::Taxi);
/// let purse = TicketPurse::empty().with(Ticket::Taxi, 4);
///
/// let engine = EngineBuilder::new(board, vec![false, true])
///     .fugitive(PlayerConfig::new(Colour::Black, 1).with_purse(&purse), FirstMoveStrategy)
///     .pursuer(PlayerConfig::new(Colour::Red, 3).with_purse(&purse), FirstMoveStrategy)
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.state().players(), vec![Colour::Black, Colour::Red]);
/// ```
pub struct EngineBuilder {
    board: Arc<Board>,
    rounds: RoundSchedule,
    fugitive: Option<(PlayerConfig, Box<dyn Strategy>)>,
    pursuers: Vec<(PlayerConfig, Box<dyn Strategy>)>,
}

impl EngineBuilder {
    pub fn new(board: impl Into<Arc<Board>>, rounds: impl Into<RoundSchedule>) -> Self {
        Self {
            board: board.into(),
            rounds: rounds.into(),
            fugitive: None,
            pursuers: Vec::new(),
        }
    }

    /// Seat the fugitive. A second call replaces the first.
    pub fn fugitive(mut self, config: PlayerConfig, strategy: impl Strategy + 'static) -> Self {
        self.fugitive = Some((config, Box::new(strategy)));
        self
    }

    /// Seat the next pursuer. Pursuers move in the order they are seated.
    pub fn pursuer(mut self, config: PlayerConfig, strategy: impl Strategy + 'static) -> Self {
        self.pursuers.push((config, Box::new(strategy)));
        self
    }

    pub fn build(self) -> Result<Engine, SetupError> {
        let Some((fugitive, fugitive_strategy)) = self.fugitive else {
            if self.rounds.is_empty() {
                return Err(SetupError::EmptySchedule);
            }
            if self.board.is_empty() {
                return Err(SetupError::EmptyBoard);
            }
            return Err(SetupError::MissingFugitive);
        };

        let mut setup = GameSetup::new(self.rounds, fugitive);
        let mut strategies = vec![fugitive_strategy];
        for (config, strategy) in self.pursuers {
            setup = setup.with_pursuer(config);
            strategies.push(strategy);
        }

        Self::from_setup(self.board, setup, strategies)
    }

    /// Build from plain setup data. `strategies` holds one strategy per
    /// seat, fugitive first.
    pub fn from_setup(
        board: impl Into<Arc<Board>>,
        setup: GameSetup,
        strategies: Vec<Box<dyn Strategy>>,
    ) -> Result<Engine, SetupError> {
        let board = board.into();
        validate_setup(&board, &setup)?;

        let expected = setup.pursuers.len() + 1;
        if strategies.len() != expected {
            return Err(SetupError::StrategyCount {
                expected,
                found: strategies.len(),
            });
        }

        let participants: Vec<Participant> = setup.seats().map(Participant::from_config).collect();
        debug!(
            seats = participants.len(),
            rounds = setup.rounds.len(),
            locations = board.location_count(),
            edges = board.edge_count(),
            "engine built"
        );

        let state = GameState::new(board, setup.rounds, participants);
        Ok(Engine::assemble(state, strategies))
    }
}

/// Check a setup against the board. The first violation found is returned.
pub fn validate_setup(board: &Board, setup: &GameSetup) -> Result<(), SetupError> {
    if setup.rounds.is_empty() {
        return Err(SetupError::EmptySchedule);
    }
    if board.is_empty() {
        return Err(SetupError::EmptyBoard);
    }
    if board.contains(UNREVEALED) {
        return Err(SetupError::ReservedLocation(UNREVEALED));
    }
    if !setup.fugitive.colour.is_fugitive() {
        return Err(SetupError::WrongFugitiveColour {
            expected: Colour::FUGITIVE,
            found: setup.fugitive.colour,
        });
    }
    if setup.pursuers.is_empty() {
        return Err(SetupError::NoPursuers);
    }

    let mut colours = FxHashSet::default();
    let mut locations = FxHashSet::default();

    for (index, seat) in setup.seats().enumerate() {
        let is_pursuer = index > 0;
        if is_pursuer && seat.colour.is_fugitive() {
            return Err(SetupError::PursuerIsFugitive(seat.colour));
        }
        if !locations.insert(seat.location) {
            return Err(SetupError::DuplicateLocation {
                location: seat.location,
            });
        }
        if !colours.insert(seat.colour) {
            return Err(SetupError::DuplicateColour(seat.colour));
        }
        if !board.contains(seat.location) {
            return Err(SetupError::UnknownLocation {
                colour: seat.colour,
                location: seat.location,
            });
        }
        if let Some(ticket) = seat.missing_ticket() {
            return Err(SetupError::MissingTicket {
                colour: seat.colour,
                ticket,
            });
        }
        if is_pursuer {
            for ticket in [Ticket::Secret, Ticket::Double] {
                let count = seat.tickets.get(&ticket).copied().unwrap_or_default();
                if count > 0 {
                    return Err(SetupError::ForbiddenPursuerTicket {
                        colour: seat.colour,
                        ticket,
                        count,
                    });
                }
            }
        }
    }

    // Every ticket ends up in one purse at worst.
    let total: u64 = setup.seats().map(|seat| seat.purse().total()).sum();
    if total > u64::from(u32::MAX) {
        return Err(SetupError::TooManyTickets { total });
    }

    Ok(())
}
