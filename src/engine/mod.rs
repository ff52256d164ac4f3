//! The game engine: turn rotation, move validation and effects.
//!
//! ## Turn cycle
//!
//! ```text
//! start_rotation ─▶ request_move ─▶ Strategy::choose_move ─▶ accept_move
//!                                                              │
//!          ┌───────────── next seat is a pursuer ◀─────────────┤
//!          ▼                                                   │
//!   request_move ─▶ choose_move ─▶ accept_move ─ ... ─▶ rotation complete
//!                                                        or game over
//! ```
//!
//! The legal set travels inside a [`MoveRequest`]. The engine itself only
//! keeps a turn serial, bumped on every accepted move, so a request from an
//! earlier turn is recognised as stale.
//!
//! ## Effects
//!
//! All effects live in one `apply_move` that matches on the move's tag:
//! - pursuer single: spend the ticket, move, hand the ticket to the fugitive
//! - fugitive single: spend, move, complete the round (maybe revealing)
//! - double: spend the token, then play both legs as singles
//! - pass: nothing but the notification

mod builder;

pub use builder::{validate_setup, EngineBuilder};

use std::collections::BTreeSet;
use std::rc::Rc;

use tracing::{debug, info, trace, warn};

use crate::board::LocationId;
use crate::core::{
    Colour, DoubleMove, GameError, GameState, Move, Phase, SingleMove, Ticket,
};
use crate::rules::{evaluate, MoveSet, WinCheck};
use crate::spectator::{Spectator, SpectatorBus};
use crate::strategy::Strategy;

/// The legal moves offered to one seat for one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    colour: Colour,
    location: LocationId,
    moves: MoveSet,
    serial: u64,
}

impl MoveRequest {
    /// The seat that must answer.
    #[must_use]
    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// The seat's own true location.
    #[must_use]
    pub fn location(&self) -> LocationId {
        self.location
    }

    #[must_use]
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }
}

/// Synchronous game engine.
///
/// Owns the game state, one strategy per seat and the spectator bus.
pub struct Engine {
    state: GameState,
    strategies: Vec<Box<dyn Strategy>>,
    spectators: SpectatorBus,
    serial: u64,
}

impl Engine {
    /// Assemble an engine from a validated state. Used by the builder.
    pub(crate) fn assemble(mut state: GameState, strategies: Vec<Box<dyn Strategy>>) -> Self {
        debug_assert_eq!(state.participants().len(), strategies.len());

        let outcome = evaluate(&WinCheck {
            participants: state.participants(),
            fugitive_moves: None,
            round: state.current_round(),
            schedule_len: state.rounds().len(),
        });
        if let Some(outcome) = outcome {
            info!(reason = %outcome.reason, winners = ?outcome.winners, "game decided at setup");
            state.finish(outcome);
        }

        Self {
            state,
            strategies,
            spectators: SpectatorBus::new(),
            serial: 0,
        }
    }

    /// Read-only view of the game.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    // === Spectators ===

    pub fn register_spectator(&mut self, spectator: Rc<dyn Spectator>) -> Result<(), GameError> {
        self.spectators.register(spectator)
    }

    pub fn unregister_spectator(&mut self, spectator: Rc<dyn Spectator>) -> Result<(), GameError> {
        self.spectators.unregister(spectator)
    }

    /// Registered spectators in registration order.
    #[must_use]
    pub fn spectators(&self) -> Vec<Rc<dyn Spectator>> {
        self.spectators.to_vec()
    }

    // === Turn cycle ===

    /// Play the current seat's turn, and every pursuer turn after it, until
    /// the rotation completes or the game ends.
    ///
    /// Fails with `IllegalState` once the game is over. A strategy that
    /// answers with an illegal move stops the rotation with `InvalidMove`;
    /// calling `start_rotation` again asks the same seat again.
    pub fn start_rotation(&mut self) -> Result<Phase, GameError> {
        let request = self.request_move()?;
        let chosen = self.consult(&request);
        self.accept_move(&request, chosen)
    }

    /// Compute the legal moves for the seat at the turn pointer without
    /// consulting its strategy.
    pub fn request_move(&mut self) -> Result<MoveRequest, GameError> {
        if self.state.is_game_over() {
            return Err(GameError::IllegalState("game is over"));
        }
        if self.state.phase() == Phase::RotationComplete {
            self.state.set_phase(Phase::AwaitingFugitiveMove);
        }

        let turn = self.state.turn();
        let participant = self.state.participant_at(turn);
        Ok(MoveRequest {
            colour: participant.colour(),
            location: participant.location(),
            moves: self.state.legal_moves_at(turn),
            serial: self.serial,
        })
    }

    /// Apply the answer to `request`, then keep the rotation going.
    ///
    /// Fails with `InvalidMove`, changing nothing, if `request` is not the
    /// current one or `chosen` is not among its moves.
    pub fn accept_move(&mut self, request: &MoveRequest, chosen: Move) -> Result<Phase, GameError> {
        self.validate(request, &chosen)?;
        self.play(chosen);
        self.continue_rotation()
    }

    fn continue_rotation(&mut self) -> Result<Phase, GameError> {
        loop {
            match self.state.phase() {
                Phase::AwaitingPursuerMove(_) => {
                    let request = self.request_move()?;
                    let chosen = self.consult(&request);
                    self.validate(&request, &chosen)?;
                    self.play(chosen);
                }
                Phase::RotationComplete => {
                    debug!(round = self.state.current_round(), "rotation complete");
                    self.notify(|spectator, view| spectator.on_rotation_complete(view));
                    return Ok(Phase::RotationComplete);
                }
                Phase::GameOver => {
                    let winners = self.state.winning_players();
                    self.notify(|spectator, view| spectator.on_game_over(view, &winners));
                    return Ok(Phase::GameOver);
                }
                phase @ Phase::AwaitingFugitiveMove => return Ok(phase),
            }
        }
    }

    fn consult(&mut self, request: &MoveRequest) -> Move {
        let turn = self.state.turn();
        let strategy = &mut self.strategies[turn];
        strategy.choose_move(&self.state, request.location, &request.moves)
    }

    fn validate(&self, request: &MoveRequest, chosen: &Move) -> Result<(), GameError> {
        let reason = if self.state.is_game_over() || request.serial != self.serial {
            Some("move request is stale")
        } else if request.colour != self.state.current_player() {
            Some("not this colour's turn")
        } else if chosen.colour() != request.colour {
            Some("move belongs to another colour")
        } else if !request.moves.contains(chosen) {
            Some("move is not legal")
        } else {
            None
        };

        match reason {
            Some(reason) => {
                warn!(colour = %request.colour, mv = %chosen, reason, "rejected move");
                Err(GameError::invalid_move(request.colour, reason))
            }
            None => Ok(()),
        }
    }

    /// Advance the pointer, apply the move, then decide the game or the
    /// next phase.
    fn play(&mut self, chosen: Move) {
        let mover = self.state.turn();
        self.serial += 1;
        self.state.advance_turn();
        self.apply_move(mover, chosen);

        let next = self.state.turn();
        let rotation_complete = next == 0;
        let fugitive_moves = rotation_complete.then(|| self.state.legal_moves_at(0));

        let outcome = evaluate(&WinCheck {
            participants: self.state.participants(),
            fugitive_moves: fugitive_moves.as_ref(),
            round: self.state.current_round(),
            schedule_len: self.state.rounds().len(),
        });

        match outcome {
            Some(outcome) => {
                info!(reason = %outcome.reason, winners = ?outcome.winners, "game over");
                self.state.finish(outcome);
            }
            None if rotation_complete => self.state.set_phase(Phase::RotationComplete),
            None => self.state.set_phase(Phase::AwaitingPursuerMove(next)),
        }
    }

    fn apply_move(&mut self, mover: usize, chosen: Move) {
        match chosen {
            Move::Pass(colour) => {
                debug!(%colour, "pass");
                self.notify(|spectator, view| spectator.on_move_made(view, &chosen));
            }
            Move::Single(single) if mover == 0 => {
                let shown = self.play_fugitive_leg(single);
                self.announce_round();
                self.notify(|spectator, view| spectator.on_move_made(view, &Move::Single(shown)));
            }
            Move::Single(single) => {
                self.play_pursuer_leg(mover, single);
                self.notify(|spectator, view| spectator.on_move_made(view, &chosen));
            }
            Move::Double(double) => self.play_double(double),
        }
    }

    fn play_pursuer_leg(&mut self, mover: usize, single: SingleMove) {
        let pursuer = self.state.participant_at_mut(mover);
        let spent = pursuer.spend(single.ticket);
        debug_assert!(spent, "validated move spent a missing ticket");
        pursuer.move_to(single.destination);
        let received = self.state.participant_at_mut(0).receive(single.ticket);
        debug_assert!(received, "validated setup overflowed the fugitive's purse");

        debug!(colour = %single.colour, ticket = %single.ticket, to = single.destination, "pursuer moved");
    }

    /// Play one fugitive leg and return it as spectators may see it.
    fn play_fugitive_leg(&mut self, leg: SingleMove) -> SingleMove {
        let fugitive = self.state.participant_at_mut(0);
        let spent = fugitive.spend(leg.ticket);
        debug_assert!(spent, "validated move spent a missing ticket");
        fugitive.move_to(leg.destination);
        self.state.complete_round();

        trace!(to = leg.destination, "fugitive true location");
        debug!(ticket = %leg.ticket, shown = self.state.revealed(), "fugitive moved");
        leg.showing(self.state.revealed())
    }

    fn play_double(&mut self, double: DoubleMove) {
        let fugitive = self.state.participant_at_mut(0);
        let spent = fugitive.spend(Ticket::Double);
        debug_assert!(spent, "validated double without a token");

        let masked = self.mask_double(&double);
        self.notify(|spectator, view| spectator.on_move_made(view, &Move::Double(masked)));

        for leg in [double.first, double.second] {
            let shown = self.play_fugitive_leg(leg);
            self.announce_round();
            self.notify(|spectator, view| spectator.on_move_made(view, &Move::Single(shown)));
        }
    }

    /// Each leg of a double is judged against its own round's reveal flag.
    fn mask_double(&self, double: &DoubleMove) -> DoubleMove {
        let rounds = self.state.rounds();
        let round = self.state.current_round();

        let first = if rounds.is_reveal(round) {
            double.first.destination
        } else {
            self.state.revealed()
        };
        let second = if rounds.is_reveal(round + 1) {
            double.second.destination
        } else {
            first
        };

        DoubleMove::new(
            double.colour,
            double.first.showing(first),
            double.second.showing(second),
        )
    }

    fn announce_round(&self) {
        let round = self.state.current_round();
        debug!(round, "round started");
        self.notify(|spectator, view| spectator.on_round_started(view, round));
    }

    /// Notify every spectator registered when the pass begins.
    fn notify(&self, deliver: impl Fn(&dyn Spectator, &GameState)) {
        let snapshot = self.spectators.snapshot();
        for spectator in snapshot.iter() {
            deliver(spectator.as_ref(), &self.state);
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("state", &self.state)
            .field("strategies", &self.strategies.len())
            .field("spectators", &self.spectators)
            .field("serial", &self.serial)
            .finish()
    }
}

impl Engine {
    /// Play whole rotations until the game ends or `max_rotations` have been
    /// played. Returns the winners, empty if the limit was hit first.
    pub fn run(&mut self, max_rotations: usize) -> Result<BTreeSet<Colour>, GameError> {
        for _ in 0..max_rotations {
            if self.start_rotation()? == Phase::GameOver {
                break;
            }
        }
        Ok(self.state.winning_players())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::{PlayerConfig, TicketPurse, Transport};
    use crate::strategy::{FirstMoveStrategy, ScriptedStrategy};

    /// A taxi ring with bus chords across it.
    fn ring_board() -> Board {
        let mut board = Board::new();
        for (a, b) in [(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 1)] {
            board.add_route(a, b, Transport::Taxi);
        }
        for (a, b) in [(1, 4), (2, 5), (3, 6)] {
            board.add_route(a, b, Transport::Bus);
        }
        board
    }

    fn purse(taxi: u32) -> TicketPurse {
        TicketPurse::empty().with(Ticket::Taxi, taxi)
    }

    fn fugitive_purse() -> TicketPurse {
        purse(5).with(Ticket::Bus, 5)
    }

    #[test]
    fn test_request_then_accept() {
        let mut engine = EngineBuilder::new(ring_board(), vec![false, false, false])
            .fugitive(PlayerConfig::new(Colour::Black, 4).with_purse(&fugitive_purse()), FirstMoveStrategy)
            .pursuer(PlayerConfig::new(Colour::Red, 1).with_purse(&purse(5)), FirstMoveStrategy)
            .build()
            .unwrap();

        let request = engine.request_move().unwrap();
        assert_eq!(request.colour(), Colour::Black);
        assert_eq!(request.location(), 4);
        // The bus to 1 is blocked by the pursuer.
        assert_eq!(request.moves().len(), 2);

        let phase = engine
            .accept_move(&request, Move::single(Colour::Black, Ticket::Taxi, 5))
            .unwrap();

        // The pursuer's strategy ran straight after the fugitive.
        assert_eq!(phase, Phase::RotationComplete);
        assert_eq!(engine.state().player_location(Colour::Red), Some(2));
        assert_eq!(engine.state().current_round(), 1);
    }

    #[test]
    fn test_stale_request_rejected() {
        let mut engine = EngineBuilder::new(ring_board(), vec![false, false, false])
            .fugitive(PlayerConfig::new(Colour::Black, 4).with_purse(&fugitive_purse()), FirstMoveStrategy)
            .pursuer(PlayerConfig::new(Colour::Red, 1).with_purse(&purse(5)), FirstMoveStrategy)
            .build()
            .unwrap();

        let request = engine.request_move().unwrap();
        let chosen = Move::single(Colour::Black, Ticket::Taxi, 5);
        engine.accept_move(&request, chosen).unwrap();

        let err = engine.accept_move(&request, chosen).unwrap_err();
        assert!(matches!(err, GameError::InvalidMove { colour: Colour::Black, .. }));
        assert_eq!(engine.state().current_round(), 1);
    }

    #[test]
    fn test_scripted_pursuer_illegal_answer_stops_rotation() {
        let mut engine = EngineBuilder::new(ring_board(), vec![false, false, false])
            .fugitive(PlayerConfig::new(Colour::Black, 4).with_purse(&fugitive_purse()), FirstMoveStrategy)
            .pursuer(
                PlayerConfig::new(Colour::Red, 1).with_purse(&purse(5)),
                ScriptedStrategy::new([Move::single(Colour::Red, Ticket::Bus, 2)]),
            )
            .build()
            .unwrap();

        let err = engine.start_rotation().unwrap_err();
        assert!(matches!(err, GameError::InvalidMove { colour: Colour::Red, .. }));
        assert_eq!(engine.state().phase(), Phase::AwaitingPursuerMove(1));
        assert_eq!(engine.state().current_player(), Colour::Red);

        // Asking again resumes with the pursuer; the script is exhausted so it
        // falls back to a legal move.
        assert_eq!(engine.start_rotation().unwrap(), Phase::RotationComplete);
        assert_eq!(engine.state().player_location(Colour::Red), Some(2));
    }
}
