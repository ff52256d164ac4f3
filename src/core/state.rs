//! Game state and the read-only query surface.
//!
//! ## GameState
//!
//! Everything the engine mutates between turns:
//! - The shared board and round schedule
//! - Participants, fugitive first, pursuers in seating order
//! - Round index, turn pointer, phase
//! - The fugitive's last revealed location
//! - The outcome once decided
//!
//! Strategies and spectators only ever see `&GameState`. Its public methods
//! never leak the fugitive's true location: queries report the last
//! revealed value instead.

use std::collections::BTreeSet;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::colour::Colour;
use super::config::RoundSchedule;
use super::player::Participant;
use super::ticket::{Ticket, TicketPurse};
use crate::board::{Board, LocationId};
use crate::rules::{legal_moves, MoveSet, Outcome};

/// The fugitive's revealed location before any reveal round has been played.
pub const UNREVEALED: LocationId = 0;

/// Where the engine is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The fugitive is next to move.
    AwaitingFugitiveMove,
    /// The pursuer at this index of `players()` is next to move.
    AwaitingPursuerMove(usize),
    /// Every pursuer has answered the fugitive's last move.
    RotationComplete,
    /// An outcome has been decided.
    GameOver,
}

/// Complete game state, owned by the engine.
///
/// `Debug` output follows the query surface: the fugitive is shown at the
/// last revealed location.
#[derive(Clone)]
pub struct GameState {
    board: Arc<Board>,
    rounds: RoundSchedule,
    participants: Vec<Participant>,
    round: usize,
    turn: usize,
    revealed: LocationId,
    phase: Phase,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Create the initial state. `participants` must be validated and start
    /// with the fugitive.
    pub(crate) fn new(board: Arc<Board>, rounds: RoundSchedule, participants: Vec<Participant>) -> Self {
        debug_assert!(participants.first().is_some_and(Participant::is_fugitive));
        Self {
            board,
            rounds,
            participants,
            round: 0,
            turn: 0,
            revealed: UNREVEALED,
            phase: Phase::AwaitingFugitiveMove,
            outcome: None,
        }
    }

    // === Queries ===

    /// Colours in turn order, fugitive first.
    #[must_use]
    pub fn players(&self) -> Vec<Colour> {
        self.participants.iter().map(Participant::colour).collect()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Colour {
        self.participants[self.turn].colour()
    }

    /// Last known location of a colour.
    ///
    /// Pursuers report their true location. The fugitive reports the last
    /// revealed location (`UNREVEALED` until the first reveal round).
    /// `None` if the colour is not playing.
    #[must_use]
    pub fn player_location(&self, colour: Colour) -> Option<LocationId> {
        let participant = self.participant(colour)?;
        if participant.is_fugitive() {
            Some(self.revealed)
        } else {
            Some(participant.location())
        }
    }

    /// Remaining tickets of a kind. `None` if the colour is not playing.
    #[must_use]
    pub fn player_tickets(&self, colour: Colour, ticket: Ticket) -> Option<u32> {
        self.participant(colour)
            .map(|participant| participant.purse().count(ticket))
    }

    /// Current 0-based round index.
    #[must_use]
    pub fn current_round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Winning colours. Empty while the game is running.
    #[must_use]
    pub fn winning_players(&self) -> BTreeSet<Colour> {
        self.outcome
            .as_ref()
            .map(|outcome| outcome.winners.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn rounds(&self) -> &RoundSchedule {
        &self.rounds
    }

    /// Shared handle to the board.
    #[must_use]
    pub fn board(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    // === Engine internals ===

    pub(crate) fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub(crate) fn participant_at(&self, index: usize) -> &Participant {
        &self.participants[index]
    }

    pub(crate) fn participant_at_mut(&mut self, index: usize) -> &mut Participant {
        &mut self.participants[index]
    }

    fn participant(&self, colour: Colour) -> Option<&Participant> {
        self.participants.iter().find(|p| p.colour() == colour)
    }

    pub(crate) fn turn(&self) -> usize {
        self.turn
    }

    pub(crate) fn revealed(&self) -> LocationId {
        self.revealed
    }

    /// Move the turn pointer on, wrapping to the fugitive after the last
    /// pursuer.
    pub(crate) fn advance_turn(&mut self) {
        self.turn = (self.turn + 1) % self.participants.len();
    }

    /// Mark the start of a new round, revealing the fugitive if the round
    /// being completed is a reveal round.
    pub(crate) fn complete_round(&mut self) {
        if self.rounds.is_reveal(self.round) {
            self.revealed = self.participants[0].location();
        }
        self.round += 1;
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        debug_assert!(self.outcome.is_none(), "phase changed after game over");
        self.phase = phase;
    }

    /// Record the outcome. The first outcome recorded is final.
    pub(crate) fn finish(&mut self, outcome: Outcome) {
        if self.outcome.is_none() {
            self.outcome = Some(outcome);
            self.phase = Phase::GameOver;
        }
    }

    /// Legal moves for the participant at `index`.
    pub(crate) fn legal_moves_at(&self, index: usize) -> MoveSet {
        let pursuer_locations: FxHashSet<LocationId> = self
            .participants
            .iter()
            .enumerate()
            .skip(1)
            .filter(|&(i, _)| i != index)
            .map(|(_, p)| p.location())
            .collect();

        legal_moves(
            &self.board,
            &self.participants[index],
            &pursuer_locations,
            &self.rounds,
            self.round,
        )
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let seats: Vec<(Colour, LocationId, &TicketPurse)> = self
            .participants
            .iter()
            .map(|p| {
                let location = if p.is_fugitive() { self.revealed } else { p.location() };
                (p.colour(), location, p.purse())
            })
            .collect();
        f.debug_struct("GameState")
            .field("locations", &self.board.location_count())
            .field("rounds", &self.rounds)
            .field("seats", &seats)
            .field("round", &self.round)
            .field("turn", &self.turn)
            .field("revealed", &self.revealed)
            .field("phase", &self.phase)
            .field("outcome", &self.outcome)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerConfig, Transport};

    fn state() -> GameState {
        let board = Board::new()
            .with_route(1, 2, Transport::Taxi)
            .with_route(2, 3, Transport::Taxi);
        let purse = TicketPurse::empty().with(Ticket::Taxi, 3);
        let participants = vec![
            Participant::from_config(&PlayerConfig::new(Colour::Black, 1).with_purse(&purse)),
            Participant::from_config(&PlayerConfig::new(Colour::Red, 3).with_purse(&purse)),
        ];
        GameState::new(Arc::new(board), RoundSchedule::new(vec![true, false]), participants)
    }

    #[test]
    fn test_initial_state() {
        let state = state();

        assert_eq!(state.players(), vec![Colour::Black, Colour::Red]);
        assert_eq!(state.current_player(), Colour::Black);
        assert_eq!(state.current_round(), 0);
        assert_eq!(state.phase(), Phase::AwaitingFugitiveMove);
        assert!(!state.is_game_over());
        assert!(state.winning_players().is_empty());
    }

    #[test]
    fn test_fugitive_location_is_concealed() {
        let state = state();

        assert_eq!(state.player_location(Colour::Black), Some(UNREVEALED));
        assert_eq!(state.player_location(Colour::Red), Some(3));
        assert_eq!(state.player_location(Colour::Yellow), None);
    }

    #[test]
    fn test_debug_output_conceals_fugitive() {
        let mut state = state();
        state.participant_at_mut(0).move_to(2);

        let dump = format!("{state:?}");
        assert!(dump.contains("(Black, 0,"));
        assert!(dump.contains("(Red, 3,"));
        assert!(!dump.contains("(Black, 2,"));
    }

    #[test]
    fn test_ticket_queries() {
        let state = state();

        assert_eq!(state.player_tickets(Colour::Red, Ticket::Taxi), Some(3));
        assert_eq!(state.player_tickets(Colour::Red, Ticket::Bus), Some(0));
        assert_eq!(state.player_tickets(Colour::Green, Ticket::Taxi), None);
    }

    #[test]
    fn test_turn_pointer_wraps() {
        let mut state = state();

        state.advance_turn();
        assert_eq!(state.current_player(), Colour::Red);
        state.advance_turn();
        assert_eq!(state.current_player(), Colour::Black);
    }

    #[test]
    fn test_complete_round_reveals_on_flagged_rounds() {
        let mut state = state();

        state.participant_at_mut(0).move_to(2);
        state.complete_round();
        assert_eq!(state.current_round(), 1);
        assert_eq!(state.player_location(Colour::Black), Some(2));

        state.participant_at_mut(0).move_to(1);
        state.complete_round();
        assert_eq!(state.current_round(), 2);
        assert_eq!(state.player_location(Colour::Black), Some(2));
    }

    #[test]
    fn test_legal_moves_respect_other_pursuers() {
        let state = state();

        // Only 1 -> 2 leaves the fugitive's location.
        let moves = state.legal_moves_at(0);
        assert_eq!(moves.len(), 1);

        // The pursuer may step onto the fugitive.
        let pursuer_moves = state.legal_moves_at(1);
        assert_eq!(pursuer_moves.len(), 1);
    }
}
