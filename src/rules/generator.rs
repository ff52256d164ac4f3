//! Legal move generation.
//!
//! Pure computation over the board, one participant's state, the pursuer
//! occupancy and the round schedule. Nothing here mutates game state.
//!
//! ## Rules
//!
//! - Each edge out of the mover's location yields a single move per ticket
//!   that can pay for it: the matching transport ticket and/or a secret
//!   ticket. Ferry edges only take secret tickets.
//! - Destinations held by a pursuer are never offered.
//! - The fugitive may chain two legs with a double token when at least two
//!   rounds remain. The second leg is generated from a purse with the first
//!   leg's ticket already spent.
//! - An empty result becomes `{Pass}`.

use std::collections::BTreeSet;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::trace;

use crate::board::{Board, LocationId};
use crate::core::{
    Colour, DoubleMove, Move, Participant, RoundSchedule, SingleMove, Ticket, TicketPurse,
};

/// A non-empty set of structurally distinct legal moves.
///
/// Iteration order is the derived `Move` ordering, so the same position
/// always yields the same sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet {
    colour: Colour,
    moves: BTreeSet<Move>,
}

impl MoveSet {
    fn from_moves(colour: Colour, moves: BTreeSet<Move>) -> Self {
        if moves.is_empty() {
            return Self::pass(colour);
        }
        Self { colour, moves }
    }

    /// The singleton `{Pass(colour)}`.
    #[must_use]
    pub fn pass(colour: Colour) -> Self {
        Self {
            colour,
            moves: BTreeSet::from([Move::Pass(colour)]),
        }
    }

    /// The colour these moves belong to.
    #[must_use]
    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// Is `mv` in the set (by value)?
    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Never true for a generated set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Is the only legal move a pass?
    #[must_use]
    pub fn is_pass_only(&self) -> bool {
        self.moves.len() == 1 && self.moves.iter().all(Move::is_pass)
    }

    /// The first move in iteration order.
    #[must_use]
    pub fn first(&self) -> Option<&Move> {
        self.moves.iter().next()
    }

    /// The first move, or a pass if the set were somehow empty.
    #[must_use]
    pub fn first_move(&self) -> Move {
        self.first().copied().unwrap_or(Move::Pass(self.colour))
    }

    /// The move at `index` in iteration order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Move> {
        self.moves.iter().nth(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// Copy the moves out in iteration order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Move> {
        self.moves.iter().copied().collect()
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = std::collections::btree_set::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Compute the legal moves for `mover`.
///
/// `pursuer_locations` must hold the location of every pursuer other than
/// the mover. `round` is the current 0-based round index.
#[must_use]
pub fn legal_moves(
    board: &Board,
    mover: &Participant,
    pursuer_locations: &FxHashSet<LocationId>,
    rounds: &RoundSchedule,
    round: usize,
) -> MoveSet {
    let colour = mover.colour();
    let purse = mover.purse();
    let firsts = single_moves(board, colour, mover.location(), purse, pursuer_locations);

    let mut moves: BTreeSet<Move> = firsts.iter().copied().map(Move::Single).collect();

    if can_double(mover, rounds, round) {
        for first in &firsts {
            let remaining = purse.without_one(first.ticket);
            for second in single_moves(board, colour, first.destination, &remaining, pursuer_locations) {
                moves.insert(Move::Double(DoubleMove::new(colour, *first, second)));
            }
        }
    }

    trace!(%colour, count = moves.len(), "generated legal moves");
    MoveSet::from_moves(colour, moves)
}

fn can_double(mover: &Participant, rounds: &RoundSchedule, round: usize) -> bool {
    mover.is_fugitive() && mover.purse().has(Ticket::Double) && rounds.remaining_from(round) >= 2
}

/// Every single leg from `from` that `purse` can pay for.
fn single_moves(
    board: &Board,
    colour: Colour,
    from: LocationId,
    purse: &TicketPurse,
    pursuer_locations: &FxHashSet<LocationId>,
) -> SmallVec<[SingleMove; 16]> {
    let mut singles = SmallVec::new();

    for edge in board.edges_from(from) {
        if pursuer_locations.contains(&edge.destination) {
            continue;
        }
        for &ticket in &Ticket::ALL {
            if edge.transport.accepts(ticket) && purse.has(ticket) {
                singles.push(SingleMove::new(colour, ticket, edge.destination));
            }
        }
    }

    singles
}
