//! Win evaluation.
//!
//! Rules are checked in a fixed order and the first that holds decides the
//! game:
//!
//! 1. `Capture`: a pursuer stands on the fugitive's true location.
//! 2. `FugitiveStuck`: a rotation just completed, the fugitive can only
//!    pass and holds no tickets at all.
//! 3. `FugitiveCornered`: a rotation just completed, the fugitive has
//!    exactly one legal move and a non-empty purse.
//! 4. `RoundsExhausted`: a rotation just completed and every round of the
//!    schedule has been played.
//! 5. `PursuersStranded`: no pursuer holds a taxi, bus or underground
//!    ticket. Checked at any point of the rotation.
//!
//! Rules 2 and 3 overlap on pass-only positions. The order above is what
//! decides those positions; do not merge them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::{Colour, Participant};

use super::generator::MoveSet;

/// The side that won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Fugitive,
    Pursuers,
}

/// Which rule ended the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    Capture,
    FugitiveStuck,
    FugitiveCornered,
    RoundsExhausted,
    PursuersStranded,
}

impl WinReason {
    /// The side this rule awards the game to.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            WinReason::Capture | WinReason::FugitiveStuck | WinReason::FugitiveCornered => {
                Side::Pursuers
            }
            WinReason::RoundsExhausted | WinReason::PursuersStranded => Side::Fugitive,
        }
    }
}

impl std::fmt::Display for WinReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            WinReason::Capture => "fugitive captured",
            WinReason::FugitiveStuck => "fugitive cannot move",
            WinReason::FugitiveCornered => "fugitive cornered",
            WinReason::RoundsExhausted => "fugitive survived every round",
            WinReason::PursuersStranded => "pursuers out of transport tickets",
        };
        f.write_str(text)
    }
}

/// A decided game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub reason: WinReason,
    pub winners: BTreeSet<Colour>,
}

impl Outcome {
    fn new(reason: WinReason, participants: &[Participant]) -> Self {
        let winners = participants
            .iter()
            .map(Participant::colour)
            .filter(|colour| match reason.side() {
                Side::Fugitive => colour.is_fugitive(),
                Side::Pursuers => colour.is_pursuer(),
            })
            .collect();
        Self { reason, winners }
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.reason.side()
    }

    #[must_use]
    pub fn is_winner(&self, colour: Colour) -> bool {
        self.winners.contains(&colour)
    }
}

/// Everything the evaluator looks at.
#[derive(Clone, Copy, Debug)]
pub struct WinCheck<'a> {
    /// All participants, fugitive first.
    pub participants: &'a [Participant],

    /// The fugitive's legal moves, present only when a pursuer rotation has
    /// just completed.
    pub fugitive_moves: Option<&'a MoveSet>,

    /// Current 0-based round index.
    pub round: usize,

    /// Length of the round schedule.
    pub schedule_len: usize,
}

/// Decide whether the game is over.
#[must_use]
pub fn evaluate(check: &WinCheck<'_>) -> Option<Outcome> {
    let (fugitive, pursuers) = check.participants.split_first()?;

    let reason = if pursuers.iter().any(|p| p.location() == fugitive.location()) {
        Some(WinReason::Capture)
    } else if let Some(moves) = check.fugitive_moves {
        if moves.is_pass_only() && fugitive.purse().is_empty() {
            Some(WinReason::FugitiveStuck)
        } else if moves.len() == 1 && !fugitive.purse().is_empty() {
            Some(WinReason::FugitiveCornered)
        } else if check.round >= check.schedule_len {
            Some(WinReason::RoundsExhausted)
        } else {
            None
        }
    } else {
        None
    };

    reason
        .or_else(|| {
            pursuers
                .iter()
                .all(|p| p.purse().lacks_transport())
                .then_some(WinReason::PursuersStranded)
        })
        .map(|reason| Outcome::new(reason, check.participants))
}
