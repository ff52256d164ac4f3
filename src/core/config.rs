//! Game configuration types.
//!
//! Games are configured at construction by providing:
//! - `RoundSchedule`: which rounds reveal the fugitive
//! - `PlayerConfig`: one per seat (see `player`)
//! - `GameSetup`: combines the schedule and the seats
//!
//! All of these are plain serde data so a setup can be stored or shipped as
//! JSON. Validation happens when the engine is built, not here.

use serde::{Deserialize, Serialize};

use super::player::PlayerConfig;

/// Reveal flags, one per round. `true` exposes the fugitive that round.
///
/// The length bounds the game: once that many fugitive legs have been
/// played, the fugitive has survived.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundSchedule(Vec<bool>);

impl RoundSchedule {
    #[must_use]
    pub fn new(reveals: Vec<bool>) -> Self {
        Self(reveals)
    }

    /// A schedule of `length` rounds revealing on the given 1-based rounds.
    ///
    /// ```
    /// use pursuit_engine::core::RoundSchedule;
    ///
    /// let schedule = RoundSchedule::revealing_on(5, &[3, 5]);
    /// assert_eq!(schedule.as_slice(), &[false, false, true, false, true]);
    /// ```
    #[must_use]
    pub fn revealing_on(length: usize, reveal_rounds: &[usize]) -> Self {
        Self(
            (1..=length)
                .map(|round| reveal_rounds.contains(&round))
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Is 0-based `round` a reveal round? Rounds past the end never reveal.
    #[must_use]
    pub fn is_reveal(&self, round: usize) -> bool {
        self.0.get(round).copied().unwrap_or(false)
    }

    /// How many rounds remain from 0-based `round` onwards.
    #[must_use]
    pub fn remaining_from(&self, round: usize) -> usize {
        self.0.len().saturating_sub(round)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl From<Vec<bool>> for RoundSchedule {
    fn from(reveals: Vec<bool>) -> Self {
        Self(reveals)
    }
}

/// Everything needed to seat a game apart from the board and strategies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    /// Reveal schedule.
    pub rounds: RoundSchedule,

    /// The fugitive's seat.
    pub fugitive: PlayerConfig,

    /// Pursuer seats, in turn order.
    pub pursuers: Vec<PlayerConfig>,
}

impl GameSetup {
    /// Create a setup with no pursuers yet.
    pub fn new(rounds: impl Into<RoundSchedule>, fugitive: PlayerConfig) -> Self {
        Self {
            rounds: rounds.into(),
            fugitive,
            pursuers: Vec::new(),
        }
    }

    /// Add a pursuer seat (builder pattern).
    #[must_use]
    pub fn with_pursuer(mut self, pursuer: PlayerConfig) -> Self {
        self.pursuers.push(pursuer);
        self
    }

    /// All seats in turn order, fugitive first.
    pub fn seats(&self) -> impl Iterator<Item = &PlayerConfig> {
        std::iter::once(&self.fugitive).chain(self.pursuers.iter())
    }
}
