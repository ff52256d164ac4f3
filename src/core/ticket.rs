//! Tickets, transport kinds and ticket purses.
//!
//! ## Ticket kinds
//!
//! - `Taxi`, `Bus`, `Underground`: pay for an edge of the matching transport.
//! - `Secret`: pays for any edge, and is the only ticket a ferry accepts.
//! - `Double`: fugitive-only token allowing two legs in one turn.
//!
//! ## TicketPurse
//!
//! Fixed-size per-kind counter. Every kind always has an entry, so a purse
//! can never be "missing" a kind once built.

use serde::{Deserialize, Serialize};
use std::ops::Index;

const KINDS: usize = 5;

/// A kind of ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ticket {
    Taxi,
    Bus,
    Underground,
    /// Concealment ticket, usable on any edge.
    Secret,
    /// Double-move token.
    Double,
}

impl Ticket {
    /// Every ticket kind, in purse order.
    pub const ALL: [Ticket; KINDS] = [
        Ticket::Taxi,
        Ticket::Bus,
        Ticket::Underground,
        Ticket::Secret,
        Ticket::Double,
    ];

    /// The mundane kinds that pay for a single transport.
    pub const TRANSPORT: [Ticket; 3] = [Ticket::Taxi, Ticket::Bus, Ticket::Underground];

    /// The ticket that pays for `transport`, if a mundane one exists.
    ///
    /// Ferries have none: only `Secret` pays for them.
    #[must_use]
    pub const fn for_transport(transport: Transport) -> Option<Ticket> {
        match transport {
            Transport::Taxi => Some(Ticket::Taxi),
            Transport::Bus => Some(Ticket::Bus),
            Transport::Underground => Some(Ticket::Underground),
            Transport::Ferry => None,
        }
    }

    /// Is this one of the three mundane transport kinds?
    #[must_use]
    pub const fn is_transport(self) -> bool {
        matches!(self, Ticket::Taxi | Ticket::Bus | Ticket::Underground)
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ticket::Taxi => "taxi",
            Ticket::Bus => "bus",
            Ticket::Underground => "underground",
            Ticket::Secret => "secret",
            Ticket::Double => "double",
        };
        f.write_str(name)
    }
}

/// The transport kind of a board edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    Taxi,
    Bus,
    Underground,
    /// Concealment-only edge.
    Ferry,
}

impl Transport {
    /// Can `ticket` pay for an edge of this transport?
    #[must_use]
    pub const fn accepts(self, ticket: Ticket) -> bool {
        match ticket {
            Ticket::Secret => true,
            Ticket::Double => false,
            other => match Ticket::for_transport(self) {
                Some(required) => required as usize == other as usize,
                None => false,
            },
        }
    }
}

/// Per-kind ticket counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketPurse {
    counts: [u32; KINDS],
}

impl TicketPurse {
    /// Create an empty purse.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            counts: [0; KINDS],
        }
    }

    /// Set the count of one kind (builder pattern).
    #[must_use]
    pub fn with(mut self, ticket: Ticket, count: u32) -> Self {
        self.counts[ticket.slot()] = count;
        self
    }

    /// Number of tickets of a kind.
    #[must_use]
    pub fn count(&self, ticket: Ticket) -> u32 {
        self.counts[ticket.slot()]
    }

    /// Does the purse hold at least one ticket of this kind?
    #[must_use]
    pub fn has(&self, ticket: Ticket) -> bool {
        self.count(ticket) > 0
    }

    /// Add one ticket of a kind.
    ///
    /// Returns `false` (leaving the purse untouched) if the count is already
    /// at its limit.
    pub fn add(&mut self, ticket: Ticket) -> bool {
        let slot = &mut self.counts[ticket.slot()];
        match slot.checked_add(1) {
            Some(count) => {
                *slot = count;
                true
            }
            None => false,
        }
    }

    /// Remove one ticket of a kind.
    ///
    /// Returns `false` (leaving the purse untouched) if none was held.
    pub fn take(&mut self, ticket: Ticket) -> bool {
        let slot = &mut self.counts[ticket.slot()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// A copy of this purse with one ticket of `ticket` notionally spent.
    #[must_use]
    pub fn without_one(&self, ticket: Ticket) -> Self {
        let mut copy = *self;
        copy.take(ticket);
        copy
    }

    /// Holds no tickets of any kind.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Holds none of the three mundane transport kinds.
    #[must_use]
    pub fn lacks_transport(&self) -> bool {
        Ticket::TRANSPORT.iter().all(|&ticket| !self.has(ticket))
    }

    /// Iterate over `(kind, count)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Ticket, u32)> + '_ {
        Ticket::ALL.iter().map(move |&ticket| (ticket, self.count(ticket)))
    }

    /// Total number of tickets held.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| u64::from(count)).sum()
    }
}

impl Index<Ticket> for TicketPurse {
    type Output = u32;

    fn index(&self, ticket: Ticket) -> &Self::Output {
        &self.counts[ticket.slot()]
    }
}
