//! Participant configuration and per-participant game state.
//!
//! ## PlayerConfig
//!
//! Construction-time description of one seat: colour, starting location and
//! the ticket allocation. Tickets are a plain map so that a configuration
//! can be incomplete; the engine builder rejects any missing kind.
//!
//! ## Participant
//!
//! The live, engine-owned state of one seat.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::colour::Colour;
use super::ticket::{Ticket, TicketPurse};
use crate::board::LocationId;

/// Configuration for a single participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Seat colour.
    pub colour: Colour,

    /// Starting location.
    pub location: LocationId,

    /// Starting ticket allocation. Every kind must be present, even at zero.
    pub tickets: FxHashMap<Ticket, u32>,
}

impl PlayerConfig {
    /// Create a configuration with no tickets at all.
    pub fn new(colour: Colour, location: LocationId) -> Self {
        Self {
            colour,
            location,
            tickets: FxHashMap::default(),
        }
    }

    /// Set one ticket count (builder pattern).
    #[must_use]
    pub fn with_tickets(mut self, ticket: Ticket, count: u32) -> Self {
        self.tickets.insert(ticket, count);
        self
    }

    /// Copy every kind from a full purse (builder pattern).
    #[must_use]
    pub fn with_purse(mut self, purse: &TicketPurse) -> Self {
        for (ticket, count) in purse.iter() {
            self.tickets.insert(ticket, count);
        }
        self
    }

    /// The first ticket kind with no entry, if any.
    #[must_use]
    pub fn missing_ticket(&self) -> Option<Ticket> {
        Ticket::ALL
            .iter()
            .copied()
            .find(|ticket| !self.tickets.contains_key(ticket))
    }

    /// Build the purse. Missing kinds count as zero.
    #[must_use]
    pub fn purse(&self) -> TicketPurse {
        Ticket::ALL.iter().fold(TicketPurse::empty(), |purse, &ticket| {
            purse.with(ticket, self.tickets.get(&ticket).copied().unwrap_or(0))
        })
    }
}

/// Live state of one participant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    colour: Colour,
    location: LocationId,
    purse: TicketPurse,
}

impl Participant {
    /// Create from a validated configuration.
    #[must_use]
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            colour: config.colour,
            location: config.location,
            purse: config.purse(),
        }
    }

    #[must_use]
    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// True location. For the fugitive this is never exposed through queries.
    #[must_use]
    pub fn location(&self) -> LocationId {
        self.location
    }

    #[must_use]
    pub fn purse(&self) -> &TicketPurse {
        &self.purse
    }

    #[must_use]
    pub fn is_fugitive(&self) -> bool {
        self.colour.is_fugitive()
    }

    pub(crate) fn move_to(&mut self, destination: LocationId) {
        self.location = destination;
    }

    pub(crate) fn spend(&mut self, ticket: Ticket) -> bool {
        self.purse.take(ticket)
    }

    pub(crate) fn receive(&mut self, ticket: Ticket) -> bool {
        self.purse.add(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_ticket_detection() {
        let config = PlayerConfig::new(Colour::Red, 4)
            .with_tickets(Ticket::Taxi, 10)
            .with_tickets(Ticket::Bus, 8);

        assert_eq!(config.missing_ticket(), Some(Ticket::Underground));

        let full = config.with_purse(&TicketPurse::empty());
        assert_eq!(full.missing_ticket(), None);
    }

    #[test]
    fn test_participant_from_config() {
        let config = PlayerConfig::new(Colour::Black, 7)
            .with_purse(&TicketPurse::empty().with(Ticket::Double, 2));
        let mut participant = Participant::from_config(&config);

        assert!(participant.is_fugitive());
        assert_eq!(participant.location(), 7);
        assert!(participant.spend(Ticket::Double));
        assert_eq!(participant.purse().count(Ticket::Double), 1);

        assert!(participant.receive(Ticket::Bus));
        participant.move_to(9);
        assert_eq!(participant.purse().count(Ticket::Bus), 1);
        assert_eq!(participant.location(), 9);
    }

    #[test]
    fn test_player_config_serialization() {
        let config = PlayerConfig::new(Colour::Blue, 13).with_tickets(Ticket::Taxi, 10);
        let json = serde_json::to_string(&config).unwrap();
        let back: PlayerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
