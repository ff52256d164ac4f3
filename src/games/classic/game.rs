//! Classic game presets and builder.

use crate::board::{Board, LocationId};
use crate::core::{
    Colour, GameRng, GameSetup, PlayerConfig, RoundSchedule, SetupError, Ticket, TicketPurse,
    Transport,
};
use crate::engine::{Engine, EngineBuilder};
use crate::strategy::{RandomStrategy, Strategy};

const ROUNDS: usize = 24;
const REVEAL_ROUNDS: [usize; 5] = [3, 8, 13, 18, 24];

/// Locations the fugitive may start on.
pub const FUGITIVE_STARTS: [LocationId; 5] = [4, 8, 12, 16, 20];

/// Locations pursuers may start on.
pub const PURSUER_STARTS: [LocationId; 7] = [1, 3, 6, 9, 11, 14, 18];

const TAXI_SHORTCUTS: [(LocationId, LocationId); 5] = [(2, 8), (4, 14), (6, 16), (10, 18), (12, 20)];
const BUS_LINES: [(LocationId, LocationId); 7] =
    [(1, 5), (5, 9), (9, 13), (13, 17), (17, 1), (3, 15), (7, 19)];
const UNDERGROUND_LINES: [(LocationId, LocationId); 3] = [(1, 9), (9, 17), (5, 13)];
const FERRY_CROSSINGS: [(LocationId, LocationId); 1] = [(10, 20)];

/// The demonstration board: locations 1 to 20.
#[must_use]
pub fn classic_board() -> Board {
    let mut board = Board::new();

    for location in 1..=20 {
        let next = location % 20 + 1;
        board.add_route(location, next, Transport::Taxi);
    }

    let lines = [
        (Transport::Taxi, &TAXI_SHORTCUTS[..]),
        (Transport::Bus, &BUS_LINES[..]),
        (Transport::Underground, &UNDERGROUND_LINES[..]),
        (Transport::Ferry, &FERRY_CROSSINGS[..]),
    ];
    for (transport, routes) in lines {
        for &(a, b) in routes {
            board.add_route(a, b, transport);
        }
    }

    board
}

/// 24 rounds, revealing on rounds 3, 8, 13, 18 and 24.
#[must_use]
pub fn classic_schedule() -> RoundSchedule {
    RoundSchedule::revealing_on(ROUNDS, &REVEAL_ROUNDS)
}

/// The fugitive's allocation: one secret ticket per pursuer.
#[must_use]
pub fn fugitive_tickets(pursuer_count: usize) -> TicketPurse {
    let secrets = u32::try_from(pursuer_count).unwrap_or(u32::MAX);
    TicketPurse::empty()
        .with(Ticket::Taxi, 4)
        .with(Ticket::Bus, 3)
        .with(Ticket::Underground, 3)
        .with(Ticket::Secret, secrets)
        .with(Ticket::Double, 2)
}

/// Each pursuer's allocation.
#[must_use]
pub fn pursuer_tickets() -> TicketPurse {
    TicketPurse::empty()
        .with(Ticket::Taxi, 10)
        .with(Ticket::Bus, 8)
        .with(Ticket::Underground, 4)
}

/// Builder for a classic game.
///
/// Start locations are drawn from [`FUGITIVE_STARTS`] and
/// [`PURSUER_STARTS`] with a seeded shuffle, so one seed always seats the
/// same game.
#[derive(Clone, Debug)]
pub struct ClassicGameBuilder {
    pursuer_count: usize,
    seed: u64,
}

impl Default for ClassicGameBuilder {
    fn default() -> Self {
        Self {
            pursuer_count: Colour::PURSUERS.len(),
            seed: 0,
        }
    }
}

impl ClassicGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pursuers. Seats beyond the five pursuer colours are
    /// dropped; zero pursuers fails at build time.
    pub fn pursuers(mut self, count: usize) -> Self {
        self.pursuer_count = count.min(Colour::PURSUERS.len());
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The seating this builder would produce, without strategies.
    #[must_use]
    pub fn setup(&self) -> GameSetup {
        let mut rng = GameRng::new(self.seed);
        self.seat(&mut rng)
    }

    /// Build with a strategy per seat, fugitive first. `strategy_for`
    /// receives each colour and a forked RNG stream.
    pub fn build_with<F>(self, mut strategy_for: F) -> Result<Engine, SetupError>
    where
        F: FnMut(Colour, GameRng) -> Box<dyn Strategy>,
    {
        let mut rng = GameRng::new(self.seed);
        let setup = self.seat(&mut rng);

        let strategies = setup
            .seats()
            .map(|seat| strategy_for(seat.colour, rng.fork()))
            .collect();

        EngineBuilder::from_setup(classic_board(), setup, strategies)
    }

    /// Build with a seeded [`RandomStrategy`] on every seat.
    pub fn build_random(self) -> Result<Engine, SetupError> {
        self.build_with(|_, rng| Box::new(RandomStrategy::from_rng(rng)))
    }

    fn seat(&self, rng: &mut GameRng) -> GameSetup {
        let mut fugitive_starts = FUGITIVE_STARTS;
        let mut pursuer_starts = PURSUER_STARTS;
        rng.shuffle(&mut fugitive_starts);
        rng.shuffle(&mut pursuer_starts);

        let fugitive = PlayerConfig::new(Colour::FUGITIVE, fugitive_starts[0])
            .with_purse(&fugitive_tickets(self.pursuer_count));

        Colour::PURSUERS
            .iter()
            .zip(pursuer_starts)
            .take(self.pursuer_count)
            .fold(GameSetup::new(classic_schedule(), fugitive), |setup, (&colour, start)| {
                setup.with_pursuer(PlayerConfig::new(colour, start).with_purse(&pursuer_tickets()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;
    use crate::engine::validate_setup;

    #[test]
    fn test_board_shape() {
        let board = classic_board();

        assert_eq!(board.location_count(), 20);
        assert_eq!(board.locations(), (1..=20).collect::<Vec<_>>());
        // Every location keeps both ring neighbours.
        assert!(board.edges_from(20).iter().any(|e| e.destination == 1));
        assert!(board
            .edges_from(10)
            .iter()
            .any(|e| e.destination == 20 && e.transport == Transport::Ferry));
    }

    #[test]
    fn test_schedule() {
        let schedule = classic_schedule();

        assert_eq!(schedule.len(), 24);
        let reveals: Vec<usize> = (0..24).filter(|&r| schedule.is_reveal(r)).collect();
        assert_eq!(reveals, vec![2, 7, 12, 17, 23]);
    }

    #[test]
    fn test_ticket_allocations() {
        let fugitive = fugitive_tickets(3);
        assert_eq!(fugitive[Ticket::Secret], 3);
        assert_eq!(fugitive[Ticket::Double], 2);
        assert_eq!(fugitive.total(), 4 + 3 + 3 + 3 + 2);

        let pursuer = pursuer_tickets();
        assert_eq!(pursuer.total(), 22);
        assert!(!pursuer.has(Ticket::Secret));
    }

    #[test]
    fn test_setup_is_valid_and_deterministic() {
        for seed in 0..20 {
            let setup = ClassicGameBuilder::new().seed(seed).setup();
            assert_eq!(validate_setup(&classic_board(), &setup), Ok(()));
            assert_eq!(setup, ClassicGameBuilder::new().seed(seed).setup());
        }
    }

    #[test]
    fn test_pursuer_count() {
        let setup = ClassicGameBuilder::new().pursuers(2).setup();
        assert_eq!(setup.pursuers.len(), 2);
        assert_eq!(setup.fugitive.tickets[&Ticket::Secret], 2);

        let setup = ClassicGameBuilder::new().pursuers(9).setup();
        assert_eq!(setup.pursuers.len(), 5);

        let err = ClassicGameBuilder::new().pursuers(0).build_random().unwrap_err();
        assert_eq!(err, SetupError::NoPursuers);
    }

    #[test]
    fn test_random_game_finishes() {
        let mut engine = ClassicGameBuilder::new().pursuers(3).seed(7).build_random().unwrap();

        let winners = engine.run(ROUNDS + 1).unwrap();

        assert_eq!(engine.state().phase(), Phase::GameOver);
        assert!(!winners.is_empty());
    }
}
