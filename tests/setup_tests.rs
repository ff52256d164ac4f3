//! Construction validation tests.
//!
//! Every rejected setup yields one descriptive `SetupError` and no engine.

use pursuit_engine::{
    validate_setup, Board, Colour, EngineBuilder, FirstMoveStrategy, GameSetup, PlayerConfig,
    SetupError, Ticket, TicketPurse, Transport, UNREVEALED,
};

fn board() -> Board {
    Board::new()
        .with_route(1, 2, Transport::Taxi)
        .with_route(2, 3, Transport::Bus)
        .with_route(3, 4, Transport::Underground)
        .with_route(4, 5, Transport::Ferry)
}

fn fugitive_purse() -> TicketPurse {
    TicketPurse::empty()
        .with(Ticket::Taxi, 2)
        .with(Ticket::Secret, 1)
        .with(Ticket::Double, 1)
}

fn pursuer_purse() -> TicketPurse {
    TicketPurse::empty().with(Ticket::Taxi, 2).with(Ticket::Bus, 2)
}

fn fugitive(location: u32) -> PlayerConfig {
    PlayerConfig::new(Colour::Black, location).with_purse(&fugitive_purse())
}

fn pursuer(colour: Colour, location: u32) -> PlayerConfig {
    PlayerConfig::new(colour, location).with_purse(&pursuer_purse())
}

fn check(setup: &GameSetup) -> Result<(), SetupError> {
    validate_setup(&board(), setup)
}

/// A well-formed setup validates and builds a running engine.
#[test]
fn test_valid_setup_builds() {
    let setup = GameSetup::new(vec![false, true], fugitive(1))
        .with_pursuer(pursuer(Colour::Red, 3))
        .with_pursuer(pursuer(Colour::Blue, 5));
    assert_eq!(check(&setup), Ok(()));

    let engine = EngineBuilder::new(board(), vec![false, true])
        .fugitive(fugitive(1), FirstMoveStrategy)
        .pursuer(pursuer(Colour::Red, 3), FirstMoveStrategy)
        .pursuer(pursuer(Colour::Blue, 5), FirstMoveStrategy)
        .build()
        .unwrap();
    assert!(!engine.state().is_game_over());
}

/// A schedule with no rounds is refused.
#[test]
fn test_empty_schedule() {
    let setup = GameSetup::new(Vec::<bool>::new(), fugitive(1)).with_pursuer(pursuer(Colour::Red, 3));
    assert_eq!(check(&setup), Err(SetupError::EmptySchedule));
}

/// A board without locations is refused.
#[test]
fn test_empty_board() {
    let setup = GameSetup::new(vec![false], fugitive(1)).with_pursuer(pursuer(Colour::Red, 3));
    assert_eq!(validate_setup(&Board::new(), &setup), Err(SetupError::EmptyBoard));

    let result = EngineBuilder::new(Board::new(), vec![false])
        .fugitive(fugitive(1), FirstMoveStrategy)
        .pursuer(pursuer(Colour::Red, 3), FirstMoveStrategy)
        .build();
    assert_eq!(result.unwrap_err(), SetupError::EmptyBoard);
}

/// The fugitive seat must use the fugitive colour.
#[test]
fn test_fugitive_must_be_black() {
    let setup = GameSetup::new(vec![false], pursuer(Colour::Green, 1)).with_pursuer(pursuer(Colour::Red, 3));
    assert_eq!(
        check(&setup),
        Err(SetupError::WrongFugitiveColour {
            expected: Colour::Black,
            found: Colour::Green,
        })
    );
}

/// At least one pursuer must be seated.
#[test]
fn test_no_pursuers() {
    let setup = GameSetup::new(vec![false], fugitive(1));
    assert_eq!(check(&setup), Err(SetupError::NoPursuers));
}

/// No pursuer may take the fugitive colour.
#[test]
fn test_pursuer_cannot_be_black() {
    let setup = GameSetup::new(vec![false], fugitive(1)).with_pursuer(pursuer(Colour::Black, 3));
    assert_eq!(check(&setup), Err(SetupError::PursuerIsFugitive(Colour::Black)));
}

/// Each colour may be seated once.
#[test]
fn test_duplicate_colour() {
    let setup = GameSetup::new(vec![false], fugitive(1))
        .with_pursuer(pursuer(Colour::Red, 3))
        .with_pursuer(pursuer(Colour::Red, 4));
    assert_eq!(check(&setup), Err(SetupError::DuplicateColour(Colour::Red)));
}

/// Two seats cannot share a starting location.
#[test]
fn test_duplicate_location() {
    let setup = GameSetup::new(vec![false], fugitive(3)).with_pursuer(pursuer(Colour::Red, 3));
    assert_eq!(check(&setup), Err(SetupError::DuplicateLocation { location: 3 }));
}

/// Starting locations must exist on the board.
#[test]
fn test_location_not_on_board() {
    let setup = GameSetup::new(vec![false], fugitive(1)).with_pursuer(pursuer(Colour::White, 99));
    assert_eq!(
        check(&setup),
        Err(SetupError::UnknownLocation {
            colour: Colour::White,
            location: 99,
        })
    );
}

/// Pursuers must list every ticket kind.
#[test]
fn test_missing_ticket_kind() {
    // Bus is never mentioned, not even as zero.
    let incomplete = PlayerConfig::new(Colour::Red, 3)
        .with_tickets(Ticket::Taxi, 4)
        .with_tickets(Ticket::Underground, 1)
        .with_tickets(Ticket::Secret, 0)
        .with_tickets(Ticket::Double, 0);
    let setup = GameSetup::new(vec![false], fugitive(1)).with_pursuer(incomplete);

    let err = check(&setup).unwrap_err();
    assert_eq!(
        err,
        SetupError::MissingTicket {
            colour: Colour::Red,
            ticket: Ticket::Bus,
        }
    );
    assert_eq!(err.to_string(), "red has no entry for bus tickets");
}

/// The fugitive must list every ticket kind.
#[test]
fn test_fugitive_missing_ticket_kind() {
    let bare = PlayerConfig::new(Colour::Black, 1);
    let setup = GameSetup::new(vec![false], bare).with_pursuer(pursuer(Colour::Red, 3));

    assert_eq!(
        check(&setup),
        Err(SetupError::MissingTicket {
            colour: Colour::Black,
            ticket: Ticket::Taxi,
        })
    );
}

/// Pursuers may not hold secret or double tickets.
#[test]
fn test_pursuer_with_double_token() {
    let setup = GameSetup::new(vec![false], fugitive(1))
        .with_pursuer(pursuer(Colour::Yellow, 3).with_tickets(Ticket::Double, 2));
    assert_eq!(
        check(&setup),
        Err(SetupError::ForbiddenPursuerTicket {
            colour: Colour::Yellow,
            ticket: Ticket::Double,
            count: 2,
        })
    );
}

/// The builder needs one strategy per seat.
#[test]
fn test_builder_checks_strategies_match_seats() {
    let setup = GameSetup::new(vec![false], fugitive(1)).with_pursuer(pursuer(Colour::Red, 3));

    let result = EngineBuilder::from_setup(board(), setup, Vec::new());
    assert_eq!(
        result.unwrap_err(),
        SetupError::StrategyCount {
            expected: 2,
            found: 0,
        }
    );
}

/// Setups survive a JSON round trip.
#[test]
fn test_setup_json_round_trip() {
    let setup = GameSetup::new(vec![false, true, false], fugitive(1))
        .with_pursuer(pursuer(Colour::Red, 3));

    let json = serde_json::to_string(&setup).unwrap();
    let back: GameSetup = serde_json::from_str(&json).unwrap();
    assert_eq!(back, setup);
}

/// Location 0 marks an unrevealed fugitive and cannot be on the board.
#[test]
fn test_board_with_location_zero() {
    let board = board().with_route(0, 1, Transport::Taxi);
    let setup = GameSetup::new(vec![false, true], fugitive(1)).with_pursuer(pursuer(Colour::Red, 3));

    assert_eq!(
        validate_setup(&board, &setup),
        Err(SetupError::ReservedLocation(UNREVEALED))
    );
}

/// Tickets in play must fit in a single purse.
#[test]
fn test_too_many_tickets_in_play() {
    let hoard = fugitive_purse().with(Ticket::Taxi, u32::MAX);
    let setup = GameSetup::new(vec![false, true], PlayerConfig::new(Colour::Black, 1).with_purse(&hoard))
        .with_pursuer(pursuer(Colour::Red, 3));

    assert_eq!(
        check(&setup),
        Err(SetupError::TooManyTickets {
            total: u64::from(u32::MAX) + 2 + 4,
        })
    );
}

/// Tickets in play may reach the purse limit exactly.
#[test]
fn test_tickets_at_the_limit() {
    let hoard = TicketPurse::empty().with(Ticket::Taxi, u32::MAX - 4);
    let setup = GameSetup::new(vec![false, true], PlayerConfig::new(Colour::Black, 1).with_purse(&hoard))
        .with_pursuer(pursuer(Colour::Red, 3));

    assert_eq!(check(&setup), Ok(()));
}
