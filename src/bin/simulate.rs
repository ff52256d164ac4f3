//! Play seeded random games on the classic board and report the outcomes.
//!
//! ```text
//! RUST_LOG=pursuit_engine=debug simulate --seed 7 --pursuers 3 --games 10
//! ```

use std::collections::BTreeMap;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pursuit_engine::games::classic::ClassicGameBuilder;
use pursuit_engine::{EventLog, GameEvent, Side};

/// Seeded random pursuit games on the demonstration board
#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(version)]
struct Cli {
    /// Seed of the first game; game n uses seed + n
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of pursuers (1 to 5)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=5))]
    pursuers: u8,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut tally: BTreeMap<String, u32> = BTreeMap::new();

    for game in 0..cli.games {
        let seed = cli.seed.wrapping_add(u64::from(game));
        let mut engine = ClassicGameBuilder::new()
            .pursuers(usize::from(cli.pursuers))
            .seed(seed)
            .build_random()
            .with_context(|| format!("failed to seat game with seed {seed}"))?;

        let log = Rc::new(EventLog::new());
        engine.register_spectator(log.clone())?;

        let rounds = engine.state().rounds().len();
        engine
            .run(rounds + 1)
            .with_context(|| format!("game with seed {seed} failed"))?;

        let outcome = engine
            .state()
            .outcome()
            .context("game did not finish within the schedule")?;
        let rotations = log
            .events()
            .iter()
            .filter(|event| matches!(event, GameEvent::RotationComplete))
            .count();

        info!(
            seed,
            reason = %outcome.reason,
            winners = ?outcome.winners,
            round = engine.state().current_round(),
            rotations,
            moves = log.moves().len(),
            "game finished"
        );

        let side = match outcome.side() {
            Side::Fugitive => "fugitive",
            Side::Pursuers => "pursuers",
        };
        *tally.entry(format!("{side}: {}", outcome.reason)).or_default() += 1;
    }

    for (result, count) in &tally {
        println!("{count:>6}  {result}");
    }

    Ok(())
}
