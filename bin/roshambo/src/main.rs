//! Roshambo CLI - extended rock-paper-scissors round simulator
//!
//! Plays a configurable number of rounds between a random computer side
//! and a fixed player side, prints each round's verdict and finishes with
//! the outcome matrix for the variant in play. A zero-argument run plays
//! the standard session: ten rounds of the five-symbol game against a
//! player who always throws scissors.

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use round_logic::{
    matrix, round_block, run_session, session_rng, Choice, ChoiceSource, SessionConfig, Variant,
};

#[derive(Parser)]
#[command(name = "roshambo")]
#[command(version, about = "Extended rock-paper-scissors round simulator", long_about = None)]
struct Cli {
    /// Number of rounds to play
    #[arg(long, short = 'n', default_value_t = 10)]
    rounds: u32,

    /// Symbol set: 'long' (adds lizard and spock) or 'short' (classic three)
    #[arg(long, default_value = "long")]
    variant: String,

    /// The player's fixed throw (name or one-letter abbreviation)
    #[arg(long, default_value = "scissors")]
    player: String,

    /// Seed for the computer's draws; omit for a fresh one
    #[arg(long)]
    seed: Option<u64>,

    /// Print the session as JSON instead of the round report
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let variant: Variant = cli
        .variant
        .parse()
        .with_context(|| format!("Invalid value '{}' for --variant", cli.variant))?;
    let player: Choice = cli
        .player
        .parse()
        .with_context(|| format!("Invalid value '{}' for --player", cli.player))?;

    let config = SessionConfig { rounds: cli.rounds, variant };
    let (mut rng, seed) = session_rng(cli.seed);
    debug!(
        "{} rounds, {} variant, player fixed on {}, seed {}",
        config.rounds, variant, player, seed
    );

    let session = run_session(
        &ChoiceSource::Random,
        &ChoiceSource::Fixed(player),
        &config,
        &mut rng,
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&session)?);
        return Ok(());
    }

    for record in &session.rounds {
        print!("{}", round_block(record));
    }
    print!("{}", matrix(variant));

    debug!(
        "player tally: {} won, {} tied, {} lost",
        session.wins, session.ties, session.losses
    );

    Ok(())
}
