//! Round Logic for Roshambo
//!
//! Core game logic for extended rock-paper-scissors (lizard and spock
//! included): the symbol set, the outcome rule, pluggable choice sources
//! and the session engine. The crate itself never touches stdout; the
//! `roshambo` binary owns the terminal report.

mod choice;
mod verdict;
mod strategy;
mod round;
mod report;

pub use choice::{Choice, ParseChoiceError, ParseVariantError, Variant};
pub use verdict::Verdict;
pub use strategy::{computer_says, player_says, session_rng, ChoiceSource};
pub use round::{run_session, RoundRecord, SessionConfig, SessionResult};
pub use report::{matrix, round_block};

/// Verdict of `reference` against `opposing`, from the reference side
///
/// Total over all 25 ordered pairs. Instead of a literal table, the rule
/// falls out of the cycle rock → paper → scissors → spock → lizard:
/// identical symbols tie, an odd gap back around the ring wins and an
/// even gap loses.
pub const fn verdict_of(reference: Choice, opposing: Choice) -> Verdict {
    let gap = (5 + reference.ring() - opposing.ring()) % 5;
    match gap {
        0 => Verdict::Tie,
        1 | 3 => Verdict::Win,
        _ => Verdict::Loss,
    }
}

/// Verdict of a round from the player's side
///
/// Argument order follows the round transcript (computer first), so
/// `winner(a, b) == verdict_of(b, a)`.
pub const fn winner(opposing: Choice, reference: Choice) -> Verdict {
    verdict_of(reference, opposing)
}
