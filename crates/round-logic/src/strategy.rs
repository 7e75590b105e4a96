//! Choice sources and their execution

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::choice::{Choice, Variant};

/// Where a side's choice comes from each round
///
/// The round engine only sees this seam, so a terminal- or network-fed
/// source can slot in later without touching the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceSource {
    /// Always the same choice, regardless of variant
    Fixed(Choice),
    /// Uniform draw over the variant's playable symbols
    Random,
}

impl ChoiceSource {
    /// Produce one choice. `Fixed` ignores both the variant and the RNG
    /// and may hold a symbol outside the variant's playable set.
    pub fn choose(&self, variant: Variant, rng: &mut SmallRng) -> Choice {
        match self {
            ChoiceSource::Fixed(choice) => *choice,
            ChoiceSource::Random => Choice::from(rng.random_range(0..variant.size() as u8)),
        }
    }
}

/// The computer side: uniform over the variant's symbols
pub fn computer_says(variant: Variant, rng: &mut SmallRng) -> Choice {
    ChoiceSource::Random.choose(variant, rng)
}

/// The player side: scissors every round, a stand-in for a real input feed
pub fn player_says(_variant: Variant) -> Choice {
    Choice::Scissors
}

/// Build the session RNG and report the seed actually used
///
/// A fixed seed reproduces a session exactly; `None` draws a fresh seed
/// from the thread generator.
pub fn session_rng(seed: Option<u64>) -> (SmallRng, u64) {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    (SmallRng::seed_from_u64(seed), seed)
}
