//! Choices and game variants

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A throwable symbol in the extended game
///
/// Enumeration order is display order: the first three symbols form the
/// classic short game. The outcome rule is derived from a different cyclic
/// order, see [`Choice::ring`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
    Lizard = 3,
    Spock = 4,
}

impl Choice {
    /// All five symbols in enumeration order
    pub const fn all() -> [Choice; 5] {
        [
            Choice::Rock,
            Choice::Paper,
            Choice::Scissors,
            Choice::Lizard,
            Choice::Spock,
        ]
    }

    /// Lowercase display name
    pub const fn name(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
            Choice::Lizard => "lizard",
            Choice::Spock => "spock",
        }
    }

    /// One-letter column header used by the outcome matrix
    /// (`x` for scissors; `s` is taken by spock)
    pub const fn abbrev(self) -> char {
        match self {
            Choice::Rock => 'r',
            Choice::Paper => 'p',
            Choice::Scissors => 'x',
            Choice::Lizard => 'l',
            Choice::Spock => 's',
        }
    }

    /// Position on the cycle rock → paper → scissors → spock → lizard.
    /// Stepping an odd distance forward from a symbol lands on one that
    /// beats it, an even distance on one it beats.
    pub(crate) const fn ring(self) -> u8 {
        match self {
            Choice::Rock => 0,
            Choice::Paper => 1,
            Choice::Scissors => 2,
            Choice::Spock => 3,
            Choice::Lizard => 4,
        }
    }
}

/// u8 isomorphism. The only way to manufacture a choice from an index;
/// anything outside 0..=4 is a caller bug and panics.
impl From<u8> for Choice {
    fn from(n: u8) -> Choice {
        match n {
            0 => Choice::Rock,
            1 => Choice::Paper,
            2 => Choice::Scissors,
            3 => Choice::Lizard,
            4 => Choice::Spock,
            _ => panic!("invalid choice index: {}", n),
        }
    }
}

impl From<Choice> for u8 {
    fn from(c: Choice) -> u8 {
        c as u8
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized name in a choice position (CLI flags and the like)
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown choice '{0}' (expected rock, paper, scissors, lizard or spock)")]
pub struct ParseChoiceError(pub String);

impl FromStr for Choice {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Choice::Rock),
            "paper" | "p" => Ok(Choice::Paper),
            "scissors" | "x" => Ok(Choice::Scissors),
            "lizard" | "l" => Ok(Choice::Lizard),
            "spock" | "s" => Ok(Choice::Spock),
            other => Err(ParseChoiceError(other.to_string())),
        }
    }
}

/// Game size: which leading prefix of the symbol set is in play
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Classic rock-paper-scissors
    Short,
    /// Adds lizard and spock
    #[default]
    Long,
}

impl Variant {
    /// Number of symbols in play
    pub const fn size(self) -> usize {
        match self {
            Variant::Short => 3,
            Variant::Long => 5,
        }
    }

    /// The playable symbols, in enumeration order
    pub fn choices(self) -> impl Iterator<Item = Choice> {
        Choice::all().into_iter().take(self.size())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Short => f.write_str("short"),
            Variant::Long => f.write_str("long"),
        }
    }
}

/// Unrecognized variant name
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown variant '{0}' (expected short or long)")]
pub struct ParseVariantError(pub String);

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" | "3" => Ok(Variant::Short),
            "long" | "5" => Ok(Variant::Long),
            other => Err(ParseVariantError(other.to_string())),
        }
    }
}
