//! Round verdicts

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of comparing two choices, read from the reference side
///
/// Discriminants are the numeric codes the round report prints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Win = 0,
    Tie = 1,
    Loss = 2,
}

impl Verdict {
    /// Numeric code as printed in the round block
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Matrix cell glyph: `+` win, `o` tie, `-` loss
    pub const fn glyph(self) -> char {
        match self {
            Verdict::Win => '+',
            Verdict::Tie => 'o',
            Verdict::Loss => '-',
        }
    }

    /// The same comparison seen from the other side
    pub const fn flip(self) -> Verdict {
        match self {
            Verdict::Win => Verdict::Loss,
            Verdict::Tie => Verdict::Tie,
            Verdict::Loss => Verdict::Win,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Win => f.write_str("win"),
            Verdict::Tie => f.write_str("tie"),
            Verdict::Loss => f.write_str("loss"),
        }
    }
}
