//! Text rendering for round reports and the outcome matrix
//!
//! Every shape here is part of the program's terminal contract: names
//! right-aligned in width 8, verdict codes and matrix cells right-aligned
//! in width 3. Tests pin the rendered bytes.

use crate::choice::{Choice, Variant};
use crate::round::RoundRecord;
use crate::verdict_of;

/// One round's printed block, trailing blank line included
pub fn round_block(record: &RoundRecord) -> String {
    format!(
        "Computer said: {}\n  Player said: {}\n{:>3}, {}\n\n",
        record.computer,
        record.player,
        record.verdict.code(),
        record.verdict,
    )
}

/// The outcome matrix for a variant
///
/// Rows and columns run over the variant's symbols in enumeration order;
/// each cell is the verdict glyph with the row's symbol as the reference
/// side. The header row labels columns with one-letter abbreviations.
pub fn matrix(variant: Variant) -> String {
    let mut out = row("........", variant.choices().map(Choice::abbrev));
    for reference in variant.choices() {
        let cells = variant
            .choices()
            .map(|opposing| verdict_of(reference, opposing).glyph());
        out.push_str(&row(reference.name(), cells));
    }
    out
}

// Label right-aligned in width 8, then one glyph per cell right-aligned
// in width 3 after the ": " separator
fn row(label: &str, cells: impl Iterator<Item = char>) -> String {
    let mut line = format!("{:>8}: ", label);
    for cell in cells {
        line.push_str(&format!("{:>3}", cell));
    }
    line.push('\n');
    line
}
