//! Glyph decomposition and double-width classification.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

const CJK_UNIFIED_START: u32 = 0x4E00;
const CJK_UNIFIED_END: u32 = 0x9FFF;

/// One buffer slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Glyph(char),
    /// Right half of the double-width glyph in the previous column. Never rendered on its own.
    Continuation,
}

impl Cell {
    pub const BLANK: Cell = Cell::Glyph(' ');

    pub fn glyph(&self) -> Option<char> {
        match self {
            Cell::Glyph(ch) => Some(*ch),
            Cell::Continuation => None,
        }
    }

    pub fn is_continuation(&self) -> bool {
        matches!(self, Cell::Continuation)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::BLANK
    }
}

/// Decides how many terminal columns a glyph occupies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthPolicy {
    /// Only CJK Unified Ideographs (U+4E00..=U+9FFF) are double width.
    #[default]
    CjkRange,
    /// East Asian Width table lookup. Fullwidth forms, Hangul, kana and the like are wide too.
    EastAsian,
}

impl WidthPolicy {
    /// Column count for `ch`, always 1 or 2.
    pub fn columns(self, ch: char) -> usize {
        match self {
            WidthPolicy::CjkRange => {
                if is_cjk_unified(ch) {
                    2
                } else {
                    1
                }
            }
            // Zero-width scalars still get a cell of their own.
            WidthPolicy::EastAsian => UnicodeWidthChar::width(ch).unwrap_or(1).clamp(1, 2),
        }
    }

    pub fn is_wide(self, ch: char) -> bool {
        self.columns(ch) > 1
    }
}

fn is_cjk_unified(ch: char) -> bool {
    (CJK_UNIFIED_START..=CJK_UNIFIED_END).contains(&(ch as u32))
}

/// Splits `text` into the cells it occupies, left to right. Every double-width glyph is
/// followed by a [`Cell::Continuation`].
pub fn decompose(text: &str, policy: WidthPolicy) -> impl Iterator<Item = Cell> + '_ {
    text.chars().flat_map(move |ch| {
        let tail = policy.is_wide(ch).then_some(Cell::Continuation);
        std::iter::once(Cell::Glyph(ch)).chain(tail)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/grid/glyph.rs"]
mod tests;
