//! Display-column measurement.
//!
//! Terminal columns, not bytes and not chars: CJK and fullwidth forms
//! occupy two columns, combining marks occupy zero. Both the border math
//! and the padding math must agree on this, so everything funnels through
//! these two functions.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Number of terminal columns `text` occupies.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Number of terminal columns a single border glyph occupies.
///
/// Control and zero-width code points report 0; callers that repeat a
/// glyph must guard against dividing by it.
pub fn glyph_width(glyph: char) -> usize {
    glyph.width().unwrap_or(0)
}
