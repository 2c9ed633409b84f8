//! Border glyph sets.
//!
//! Styles 1-3 are a fixed table; style 4 is built at runtime from one
//! user-supplied glyph. A style is immutable once resolved.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{BoxupError, Result};

/// Style id that takes its glyph from the user instead of the table.
pub const CUSTOM_STYLE: u8 = 4;

/// The characters for the various frame components.
///
/// Every field is a single Unicode scalar; glyphs wider than one column
/// (e.g. CJK) are legal and handled by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderStyle {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub title_left: char,
    pub title_right: char,
    /// Builtin styles star the title (`┘ *title* └`); the custom style
    /// prints it bare (`# title #`).
    pub starred_title: bool,
}

impl BorderStyle {
    /// The decorated form of `title` as embedded in the top border: the
    /// bracket glyphs, one space on each side of the (possibly starred)
    /// title text.
    pub fn title_decoration(&self, title: &str) -> String {
        let star = if self.starred_title { "*" } else { "" };
        format!(
            "{} {}{}{} {}",
            self.title_left, star, title, star, self.title_right
        )
    }

    /// Style 4: one glyph for all eight frame components.
    ///
    /// The raw flag value is trimmed and must be exactly one code point.
    pub fn from_glyph(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let glyph = match (chars.next(), chars.next()) {
            (Some(g), None) => g,
            _ => return Err(BoxupError::InvalidCustomGlyph(raw.to_string())),
        };
        Ok(BorderStyle {
            top_left: glyph,
            top_right: glyph,
            bottom_left: glyph,
            bottom_right: glyph,
            horizontal: glyph,
            vertical: glyph,
            title_left: glyph,
            title_right: glyph,
            starred_title: false,
        })
    }
}

/// Different styles to choose from.
static STYLES: Lazy<HashMap<u8, BorderStyle>> = Lazy::new(|| {
    HashMap::from([
        (
            1,
            BorderStyle {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
                title_left: '┘',
                title_right: '└',
                starred_title: true,
            },
        ),
        (
            2,
            BorderStyle {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
                title_left: '╯',
                title_right: '╰',
                starred_title: true,
            },
        ),
        (
            3,
            BorderStyle {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                horizontal: '═',
                vertical: '║',
                title_left: '╝',
                title_right: '╚',
                starred_title: true,
            },
        ),
    ])
});

/// Look up a builtin style, or build the custom one from `glyph`.
///
/// Fails with [`BoxupError::UnknownStyle`] for ids outside 1-4 and with
/// [`BoxupError::InvalidCustomGlyph`] when style 4 is selected without a
/// usable glyph. A missing `--glyph` flag counts as an empty one.
pub fn resolve(id: u8, glyph: Option<&str>) -> Result<BorderStyle> {
    if id == CUSTOM_STYLE {
        return BorderStyle::from_glyph(glyph.unwrap_or(""));
    }
    STYLES
        .get(&id)
        .copied()
        .ok_or(BoxupError::UnknownStyle(id))
}
