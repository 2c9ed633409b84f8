//! The box layout engine.
//!
//! Sizes the interior to the widest input line plus one padding column per
//! side, widens it further if a title decoration needs the room, then emits
//! the top border, one row per input line, and the bottom border. All
//! arithmetic is in display columns (see [`crate::width`]).

use crate::style::BorderStyle;
use crate::width::{display_width, glyph_width};

/// One padding column on each side of the widest line.
const MIN_PADDING: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// Render `lines` inside a box.
///
/// Returns the full ordered sequence of output rows: top border, one
/// content row per input line, bottom border. `lines` may be empty; an
/// empty `title` is treated as absent.
///
/// When the horizontal glyph is wider than one column and does not evenly
/// divide the interior width, the fill stops short of the nominal width
/// rather than overshooting; fractional glyphs are not representable.
pub fn render(
    lines: &[String],
    style: &BorderStyle,
    title: Option<&str>,
    alignment: Alignment,
) -> Vec<String> {
    let title = title.filter(|t| !t.is_empty());

    let max_content = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
    let mut inner_width = max_content + MIN_PADDING;

    // The top border must always be able to contain the whole decoration.
    let title_decor = title.map(|t| style.title_decoration(t));
    if let Some(decor) = &title_decor {
        inner_width = inner_width.max(display_width(decor));
    }

    let mut rows = Vec::with_capacity(lines.len() + 2);
    rows.push(top_border(style, inner_width, title_decor.as_deref()));
    for line in lines {
        rows.push(content_row(style, inner_width, line, alignment));
    }
    rows.push(format!(
        "{}{}{}",
        style.bottom_left,
        fill_to(style.horizontal, inner_width),
        style.bottom_right
    ));
    rows
}

fn top_border(style: &BorderStyle, inner_width: usize, title_decor: Option<&str>) -> String {
    match title_decor {
        None => format!(
            "{}{}{}",
            style.top_left,
            fill_to(style.horizontal, inner_width),
            style.top_right
        ),
        Some(decor) => {
            let remaining = inner_width.saturating_sub(display_width(decor));
            let (left, right) = split_rightward(remaining);
            format!(
                "{}{}{}{}{}",
                style.top_left,
                fill_to(style.horizontal, left),
                decor,
                fill_to(style.horizontal, right),
                style.top_right
            )
        }
    }
}

fn content_row(
    style: &BorderStyle,
    inner_width: usize,
    line: &str,
    alignment: Alignment,
) -> String {
    let pad = inner_width.saturating_sub(display_width(line));
    let (left, right) = match alignment {
        Alignment::Center => split_rightward(pad),
        // One fixed column on the left, the rest on the right.
        Alignment::Left => (1, pad.saturating_sub(1)),
    };
    format!(
        "{}{}{}{}{}",
        style.vertical,
        " ".repeat(left),
        line,
        " ".repeat(right),
        style.vertical
    )
}

/// Repeat `glyph` as often as possible without exceeding `width` display
/// columns: `floor(width / glyph_width)` repetitions. Exact for one-column
/// glyphs, best effort for wider ones.
fn fill_to(glyph: char, width: usize) -> String {
    let per_glyph = glyph_width(glyph).max(1);
    glyph.to_string().repeat(width / per_glyph)
}

/// Split `total` into a (left, right) pair; the right side absorbs the odd
/// remainder.
fn split_rightward(total: usize) -> (usize, usize) {
    let left = total / 2;
    (left, total - left)
}
