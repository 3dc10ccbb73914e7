//! Textual level parsing used by [`crate::State::create`].

use wizard_maze_core::{Cell, ConfigurationError};

/// First code point of the Unicode variation-selector block.
const VARIATION_SELECTOR_FIRST: char = '\u{FE00}';
/// Last code point of the Unicode variation-selector block.
const VARIATION_SELECTOR_LAST: char = '\u{FE0F}';

/// Splits an authored row into glyph tokens.
///
/// Variation selectors stay attached to the code point before them, so
/// `"🗝️"` yields a single token even though it spans two `char`s. A selector
/// at the very start of a row forms a token on its own.
pub(crate) fn split_glyphs(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (offset, character) in line.char_indices() {
        if (VARIATION_SELECTOR_FIRST..=VARIATION_SELECTOR_LAST).contains(&character) {
            if start.is_none() {
                start = Some(offset);
            }
            continue;
        }
        if let Some(begin) = start {
            tokens.push(&line[begin..offset]);
        }
        start = Some(offset);
    }
    if let Some(begin) = start {
        tokens.push(&line[begin..]);
    }
    tokens
}

/// Parses authored rows into cell rows.
///
/// Only glyphs are validated here; [`crate::Level::from_rows`] owns the
/// shape checks.
pub(crate) fn parse_grid<S: AsRef<str>>(rows: &[S]) -> Result<Vec<Vec<Cell>>, ConfigurationError> {
    rows.iter()
        .enumerate()
        .map(|(row, line)| {
            split_glyphs(line.as_ref())
                .into_iter()
                .enumerate()
                .map(|(column, glyph)| {
                    Cell::from_glyph(glyph).ok_or_else(|| ConfigurationError::UnknownGlyph {
                        row,
                        column,
                        glyph: glyph.to_owned(),
                    })
                })
                .collect()
        })
        .collect()
}
