//! Line composition for a single spinner frame.

use unicode_width::UnicodeWidthStr;

/// Builds one rendered line: a carriage return, the status, the glyph, then
/// enough spaces to fill `columns` display cells.
///
/// No padding is added when `columns` is 0 or the content already fills the
/// line.
pub fn compose_line(status: &str, glyph: &str, columns: usize) -> String {
    let content_width = status.width() + glyph.width();
    let padding = columns.saturating_sub(content_width);

    let mut line = String::with_capacity(1 + status.len() + glyph.len() + padding);
    line.push('\r');
    line.push_str(status);
    line.push_str(glyph);
    line.extend(std::iter::repeat(' ').take(padding));
    line
}
