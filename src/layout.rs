//! Page geometry and line breaking.

use crate::font::Font;

const MM: f32 = 72.0 / 25.4;

/// A4 portrait, in points.
pub(crate) const PAGE_WIDTH: f32 = 210.0 * MM;
pub(crate) const PAGE_HEIGHT: f32 = 297.0 * MM;
pub(crate) const MARGIN: f32 = 10.0 * MM;
/// Content below `PAGE_HEIGHT - BOTTOM_MARGIN` spills to the next page.
pub(crate) const BOTTOM_MARGIN: f32 = 20.0 * MM;
/// Height of one line of text, whatever the font size.
pub(crate) const CELL_HEIGHT: f32 = 10.0 * MM;
/// Horizontal padding inside a cell.
pub(crate) const CELL_PADDING: f32 = 1.0 * MM;

const TAB_WIDTH: usize = 4;

/// Width available to body text on one line.
pub(crate) fn text_area_width() -> f32 {
    PAGE_WIDTH - 2.0 * MARGIN - 2.0 * CELL_PADDING
}

/// Turns raw file text into something the standard fonts can draw: tabs
/// become spaces, carriage returns and other control characters go away.
pub(crate) fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\t' => out.push_str(&" ".repeat(TAB_WIDTH)),
            '\n' => out.push('\n'),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

/// Splits `text` into lines no wider than `max_width`.
///
/// Explicit newlines always break. Within a paragraph the break goes after
/// the last space that fits; a word longer than the line is broken between
/// characters. A single trailing newline is ignored and the result is never
/// empty.
pub(crate) fn wrap_text(text: &str, font: Font, max_width: f32) -> Vec<String> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, font, max_width, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, font: Font, max_width: f32, lines: &mut Vec<String>) {
    let chars: Vec<char> = paragraph.chars().collect();
    if chars.is_empty() {
        lines.push(String::new());
        return;
    }

    let mut start = 0;
    let mut width = 0.0;
    let mut last_space: Option<usize> = None;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == ' ' {
            last_space = Some(i);
        }
        width += font.char_width(c);
        if width > max_width && i > start {
            match last_space {
                Some(space) if space > start => {
                    lines.push(chars[start..space].iter().collect());
                    start = space + 1;
                }
                _ => {
                    lines.push(chars[start..i].iter().collect());
                    start = i;
                }
            }
            i = start;
            width = 0.0;
            last_space = None;
            continue;
        }
        i += 1;
    }
    lines.push(chars[start..].iter().collect());
}
