//! Standard-14 Helvetica metrics and WinAnsi encoding.
//!
//! Only the two base fonts the document uses are described. Widths are in
//! thousandths of the font size, taken from the Adobe AFM files.

use encoding_rs::{EncoderResult, WINDOWS_1252};

/// Weight of the Helvetica face to draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

impl FontStyle {
    /// PDF base font name.
    pub fn base_font(self) -> &'static str {
        match self {
            FontStyle::Regular => "Helvetica",
            FontStyle::Bold => "Helvetica-Bold",
        }
    }

    /// Resource name the font is registered under on every page.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontStyle::Regular => "F1",
            FontStyle::Bold => "F2",
        }
    }
}

/// A face together with a size in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub style: FontStyle,
    pub size: f32,
}

impl Font {
    pub const fn regular(size: f32) -> Self {
        Self {
            style: FontStyle::Regular,
            size,
        }
    }

    pub const fn bold(size: f32) -> Self {
        Self {
            style: FontStyle::Bold,
            size,
        }
    }

    /// Width of `text` in points once rendered with this font.
    pub fn text_width(&self, text: &str) -> f32 {
        text.chars().map(|c| self.char_width(c)).sum()
    }

    pub fn char_width(&self, c: char) -> f32 {
        glyph_units(c, self.style) as f32 * self.size / 1000.0
    }
}

// Printable ASCII, 0x20..=0x7E.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 'p'..'~'
];

// Glyphs outside printable ASCII are approximated by the width of '?'.
const FALLBACK_UNITS: u16 = 556;

fn glyph_units(c: char, style: FontStyle) -> u16 {
    let table = match style {
        FontStyle::Regular => &HELVETICA,
        FontStyle::Bold => &HELVETICA_BOLD,
    };
    match c {
        ' '..='~' => table[c as usize - 0x20],
        _ => FALLBACK_UNITS,
    }
}

/// Encodes text for a WinAnsiEncoding simple font.
///
/// WinAnsi is Windows-1252; characters it cannot represent become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut encoder = WINDOWS_1252.new_encoder();
    let mut out = Vec::with_capacity(text.len());
    let mut buffer = [0u8; 1024];
    let mut rest = text;
    loop {
        let (result, read, written) =
            encoder.encode_from_utf8_without_replacement(rest, &mut buffer, true);
        out.extend_from_slice(&buffer[..written]);
        rest = &rest[read..];
        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => {}
            EncoderResult::Unmappable(_) => out.push(b'?'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_widths_follow_afm() {
        let font = Font::regular(10.0);
        assert_eq!(font.text_width("i"), 2.22);
        assert_eq!(Font::bold(10.0).text_width("i"), 2.78);
        assert_eq!(font.text_width("W"), 9.44);
    }

    #[test]
    fn unknown_glyphs_use_fallback_width() {
        let font = Font::regular(1000.0);
        assert_eq!(font.text_width("日"), FALLBACK_UNITS as f32);
    }

    #[test]
    fn win_ansi_keeps_latin1_and_replaces_the_rest() {
        assert_eq!(encode_win_ansi("café"), vec![b'c', b'a', b'f', 0xe9]);
        assert_eq!(encode_win_ansi("“x”"), vec![0x93, b'x', 0x94]);
        assert_eq!(encode_win_ansi("日本"), b"??".to_vec());
        assert_eq!(encode_win_ansi("€5 – ok"), vec![0x80, b'5', b' ', 0x96, b' ', b'o', b'k']);
        let long = "é".repeat(3000) + "日";
        let encoded = encode_win_ansi(&long);
        assert_eq!(encoded.len(), 3001);
        assert_eq!(encoded.last(), Some(&b'?'));
    }
}
