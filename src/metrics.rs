//! Fixed character-width tables for the PDF base-14 fonts the engine draws with.
//!
//! Base-14 fonts are never embedded, so layout can't read advances out of a
//! font file. Instead every glyph width comes from the Adobe font metrics,
//! expressed in 1/1000 em. The tables are `static` and never mutated, which
//! is what makes concurrent document generation safe without locking.

use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// Width used for any character missing from a table
pub const FALLBACK_WIDTH: u16 = 556;

/// Helvetica ascender, in 1/1000 em
pub const ASCENT: f32 = 718.0;
/// Helvetica descender, in 1/1000 em
pub const DESCENT: f32 = -207.0;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Helvetica,
    Courier,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// One of the base-14 fonts the engine can reference. Each maps to a fixed
/// resource name so every page can share the same font dictionary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    Courier,
    CourierBold,
}

impl BuiltinFont {
    pub const ALL: [BuiltinFont; 4] = [
        BuiltinFont::Helvetica,
        BuiltinFont::HelveticaBold,
        BuiltinFont::Courier,
        BuiltinFont::CourierBold,
    ];

    pub fn select(family: FontFamily, weight: FontWeight) -> BuiltinFont {
        match (family, weight) {
            (FontFamily::Helvetica, FontWeight::Regular) => BuiltinFont::Helvetica,
            (FontFamily::Helvetica, FontWeight::Bold) => BuiltinFont::HelveticaBold,
            (FontFamily::Courier, FontWeight::Regular) => BuiltinFont::Courier,
            (FontFamily::Courier, FontWeight::Bold) => BuiltinFont::CourierBold,
        }
    }

    /// The PostScript name written as the font's `BaseFont`
    pub fn base_font(self) -> &'static [u8] {
        match self {
            BuiltinFont::Helvetica => b"Helvetica",
            BuiltinFont::HelveticaBold => b"Helvetica-Bold",
            BuiltinFont::Courier => b"Courier",
            BuiltinFont::CourierBold => b"Courier-Bold",
        }
    }

    /// The name the font is registered under in each page's resources
    pub fn resource_name(self) -> &'static [u8] {
        match self {
            BuiltinFont::Helvetica => b"F1",
            BuiltinFont::HelveticaBold => b"F2",
            BuiltinFont::Courier => b"F3",
            BuiltinFont::CourierBold => b"F4",
        }
    }

    /// Advance width of `ch` in 1/1000 em, or [None] when the font has no
    /// metrics for it
    pub fn glyph_width(self, ch: char) -> Option<u16> {
        match self {
            // Courier is monospaced; anything encodable is 600 wide
            BuiltinFont::Courier | BuiltinFont::CourierBold => {
                encode_char(ch).map(|_| 600)
            }
            BuiltinFont::Helvetica => ascii_or_extra(ch, &HELVETICA, helvetica_extra),
            BuiltinFont::HelveticaBold => {
                ascii_or_extra(ch, &HELVETICA_BOLD, helvetica_bold_extra)
            }
        }
    }

    /// Advance width of `ch` at `size`, substituting [FALLBACK_WIDTH] when
    /// the character isn't in the table
    pub fn advance(self, ch: char, size: Pt) -> Pt {
        let units = self.glyph_width(ch).unwrap_or_else(|| {
            log::trace!("no metrics for {ch:?} in {self:?}, using fallback width");
            FALLBACK_WIDTH
        });
        size * (units as f32 / 1000.0)
    }

    /// Distance from the baseline to the top of the tallest glyphs at `size`
    pub fn ascent(self, size: Pt) -> Pt {
        size * (ASCENT / 1000.0)
    }

    /// Distance from the baseline to the bottom of descending glyphs at `size`.
    /// Note: this is negative
    pub fn descent(self, size: Pt) -> Pt {
        size * (DESCENT / 1000.0)
    }
}

fn ascii_or_extra(ch: char, table: &[u16; 95], extra: fn(char) -> Option<u16>) -> Option<u16> {
    match ch as u32 {
        0x20..=0x7e => Some(table[(ch as u32 - 0x20) as usize]),
        // non-breaking space
        0xa0 => Some(table[0]),
        _ => extra(ch),
    }
}

/// Helvetica widths for ASCII 0x20..=0x7e
static HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

/// Helvetica-Bold widths for ASCII 0x20..=0x7e
static HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0..?
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // P.._
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // `..o
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // p..~
];

fn helvetica_extra(ch: char) -> Option<u16> {
    Some(match ch {
        '\u{2022}' => 350,              // bullet
        '\u{00a9}' => 737,              // copyright
        '\u{2013}' => 556,              // en dash
        '\u{2014}' => 1000,             // em dash
        '\u{2018}' | '\u{2019}' => 222, // single quotes
        '\u{201c}' | '\u{201d}' => 333, // double quotes
        '\u{2026}' => 1000,             // ellipsis
        '\u{00b0}' => 400,              // degree
        '\u{00e9}' | '\u{00e8}' => 556,
        _ => return None,
    })
}

fn helvetica_bold_extra(ch: char) -> Option<u16> {
    Some(match ch {
        '\u{2022}' => 350,
        '\u{00a9}' => 737,
        '\u{2013}' => 556,
        '\u{2014}' => 1000,
        '\u{2018}' | '\u{2019}' => 278,
        '\u{201c}' | '\u{201d}' => 500,
        '\u{2026}' => 1000,
        '\u{00b0}' => 400,
        '\u{00e9}' | '\u{00e8}' => 556,
        _ => return None,
    })
}

/// Map a character to its WinAnsi (Windows-1252) code, the encoding every
/// base-14 font is registered with.
pub fn encode_char(ch: char) -> Option<u8> {
    match ch as u32 {
        0x0020..=0x007e => Some(ch as u8),
        0x00a0..=0x00ff => Some(ch as u8),
        0x20ac => Some(0x80),
        0x201a => Some(0x82),
        0x0192 => Some(0x83),
        0x201e => Some(0x84),
        0x2026 => Some(0x85),
        0x2020 => Some(0x86),
        0x2021 => Some(0x87),
        0x02c6 => Some(0x88),
        0x2030 => Some(0x89),
        0x0160 => Some(0x8a),
        0x2039 => Some(0x8b),
        0x0152 => Some(0x8c),
        0x017d => Some(0x8e),
        0x2018 => Some(0x91),
        0x2019 => Some(0x92),
        0x201c => Some(0x93),
        0x201d => Some(0x94),
        0x2022 => Some(0x95),
        0x2013 => Some(0x96),
        0x2014 => Some(0x97),
        0x02dc => Some(0x98),
        0x2122 => Some(0x99),
        0x0161 => Some(0x9a),
        0x203a => Some(0x9b),
        0x0153 => Some(0x9c),
        0x017e => Some(0x9e),
        0x0178 => Some(0x9f),
        _ => None,
    }
}

/// Encode a string as WinAnsi bytes for a PDF text-showing operator.
/// Characters outside the encoding are drawn as `?`.
pub fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .filter(|&ch| ch != '\n' && ch != '\r')
        .map(|ch| encode_char(ch).unwrap_or(b'?'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_helvetica_widths() {
        assert_eq!(BuiltinFont::Helvetica.glyph_width(' '), Some(278));
        assert_eq!(BuiltinFont::Helvetica.glyph_width('W'), Some(944));
        assert_eq!(BuiltinFont::Helvetica.glyph_width('i'), Some(222));
        assert_eq!(BuiltinFont::Helvetica.glyph_width('~'), Some(584));
        assert_eq!(BuiltinFont::HelveticaBold.glyph_width('m'), Some(889));
        assert_eq!(BuiltinFont::Helvetica.glyph_width('\u{2022}'), Some(350));
    }

    #[test]
    fn unknown_glyph_uses_fallback_width() {
        assert_eq!(BuiltinFont::Helvetica.glyph_width('\u{4e2d}'), None);
        let advance = BuiltinFont::Helvetica.advance('\u{4e2d}', Pt(10.0));
        assert!((advance.0 - FALLBACK_WIDTH as f32 / 100.0).abs() < 1e-4);
    }

    #[test]
    fn courier_is_monospaced() {
        for ch in ['i', 'W', '.', '\u{00a9}'] {
            assert_eq!(BuiltinFont::Courier.glyph_width(ch), Some(600));
        }
    }

    #[test]
    fn encodes_bullet_and_substitutes_unknowns() {
        assert_eq!(encode_text("\u{2022} a"), vec![0x95, b' ', b'a']);
        assert_eq!(encode_text("\u{00a9}"), vec![0xa9]);
        assert_eq!(encode_text("\u{4e2d}x"), vec![b'?', b'x']);
    }
}
