use crate::style::Style;
use crate::units::Pt;
use serde::{Deserialize, Serialize};

const TABSIZE: usize = 4;

/// Horizontal placement of a line of text within its box
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Calculates the vertical offset from the top of a line box to the font's
/// baseline. Text coordinates in PDF specify the baseline, so a line whose
/// box starts at `top` (measured downwards) draws its text at
/// `top + baseline_offset(style)`.
pub fn baseline_offset(style: &Style) -> Pt {
    // centre the ascent-to-descent extent inside the line box
    let font = style.font();
    let glyph_extent = font.ascent(style.size) - font.descent(style.size);
    let padding = (style.line_height() - glyph_extent) * 0.5;
    padding + font.ascent(style.size)
}

/// Calculate the width of a given string of text in the given style. Glyphs
/// missing from the metrics table are measured with the fallback width.
pub fn width_of_text(text: &str, style: &Style) -> Pt {
    let font = style.font();
    text.chars()
        .filter(|&ch| ch != '\n' && ch != '\r')
        .map(|ch| font.advance(ch, style.size))
        .sum()
}

/// The x coordinate a line should start at to sit at `align` within the
/// horizontal span `left..left + width`
pub fn aligned_x(text: &str, style: &Style, left: Pt, width: Pt, align: Align) -> Pt {
    match align {
        Align::Left => left,
        Align::Center => left + (width - width_of_text(text, style)) * 0.5,
        Align::Right => left + width - width_of_text(text, style),
    }
}

/// Greedy word wrap.
///
/// Words are separated by whitespace and accumulated onto a line for as long
/// as the line still fits within `max_width`; the word that would overflow
/// starts the next line. A single word wider than `max_width` is placed alone
/// on its own line and allowed to overflow horizontally: words are never
/// hyphenated or split.
///
/// Explicit newlines start a new line, and blank lines are preserved as empty
/// strings so paragraphs keep their spacing. Text with no words at all wraps
/// to no lines.
///
/// This is a pure function: the same arguments always produce the same lines.
pub fn wrap(text: &str, max_width: Pt, style: &Style) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    // replace tabs with spaces and normalize newlines
    let text = text
        .replace('\t', &" ".repeat(TABSIZE))
        .replace("\r\n", "\n")
        .replace('\r', "\n");

    let space = width_of_text(" ", style);
    let mut lines: Vec<String> = Vec::new();

    for paragraph in text.trim_matches('\n').split('\n') {
        let mut line = String::new();
        let mut line_width = Pt(0.0);

        for word in paragraph.split_whitespace() {
            let word_width = width_of_text(word, style);
            if line.is_empty() {
                line.push_str(word);
                line_width = word_width;
            } else if line_width + space + word_width > max_width {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
                line_width = word_width;
            } else {
                line.push(' ');
                line.push_str(word);
                line_width += space + word_width;
            }
        }

        lines.push(line);
    }

    lines
}

/// The total height `text` occupies once wrapped to `max_width`
pub fn wrapped_height(text: &str, max_width: Pt, style: &Style) -> Pt {
    style.line_height() * wrap(text, max_width, style).len() as f32
}
