//! Conversion of page primitives into a PDF content stream.

use crate::colour::Colour;
use crate::metrics::encode_text;
use crate::page::{LineLayout, PageContents, RectLayout, SpanLayout};
use pdf_writer::{Content, Name, Str};

/// Renders page contents to a PDF content stream, in drawing order.
pub(crate) fn render_contents(contents: &[PageContents]) -> Vec<u8> {
    let mut content = Content::new();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(span) => render_span(&mut content, span),
            PageContents::Line(line) => render_line(&mut content, line),
            PageContents::Rect(rect) => render_rect(&mut content, rect),
        }
    }

    content.finish()
}

fn render_span(content: &mut Content, span: &SpanLayout) {
    if span.text.is_empty() {
        return;
    }

    content.save_state();
    set_fill(content, span.colour);
    content
        .begin_text()
        .set_font(Name(span.font.font.resource_name()), *span.font.size)
        .next_line(*span.coords.0, *span.coords.1)
        .show(Str(&encode_text(&span.text)))
        .end_text();
    content.restore_state();
}

fn render_line(content: &mut Content, line: &LineLayout) {
    content.save_state();
    set_stroke(content, line.colour);
    content
        .set_line_width(*line.thickness)
        .move_to(*line.from.0, *line.from.1)
        .line_to(*line.to.0, *line.to.1)
        .stroke();
    content.restore_state();
}

fn render_rect(content: &mut Content, layout: &RectLayout) {
    let r = &layout.rect;
    content.save_state();
    if let Some(fill) = layout.fill {
        set_fill(content, fill);
    }
    if let Some((colour, thickness)) = layout.stroke {
        set_stroke(content, colour);
        content.set_line_width(*thickness);
    }
    content.rect(*r.x1, *r.y1, *r.width(), *r.height());
    match (layout.fill.is_some(), layout.stroke.is_some()) {
        (true, true) => content.fill_nonzero_and_stroke(),
        (true, false) => content.fill_nonzero(),
        (false, true) => content.stroke(),
        (false, false) => content.end_path(),
    };
    content.restore_state();
}

fn set_fill(content: &mut Content, colour: Colour) {
    match colour {
        Colour::RGB { r, g, b } => content.set_fill_rgb(r, g, b),
        Colour::CMYK { c, m, y, k } => content.set_fill_cmyk(c, m, y, k),
        Colour::Grey { g } => content.set_fill_gray(g),
    };
}

fn set_stroke(content: &mut Content, colour: Colour) {
    match colour {
        Colour::RGB { r, g, b } => content.set_stroke_rgb(r, g, b),
        Colour::CMYK { c, m, y, k } => content.set_stroke_cmyk(c, m, y, k),
        Colour::Grey { g } => content.set_stroke_gray(g),
    };
}
