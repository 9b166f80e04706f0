use crate::colour::Colour;
use crate::document::Document;
use crate::layout::text::baseline_offset;
use crate::layout::PageGeometry;
use crate::page::{LineLayout, Page, RectLayout, SpanFont, SpanLayout};
use crate::style::{Style, StyleContext};
use crate::theme::Theme;
use crate::units::Pt;

/// How a template places its blocks
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LayoutMode {
    /// Blocks follow one another down the page; content that doesn't fit on
    /// the current page moves to a new one
    Flowing,
    /// Blocks are drawn at designer-chosen coordinates on a single page and
    /// never cause a page break
    FixedAbsolute,
}

/// Where a reservation landed: the top-left corner of the reserved space in
/// layout coordinates (y measured down from the top of the page) and the
/// 1-based page it is on
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WriteOrigin {
    pub x: Pt,
    pub y: Pt,
    pub page: usize,
}

/// The mutable state of one layout run: the document being built, the write
/// cursor and the style stack. Every block renderer borrows it for the
/// duration of its render; nothing about a layout run lives anywhere else.
pub struct LayoutState {
    document: Document,
    mode: LayoutMode,
    y: Pt,
    theme: Theme,
    pub style: StyleContext,
}

impl LayoutState {
    /// Start a layout run on a fresh single-page document, with the cursor at
    /// the top margin and the theme's body style active
    pub fn new(geometry: PageGeometry, mode: LayoutMode, theme: Theme) -> LayoutState {
        let style = StyleContext::new(theme.body());
        LayoutState {
            document: Document::new(geometry),
            mode,
            y: geometry.content_top(),
            theme,
            style,
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.document.geometry
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Current cursor position, measured down from the top of the page
    pub fn y(&self) -> Pt {
        self.y
    }

    /// 1-based index of the page being written
    pub fn page_index(&self) -> usize {
        self.document.page_count()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Space left between the cursor and the bottom margin
    pub fn remaining(&self) -> Pt {
        self.geometry().content_bottom() - self.y
    }

    /// Reserve `height` of vertical space for the next piece of content.
    ///
    /// In flowing mode, if the space doesn't fit above the bottom margin a new
    /// page is appended and the space is reserved at its top margin instead.
    /// A cursor already at the top margin never breaks: content taller than a
    /// whole page is placed there and overflows. In fixed-absolute mode the
    /// current (anchored) position is always returned.
    ///
    /// Panics if `height` is negative.
    pub fn reserve(&mut self, height: Pt) -> WriteOrigin {
        assert!(height >= Pt(0.0), "cannot reserve a negative height ({height:?})");

        let geometry = *self.geometry();
        let overflows = self.y + height > geometry.content_bottom();
        match self.mode {
            LayoutMode::Flowing if overflows && self.y > geometry.content_top() => {
                self.break_page();
            }
            LayoutMode::FixedAbsolute if overflows => {
                log::warn!(
                    "fixed content at y={:?} with height {:?} runs past the bottom margin",
                    self.y,
                    height
                );
            }
            _ => {}
        }

        let origin = WriteOrigin {
            x: geometry.content_left(),
            y: self.y,
            page: self.page_index(),
        };
        self.y += height;
        origin
    }

    /// Move the cursor to an absolute y, for fixed placement
    pub fn advance_to(&mut self, y: Pt) {
        self.y = y;
    }

    /// Move the cursor down by `amount` without drawing anything. Unlike
    /// [LayoutState::reserve], this never starts a new page.
    pub fn skip(&mut self, amount: Pt) {
        self.y = (self.y + amount).min(self.geometry().content_bottom());
    }

    fn break_page(&mut self) {
        self.document.add_page();
        self.y = self.geometry().content_top();
        log::debug!("page break, now on page {}", self.page_index());
    }

    /// The page currently being written
    pub fn page_mut(&mut self) -> &mut Page {
        self.document.last_page_mut()
    }

    /// Draw a single line of text whose line box starts at `top`
    pub fn draw_text(&mut self, text: &str, x: Pt, top: Pt, style: &Style) {
        if text.is_empty() {
            return;
        }
        let baseline = self.geometry().to_pdf_y(top + baseline_offset(style));
        self.page_mut().add_span(SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                font: style.font(),
                size: style.size,
            },
            colour: style.colour,
            coords: (x, baseline),
        });
    }

    /// Draw a horizontal rule from `x1` to `x2` at `y`
    pub fn draw_rule(&mut self, x1: Pt, x2: Pt, y: Pt, thickness: Pt, colour: Colour) {
        let y = self.geometry().to_pdf_y(y);
        self.page_mut().add_line(LineLayout {
            from: (x1, y),
            to: (x2, y),
            thickness,
            colour,
        });
    }

    /// Draw a rectangle whose top-left corner is at (`x`, `top`)
    pub fn draw_rect(
        &mut self,
        x: Pt,
        top: Pt,
        width: Pt,
        height: Pt,
        fill: Option<Colour>,
        stroke: Option<(Colour, Pt)>,
    ) {
        let rect = self.geometry().rect(x, top, width, height);
        self.page_mut().add_rect(RectLayout { rect, fill, stroke });
    }

    /// Finish the layout run and hand back the document.
    ///
    /// Panics if a block left styles pushed.
    pub fn into_document(self) -> Document {
        assert_eq!(
            self.style.depth(),
            0,
            "layout finished with unbalanced style pushes"
        );
        self.document
    }
}
