use crate::colour::Colour;
use crate::content::render_contents;
use crate::layout::Margins;
use crate::metrics::BuiltinFont;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use crate::PDFError;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Name, Pdf};

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub font: BuiltinFont,
    pub size: Pt,
}

/// A run of text drawn on a single baseline
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    /// Baseline start, in PDF user space
    pub coords: (Pt, Pt),
}

/// A straight stroked line
#[derive(Clone, PartialEq, Debug)]
pub struct LineLayout {
    pub from: (Pt, Pt),
    pub to: (Pt, Pt),
    pub thickness: Pt,
    pub colour: Colour,
}

/// A rectangle, filled and/or stroked
#[derive(Clone, PartialEq, Debug)]
pub struct RectLayout {
    pub rect: Rect,
    pub fill: Option<Colour>,
    pub stroke: Option<(Colour, Pt)>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(SpanLayout),
    Line(LineLayout),
    Rect(RectLayout),
}

/// One page of a document: its boxes and the primitives drawn on it, in
/// drawing order
#[derive(Debug)]
pub struct Page {
    /// 1-based position of the page in its document, fixed when the page is created
    pub index: usize,
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The primitives drawn on the page
    pub contents: Vec<PageContents>,
}

impl Page {
    /// Create a new page with the given 1-based index, size and margins
    pub fn new(index: usize, size: PageSize, margins: Margins) -> Page {
        let (width, height) = size;
        Page {
            index,
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(span));
    }

    pub fn add_line(&mut self, line: LineLayout) {
        self.contents.push(PageContents::Line(line));
    }

    pub fn add_rect(&mut self, rect: RectLayout) {
        self.contents.push(PageContents::Rect(rect));
    }

    /// Every text span on the page, in drawing order
    pub fn spans(&self) -> impl Iterator<Item = &SpanLayout> {
        self.contents.iter().filter_map(|c| match c {
            PageContents::Text(span) => Some(span),
            _ => None,
        })
    }

    /// Whether any span on the page contains `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        self.spans().any(|span| span.text.contains(needle))
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        compress: bool,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs.get(RefType::Page(page_index)).ok_or(PDFError::PageMissing)?;
        let page_tree = refs.get(RefType::PageTree).ok_or(PDFError::PageMissing)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(page_tree);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for font in BuiltinFont::ALL {
            if let Some(font_ref) = refs.get(RefType::Font(font)) {
                resource_fonts.pair(Name(font.resource_name()), font_ref);
            }
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = render_contents(&self.contents);
        if compress {
            let compressed =
                compress_to_vec_zlib(&rendered, CompressionLevel::DefaultCompression as u8);
            writer
                .stream(content_id, compressed.as_slice())
                .filter(Filter::FlateDecode);
        } else {
            writer.stream(content_id, rendered.as_slice());
        }

        Ok(())
    }
}
