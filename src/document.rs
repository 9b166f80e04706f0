use crate::finalize::Footer;
use crate::info::Info;
use crate::layout::PageGeometry;
use crate::metrics::BuiltinFont;
use crate::outline::Outline;
use crate::page::Page;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::PDFError;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf, Ref};

/// A document is the ordered set of pages produced by layout, plus the
/// metadata that travels with them into the PDF.
///
/// A document always has at least one page. Pages are only ever appended,
/// and each page's 1-based index is fixed when it is created, so an index
/// always matches the page's position. Documents are consumed by
/// [finalize](crate::finalize()), after which they can't be changed.
#[derive(Debug)]
pub struct Document {
    pub info: Info,
    pub geometry: PageGeometry,
    pages: Arena<Page>,
    page_order: Vec<Id<Page>>,
    pub outline: Outline,
    /// Footer stamped on every page when the document is finalized
    pub footer: Option<Footer>,
    /// Suggested filename for the finished PDF
    pub filename: String,
    /// Whether page content streams are deflated
    pub compress: bool,
}

impl Document {
    /// Create a document with a single empty page
    pub fn new(geometry: PageGeometry) -> Document {
        let mut document = Document {
            info: Info::default(),
            geometry,
            pages: Arena::new(),
            page_order: Vec::new(),
            outline: Outline::default(),
            footer: None,
            filename: "document.pdf".to_string(),
            compress: true,
        };
        document.add_page();
        document
    }

    /// Sets information about the document
    pub fn set_info(&mut self, info: Info) {
        self.info = info;
    }

    /// Append a fresh page to the end of the document and return its id
    pub fn add_page(&mut self) -> Id<Page> {
        let index = self.page_order.len() + 1;
        let page = Page::new(index, self.geometry.size(), self.geometry.margins);
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Pages in document order
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.page_order.iter().map(|id| &self.pages[*id])
    }

    /// Mutable access to every page in document order. Pages are append-only,
    /// so arena order is document order.
    pub fn pages_mut(&mut self) -> impl Iterator<Item = &mut Page> {
        self.pages.iter_mut().map(|(_, page)| page)
    }

    /// The page at 1-based `index`
    pub fn page(&self, index: usize) -> Option<&Page> {
        index
            .checked_sub(1)
            .and_then(|i| self.page_order.get(i))
            .map(|id| &self.pages[*id])
    }

    /// The last page, which is where layout is currently writing
    pub fn last_page_mut(&mut self) -> &mut Page {
        let id = *self
            .page_order
            .last()
            .expect("a document always has at least one page");
        &mut self.pages[id]
    }

    /// Add a bookmark in the document outline pointing at a position on the
    /// page with the given 1-based index
    pub fn add_bookmark<S: ToString>(&mut self, title: S, page: usize, top: Pt) {
        self.outline
            .add_bookmark(page.saturating_sub(1), top, title.to_string());
    }

    /// Serialize the document into PDF bytes. The entire document is rendered in
    /// memory first.
    pub(crate) fn write_pdf(self) -> Result<Vec<u8>, PDFError> {
        let Document {
            info,
            pages,
            page_order,
            outline,
            compress,
            ..
        } = self;

        if page_order.is_empty() {
            return Err(PDFError::EmptyDocument);
        }

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        info.write(&mut refs, &mut writer);

        // page refs are keyed by position in the document so bookmarks can
        // refer to pages by index
        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for font in BuiltinFont::ALL {
            let id = refs.gen(RefType::Font(font));
            writer
                .type1_font(id)
                .base_font(Name(font.base_font()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(PDFError::PageMissing)?;
            page.write(&mut refs, page_index, compress, &mut writer)?;
        }

        let outline_id = outline.write(&mut refs, &mut writer);

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        if let Some(outline_id) = outline_id {
            catalog.outlines(outline_id);
        }
        catalog.finish();

        Ok(writer.finish())
    }
}
