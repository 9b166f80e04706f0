//! Templates as data: an ordered list of blocks plus everything needed to
//! lay them out, run by a single interpreter.

use crate::blocks::ContentBlock;
use crate::document::Document;
use crate::finalize::{finalize, Footer, SealedDocument};
use crate::info::Info;
use crate::layout::{LayoutMode, LayoutState, PageGeometry};
use crate::theme::Theme;
use crate::units::Pt;
use crate::PDFError;

/// A block and, for fixed layouts, the y (measured down from the top of the
/// page) its top edge is pinned to
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub anchor: Option<Pt>,
    pub block: ContentBlock,
}

/// A composition recipe: which blocks, in which order, on which pages.
///
/// Templates are plain values. New document types are made by composing
/// blocks into a template, and every template is laid out by the same
/// [DocumentTemplate::layout] interpreter.
#[derive(Debug, Clone)]
pub struct DocumentTemplate {
    pub name: String,
    pub geometry: PageGeometry,
    pub mode: LayoutMode,
    pub theme: Theme,
    pub placements: Vec<Placement>,
    pub footer: Option<Footer>,
    pub info: Info,
    /// Suggested filename for the finished PDF
    pub filename: String,
    pub compress: bool,
}

impl DocumentTemplate {
    /// A template whose blocks flow down the page and onto new pages
    pub fn flowing<S: ToString>(name: S, geometry: PageGeometry, theme: Theme) -> DocumentTemplate {
        DocumentTemplate::new(name, geometry, LayoutMode::Flowing, theme)
    }

    /// A single-page template whose blocks sit at fixed coordinates
    pub fn fixed<S: ToString>(name: S, geometry: PageGeometry, theme: Theme) -> DocumentTemplate {
        DocumentTemplate::new(name, geometry, LayoutMode::FixedAbsolute, theme)
    }

    fn new<S: ToString>(
        name: S,
        geometry: PageGeometry,
        mode: LayoutMode,
        theme: Theme,
    ) -> DocumentTemplate {
        let name = name.to_string();
        DocumentTemplate {
            filename: format!("{name}.pdf"),
            name,
            geometry,
            mode,
            theme,
            placements: Vec::new(),
            footer: None,
            info: Info::default(),
            compress: true,
        }
    }

    /// Append a block at the cursor
    pub fn push(&mut self, block: ContentBlock) -> &mut Self {
        self.placements.push(Placement {
            anchor: None,
            block,
        });
        self
    }

    /// Append a block pinned at `top`
    pub fn place(&mut self, top: Pt, block: ContentBlock) -> &mut Self {
        self.placements.push(Placement {
            anchor: Some(top),
            block,
        });
        self
    }

    pub fn blocks(&self) -> impl Iterator<Item = &ContentBlock> {
        self.placements.iter().map(|p| &p.block)
    }

    /// First pass: lay every block out and return the resulting pages.
    /// Footers are not drawn yet since the page count isn't final until
    /// this returns.
    pub fn layout(&self) -> Document {
        log::debug!(
            "laying out {} ({} blocks, {:?})",
            self.name,
            self.placements.len(),
            self.mode
        );

        let mut state = LayoutState::new(self.geometry, self.mode, self.theme.clone());
        for placement in self.placements.iter() {
            if let Some(anchor) = placement.anchor {
                state.advance_to(anchor);
            }
            placement.block.render(&mut state);
        }

        let mut document = state.into_document();
        document.set_info(self.info.clone());
        document.footer = self.footer.clone();
        document.filename = self.filename.clone();
        document.compress = self.compress;
        document
    }

    /// Lay the template out and finalize it
    pub fn render(&self) -> Result<SealedDocument, PDFError> {
        finalize(self.layout())
    }
}
