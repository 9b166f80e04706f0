//! The second pass over a laid-out document, and what comes out of it.
//!
//! Footers read "Page i of N", and N isn't known until every block has been
//! laid out. So footers are stamped here, once layout is over, by visiting
//! every page of the finished document. Sealing then serializes the pages and
//! hands back an immutable [SealedDocument].

use crate::document::Document;
use crate::layout::{aligned_x, baseline_offset, Align};
use crate::page::{SpanFont, SpanLayout};
use crate::style::Style;
use crate::units::Pt;
use crate::PDFError;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The line stamped at the bottom of every page
#[derive(Debug, Clone, PartialEq)]
pub struct Footer {
    pub year: i32,
    pub brand: String,
    pub style: Style,
    /// Distance from the bottom edge of the page to the top of the footer line
    pub offset: Pt,
}

impl Footer {
    pub fn text(&self, page: usize, page_count: usize) -> String {
        format!(
            "\u{a9} {} {} \u{2022} Page {page} of {page_count}",
            self.year, self.brand
        )
    }
}

/// Draw the footer on every page of `document`. Does nothing if the
/// document has no footer.
pub fn stamp_footers(document: &mut Document) {
    let Some(footer) = document.footer.clone() else {
        return;
    };

    let page_count = document.page_count();
    let geometry = document.geometry;
    let top = geometry.height - footer.offset;
    let baseline = geometry.to_pdf_y(top + baseline_offset(&footer.style));

    for page in document.pages_mut() {
        let text = footer.text(page.index, page_count);
        let x = aligned_x(
            &text,
            &footer.style,
            geometry.content_left(),
            geometry.content_width(),
            Align::Center,
        );
        page.add_span(SpanLayout {
            text,
            font: SpanFont {
                font: footer.style.font(),
                size: footer.style.size,
            },
            colour: footer.style.colour,
            coords: (x, baseline),
        });
    }
}

/// A finished PDF. There is no way to change it: all that's left is to
/// deliver it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedDocument {
    bytes: Vec<u8>,
    filename: String,
    page_count: usize,
}

impl SealedDocument {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The filename the document suggests saving itself as
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn write_to<W: Write>(&self, mut w: W) -> Result<(), PDFError> {
        w.write_all(&self.bytes).map_err(Into::into)
    }
}

/// Run the footer pass and serialize the document. Consumes the document, so
/// nothing can change it afterwards.
pub fn finalize(mut document: Document) -> Result<SealedDocument, PDFError> {
    stamp_footers(&mut document);

    let page_count = document.page_count();
    let filename = document.filename.clone();
    let bytes = document.write_pdf()?;

    log::info!(
        "sealed {filename}: {page_count} page(s), {} bytes",
        bytes.len()
    );

    Ok(SealedDocument {
        bytes,
        filename,
        page_count,
    })
}

/// Whatever gets a sealed document in front of the user
pub trait FileDelivery {
    fn deliver(&self, document: &SealedDocument) -> Result<(), PDFError>;
}

/// Saves sealed documents into a directory under their suggested filename
#[derive(Debug, Clone)]
pub struct DirectoryDelivery {
    dir: PathBuf,
}

impl DirectoryDelivery {
    pub fn new<P: AsRef<Path>>(dir: P) -> DirectoryDelivery {
        DirectoryDelivery {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Where a document would be saved
    pub fn path_for(&self, document: &SealedDocument) -> PathBuf {
        self.dir.join(document.filename())
    }
}

impl FileDelivery for DirectoryDelivery {
    fn deliver(&self, document: &SealedDocument) -> Result<(), PDFError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(document);
        let file = std::fs::File::create(&path)?;
        document.write_to(std::io::BufWriter::new(file))?;
        log::info!("saved {}", path.display());
        Ok(())
    }
}
