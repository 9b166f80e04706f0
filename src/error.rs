use thiserror::Error;

/// All errors that the crate can generate.
///
/// Layout itself never fails: overflowing content is drawn anyway and
/// template bugs panic. What's left are the serialization and delivery steps.
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred while delivering a sealed document
    Io(#[from] std::io::Error),

    #[error("page order refers to a page that doesn't exist")]
    /// The document's page order refers to a page missing from its arena
    PageMissing,

    #[error("document has no pages")]
    /// A document reached serialization without any pages
    EmptyDocument,
}

/// Result alias for the crate's fallible operations
pub type Result<T> = std::result::Result<T, PDFError>;
