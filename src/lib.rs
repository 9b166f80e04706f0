//! A composition and pagination engine for branded PDF documents.
//!
//! Documents are built from [ContentBlock]s arranged by a
//! [DocumentTemplate]. Laying a template out walks its blocks with a
//! write cursor that starts new pages as needed; finalizing the result
//! stamps "Page i of N" footers once the page count is known and serializes
//! everything into a [SealedDocument].
//!
//! Three templates ship with the crate: a landscape certificate of
//! completion, a progress report and a resource guide.
//!
//! ```
//! use chrono::NaiveDate;
//! use pdf_compose::CertificatePayload;
//!
//! let payload = CertificatePayload {
//!     recipient_name: "Avery Quinn".to_string(),
//!     achievement_title: "Mindful Mornings".to_string(),
//!     achievement_description: String::new(),
//!     completion_date: NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
//! };
//! let certificate = pdf_compose::render_certificate(&payload).unwrap();
//! assert_eq!(certificate.page_count(), 1);
//! assert!(certificate.bytes().starts_with(b"%PDF-"));
//! assert_eq!(certificate.filename(), "certificate-avery-quinn.pdf");
//! ```

mod blocks;
pub use blocks::*;

mod colour;
pub use colour::*;

pub(crate) mod content;

mod document;
pub use document::*;

mod engine;
pub use engine::*;

mod error;
pub use error::*;

mod finalize;
pub use finalize::*;

mod info;
pub use info::*;

/// Page geometry, the write cursor and text measurement
pub mod layout;

/// Widths and encodings of the built-in PDF fonts
pub mod metrics;

mod outline;
pub use outline::*;

mod page;
pub use page::*;

/// Common page sizes
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod style;
pub use style::*;

mod template;
pub use template::*;

/// The document types the engine produces and their payloads
pub mod templates;
pub use templates::{
    certificate_template, progress_report_template, resource_guide_template,
    ActivityCount, CertificatePayload, DateRange, GuideSection, MoodEntry, MoodSummary,
    ProgressReportPayload, ResourceGuidePayload,
};

mod theme;
pub use theme::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
