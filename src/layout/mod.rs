//! Page geometry, the write cursor, and text measurement.
//!
//! Layout measures y downwards from the top edge of a page: a flowing
//! cursor starts at the top margin and advances towards the bottom margin,
//! moving onto a fresh page whenever a reservation doesn't fit. Primitives
//! are converted to PDF user space (origin bottom-left) as they are drawn.
//!
//! # Example
//!
//! ```
//! use pdf_compose::layout::{LayoutMode, LayoutState, Margins, PageGeometry};
//! use pdf_compose::{pagesize, In, Pt, Theme};
//!
//! let geometry = PageGeometry::new(pagesize::LETTER, Margins::all(In(1.0)));
//! let mut state = LayoutState::new(geometry, LayoutMode::Flowing, Theme::default());
//!
//! let first = state.reserve(Pt(600.0));
//! assert_eq!(first.page, 1);
//!
//! // 600pt of the 648pt content area is used, so this moves to page 2
//! let second = state.reserve(Pt(100.0));
//! assert_eq!(second.page, 2);
//! assert_eq!(second.y, Pt(72.0));
//! ```

mod cursor;
mod geometry;
mod margins;
mod text;

pub use cursor::*;
pub use geometry::*;
pub use margins::*;
pub use text::*;
