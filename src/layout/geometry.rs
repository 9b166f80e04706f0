use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;

/// The fixed dimensions shared by every page of a document.
///
/// Layout measures y downwards from the top edge of the page; primitives are
/// stored in PDF user space, whose origin is the bottom-left corner.
/// [PageGeometry::to_pdf_y] converts between the two.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageGeometry {
    pub width: Pt,
    pub height: Pt,
    pub margins: Margins,
}

impl PageGeometry {
    /// Panics if the margins leave no content area, which is a template bug
    pub fn new(size: PageSize, margins: Margins) -> PageGeometry {
        let (width, height) = size;
        assert!(
            margins.left + margins.right < width && margins.top + margins.bottom < height,
            "margins {margins:?} leave no content area on a {width:?} x {height:?} page"
        );
        PageGeometry {
            width,
            height,
            margins,
        }
    }

    pub fn size(&self) -> PageSize {
        (self.width, self.height)
    }

    /// Width available between the left and right margins
    pub fn content_width(&self) -> Pt {
        self.width - self.margins.left - self.margins.right
    }

    /// Height available between the top and bottom margins
    pub fn content_height(&self) -> Pt {
        self.height - self.margins.top - self.margins.bottom
    }

    /// The first y a flowing cursor writes at
    pub fn content_top(&self) -> Pt {
        self.margins.top
    }

    /// The y a flowing cursor may never write past
    pub fn content_bottom(&self) -> Pt {
        self.height - self.margins.bottom
    }

    /// Left edge of the content area
    pub fn content_left(&self) -> Pt {
        self.margins.left
    }

    /// Convert a top-down layout y into PDF user space
    pub fn to_pdf_y(&self, y: Pt) -> Pt {
        self.height - y
    }

    /// A rectangle given in layout coordinates (top-left corner plus size),
    /// converted to PDF user space
    pub fn rect(&self, x: Pt, top: Pt, width: Pt, height: Pt) -> Rect {
        Rect {
            x1: x,
            y1: self.to_pdf_y(top + height),
            x2: x + width,
            y2: self.to_pdf_y(top),
        }
    }

    /// The whole page as a rectangle
    pub fn page_rect(&self) -> Rect {
        self.rect(Pt(0.0), Pt(0.0), self.width, self.height)
    }
}
