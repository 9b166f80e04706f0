//! The active text style during rendering, and the stack it's saved on.

use crate::colour::{colours, Colour};
use crate::metrics::{BuiltinFont, FontFamily, FontWeight};
use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// Line height as a multiple of the font size
pub const LINE_HEIGHT: f32 = 1.3;

/// A concrete text style: which font, how big, what colour
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub size: Pt,
    pub colour: Colour,
    /// Line height as a multiple of `size`
    pub leading: f32,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            family: FontFamily::Helvetica,
            weight: FontWeight::Regular,
            size: Pt(11.0),
            colour: colours::INK,
            leading: LINE_HEIGHT,
        }
    }
}

impl Style {
    pub fn font(&self) -> BuiltinFont {
        BuiltinFont::select(self.family, self.weight)
    }

    /// Vertical distance between consecutive baselines
    pub fn line_height(&self) -> Pt {
        self.size * self.leading
    }

    pub fn with_size(mut self, size: Pt) -> Style {
        self.size = size;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Style {
        self.weight = weight;
        self
    }

    pub fn bold(self) -> Style {
        self.with_weight(FontWeight::Bold)
    }

    pub fn with_colour(mut self, colour: Colour) -> Style {
        self.colour = colour;
        self
    }

    pub fn with_family(mut self, family: FontFamily) -> Style {
        self.family = family;
        self
    }
}

/// A stack of saved styles. Blocks that change style push before drawing
/// and pop afterwards, so the body style is restored for whatever comes next.
///
/// Pushes and pops must balance: popping with nothing saved is a bug in the
/// calling block and panics.
#[derive(Debug, Clone)]
pub struct StyleContext {
    current: Style,
    saved: Vec<Style>,
}

impl Default for StyleContext {
    fn default() -> Self {
        StyleContext::new(Style::default())
    }
}

impl StyleContext {
    /// Create a context whose base style is `base`
    pub fn new(base: Style) -> StyleContext {
        StyleContext {
            current: base,
            saved: Vec::new(),
        }
    }

    /// The style currently in effect
    pub fn current(&self) -> Style {
        self.current
    }

    /// Save the current style and make `style` active
    pub fn push(&mut self, style: Style) {
        self.saved.push(self.current);
        self.current = style;
    }

    /// Restore the most recently saved style
    pub fn pop(&mut self) {
        self.current = self
            .saved
            .pop()
            .expect("style pop without a matching push");
    }

    /// How many styles are currently saved
    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_without_push() {
        let ctx = StyleContext::default();
        assert_eq!(ctx.current(), Style::default());
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn push_pop_restores() {
        let mut ctx = StyleContext::default();
        let heading = Style::default().bold().with_size(Pt(16.0));
        ctx.push(heading);
        assert_eq!(ctx.current().font(), BuiltinFont::HelveticaBold);
        ctx.push(heading.with_colour(colours::BRAND_ACCENT));
        ctx.pop();
        assert_eq!(ctx.current(), heading);
        ctx.pop();
        assert_eq!(ctx.current(), Style::default());
    }

    #[test]
    #[should_panic(expected = "style pop without a matching push")]
    fn unbalanced_pop_panics() {
        let mut ctx = StyleContext::default();
        ctx.pop();
    }

    #[test]
    fn line_height_scales_with_size() {
        let style = Style::default().with_size(Pt(10.0));
        assert!((style.line_height().0 - 13.0).abs() < 1e-4);
    }
}
