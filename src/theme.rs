//! Rendering configuration: the brand theme every template draws with and
//! the options an [Engine](crate::Engine) is created with.

use crate::colour::{colours, Colour};
use crate::layout::Margins;
use crate::metrics::FontFamily;
use crate::pagesize::{self, PageOrientation, PageSize};
use crate::style::{Style, LINE_HEIGHT};
use crate::units::*;
use serde::{Deserialize, Serialize};

/// Brand identity and type scale. Every style a block draws with is derived
/// from here, so a theme change restyles all three templates at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub brand_name: String,
    pub tagline: String,
    pub primary: Colour,
    pub accent: Colour,
    pub text: Colour,
    pub muted: Colour,
    pub rule: Colour,
    pub family: FontFamily,
    pub title_size: Pt,
    pub heading_size: Pt,
    pub body_size: Pt,
    pub caption_size: Pt,
    /// Line height as a multiple of the font size
    pub leading: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            brand_name: "Wellspring".to_string(),
            tagline: "Small steps, steady growth".to_string(),
            primary: colours::BRAND_PRIMARY,
            accent: colours::BRAND_ACCENT,
            text: colours::INK,
            muted: colours::MUTED,
            rule: colours::RULE,
            family: FontFamily::Helvetica,
            title_size: Pt(24.0),
            heading_size: Pt(14.0),
            body_size: Pt(11.0),
            caption_size: Pt(9.0),
            leading: LINE_HEIGHT,
        }
    }
}

impl Theme {
    fn base(&self, size: Pt, colour: Colour) -> Style {
        Style {
            family: self.family,
            size,
            colour,
            leading: self.leading,
            ..Style::default()
        }
    }

    /// Running text; the style a document starts and ends in
    pub fn body(&self) -> Style {
        self.base(self.body_size, self.text)
    }

    pub fn title(&self) -> Style {
        self.base(self.title_size, self.primary).bold()
    }

    pub fn subtitle(&self) -> Style {
        self.base(self.heading_size, self.muted)
    }

    pub fn heading(&self) -> Style {
        self.base(self.heading_size, self.accent).bold()
    }

    pub fn caption(&self) -> Style {
        self.base(self.caption_size, self.muted)
    }

    pub fn brand(&self) -> Style {
        self.base(self.heading_size * 1.3, self.primary).bold()
    }

    pub fn stat_value(&self) -> Style {
        self.base(self.title_size, self.accent).bold()
    }

    pub fn stat_label(&self) -> Style {
        self.base(self.caption_size, self.muted)
    }

    pub fn footer(&self) -> Style {
        self.base(self.caption_size * 0.9, self.muted)
    }
}

/// Options shared by every document an engine renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    pub theme: Theme,
    /// Year printed in footers; the current year when unset
    pub footer_year: Option<i32>,
    /// Flate-compress page content streams
    pub compress: bool,
    /// Page size of the flowing (portrait) templates
    pub page_size: PageSize,
    pub margins: Margins,
    /// Page size of the certificate, which is laid out in landscape
    pub certificate_size: PageSize,
    pub certificate_margins: Margins,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            theme: Theme::default(),
            footer_year: None,
            compress: true,
            page_size: pagesize::LETTER.portrait(),
            margins: Margins::symmetric(In(0.9), In(0.85)),
            certificate_size: pagesize::LETTER.landscape(),
            certificate_margins: Margins::all(In(0.5)),
        }
    }
}

impl RenderOptions {
    pub fn new() -> RenderOptions {
        RenderOptions::default()
    }

    pub fn theme(&mut self, theme: Theme) -> &mut Self {
        self.theme = theme;
        self
    }

    pub fn footer_year(&mut self, year: i32) -> &mut Self {
        self.footer_year = Some(year);
        self
    }

    pub fn compress(&mut self, compress: bool) -> &mut Self {
        self.compress = compress;
        self
    }

    pub fn page_size(&mut self, size: PageSize) -> &mut Self {
        self.page_size = size.portrait();
        self
    }

    pub fn margins(&mut self, margins: Margins) -> &mut Self {
        self.margins = margins;
        self
    }

    /// The footer year to print: the configured one, or the current year
    pub fn year(&self) -> i32 {
        use chrono::Datelike;
        self.footer_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}
