//! The document types the engine knows how to produce, each expressed as a
//! [DocumentTemplate] built from a content payload.

mod certificate;
mod progress_report;
mod resource_guide;

pub use certificate::*;
pub use progress_report::*;
pub use resource_guide::*;

use crate::finalize::Footer;
use crate::layout::PageGeometry;
use crate::theme::RenderOptions;
use crate::DocumentTemplate;
use chrono::NaiveDate;

/// Lowercase `text` and collapse every run of other characters into a single
/// `-`, for use in filenames
pub fn slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// A `.pdf` filename from the slugs of `parts`. Parts with nothing to slug
/// are left out; when none are left the name is `fallback`.
pub(crate) fn filename(fallback: &str, parts: &[&str]) -> String {
    let slugs: Vec<String> = parts
        .iter()
        .map(|part| slug(part))
        .filter(|slug| !slug.is_empty())
        .collect();
    if slugs.is_empty() {
        format!("{fallback}.pdf")
    } else {
        format!("{}.pdf", slugs.join("-"))
    }
}

/// "March 5, 2026"
pub(crate) fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Mar 5, 2026"
pub(crate) fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Footer centered halfway down the bottom margin
fn footer(options: &RenderOptions) -> Footer {
    let style = options.theme.footer();
    Footer {
        year: options.year(),
        brand: options.theme.brand_name.clone(),
        style,
        offset: options.margins.bottom * 0.5 + style.line_height() * 0.5,
    }
}

/// An empty flowing template on the portrait page, with the footer and
/// author filled in
fn flowing_template(name: &str, options: &RenderOptions) -> DocumentTemplate {
    let geometry = PageGeometry::new(options.page_size, options.margins);
    let mut template = DocumentTemplate::flowing(name, geometry, options.theme.clone());
    template.footer = Some(footer(options));
    template.compress = options.compress;
    template.info.author(&options.theme.brand_name);
    template
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_filename_safe() {
        assert_eq!(slug("Jordan  O'Neil"), "jordan-o-neil");
        assert_eq!(slug("  Coping with Stress! "), "coping-with-stress");
        assert_eq!(slug("???"), "");
        assert_eq!(slug("\u{674e}\u{660e}"), "");
    }

    #[test]
    fn filenames_fall_back_when_nothing_slugs() {
        assert_eq!(filename("guide", &["Coping with Stress"]), "coping-with-stress.pdf");
        assert_eq!(filename("guide", &["\u{5fc3}\u{7406}\u{30ac}\u{30a4}\u{30c9}"]), "guide.pdf");
        assert_eq!(filename("guide", &["", "  "]), "guide.pdf");
        assert_eq!(
            filename("certificate", &["certificate", "\u{674e}\u{660e}"]),
            "certificate.pdf"
        );
        assert_eq!(
            filename("report", &["report", "Zo\u{eb} Park", "2026-03-01"]),
            "report-zo-park-2026-03-01.pdf"
        );
    }

    #[test]
    fn dates_are_spelled_out() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(long_date(date), "March 5, 2026");
        assert_eq!(short_date(date), "Mar 5, 2026");
    }
}
