use super::{filename, long_date};
use crate::blocks::{ContentBlock, TextRole};
use crate::layout::{Align, PageGeometry};
use crate::theme::RenderOptions;
use crate::units::Pt;
use crate::DocumentTemplate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything printed on a certificate of completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificatePayload {
    pub recipient_name: String,
    pub achievement_title: String,
    /// May be empty, in which case it is left off the certificate
    #[serde(default)]
    pub achievement_description: String,
    pub completion_date: NaiveDate,
}

/// Where each element of the certificate starts, measured down from the top
/// of the page. Every element is pinned, so leaving one out never moves the
/// others.
pub mod anchors {
    use crate::units::Pt;

    pub const BRAND: Pt = Pt(64.0);
    pub const TITLE: Pt = Pt(112.0);
    pub const CERTIFIES: Pt = Pt(170.0);
    pub const RECIPIENT: Pt = Pt(196.0);
    pub const ACHIEVEMENT: Pt = Pt(256.0);
    pub const DESCRIPTION: Pt = Pt(300.0);
    pub const DATE: Pt = Pt(384.0);
    pub const SIGNATURE: Pt = Pt(470.0);
}

/// How far the description is inset from each side of the content area
const DESCRIPTION_INSET: Pt = Pt(96.0);

/// A single landscape page with everything centered at fixed positions
/// inside a decorative frame. Certificates have no footer.
pub fn certificate_template(
    payload: &CertificatePayload,
    options: &RenderOptions,
) -> DocumentTemplate {
    let geometry = PageGeometry::new(options.certificate_size, options.certificate_margins);
    let mut template =
        DocumentTemplate::fixed("certificate", geometry, options.theme.clone());
    template.compress = options.compress;
    template.filename = filename(
        "certificate",
        &["certificate", payload.recipient_name.as_str()],
    );
    template
        .info
        .title(format!(
            "Certificate of Completion: {}",
            payload.achievement_title
        ))
        .author(&options.theme.brand_name)
        .subject(&payload.recipient_name);

    let centered = |text: &str, role: TextRole| ContentBlock::line(text, role, Align::Center);

    template
        .push(ContentBlock::DecorativeFrame)
        .place(anchors::BRAND, ContentBlock::BrandHeader { compact: true })
        .place(
            anchors::TITLE,
            ContentBlock::Title {
                title: "Certificate of Completion".to_string(),
                subtitle: None,
            },
        )
        .place(
            anchors::CERTIFIES,
            centered("This certifies that", TextRole::Subtitle),
        )
        .place(
            anchors::RECIPIENT,
            centered(&payload.recipient_name, TextRole::Name),
        )
        .place(
            anchors::ACHIEVEMENT,
            centered(
                &format!("has successfully completed {}", payload.achievement_title),
                TextRole::Emphasis,
            ),
        );

    let description = payload.achievement_description.trim();
    if !description.is_empty() {
        template.place(
            anchors::DESCRIPTION,
            ContentBlock::TextLine {
                text: description.to_string(),
                role: TextRole::Body,
                align: Align::Center,
                inset: DESCRIPTION_INSET,
            },
        );
    }

    template
        .place(
            anchors::DATE,
            centered(
                &format!("Completed on {}", long_date(payload.completion_date)),
                TextRole::Body,
            ),
        )
        .place(
            anchors::SIGNATURE,
            ContentBlock::SignatureLine {
                caption: format!("{} Program Team", options.theme.brand_name),
            },
        );

    template
}
