use super::{filename, flowing_template};
use crate::blocks::ContentBlock;
use crate::theme::RenderOptions;
use crate::DocumentTemplate;
use serde::{Deserialize, Serialize};

/// Ruled lines left under each topic for the reader's own notes
pub const REFLECTION_LINES: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideSection {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tips: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGuidePayload {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub sections: Vec<GuideSection>,
    #[serde(default)]
    pub include_writing_spaces: bool,
}

/// A flowing guide: an introduction, then one numbered (and bookmarked)
/// topic per section, each with optional tips and space to write.
pub fn resource_guide_template(
    payload: &ResourceGuidePayload,
    options: &RenderOptions,
) -> DocumentTemplate {
    let mut template = flowing_template("resource-guide", options);
    template.filename = filename("resource-guide", &[payload.title.as_str()]);
    template
        .info
        .title(&payload.title)
        .subject(&payload.description)
        .keywords(
            payload
                .sections
                .iter()
                .map(|section| section.title.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        );

    template
        .push(ContentBlock::BrandHeader { compact: false })
        .push(ContentBlock::Title {
            title: payload.title.clone(),
            subtitle: None,
        });

    if !payload.description.trim().is_empty() {
        template.push(ContentBlock::Section {
            heading: None,
            body: payload.description.clone(),
            bookmark: false,
        });
    }

    for (i, section) in payload.sections.iter().enumerate() {
        template.push(ContentBlock::Section {
            heading: Some(format!("{}. {}", i + 1, section.title)),
            body: section.body.clone(),
            bookmark: true,
        });

        if let Some(tips) = section.tips.as_ref().filter(|tips| !tips.is_empty()) {
            template.push(ContentBlock::bullets(Some("Key Tips"), tips.clone()));
        }

        if payload.include_writing_spaces {
            template.push(ContentBlock::WritingSpace {
                label: "Your Reflections".to_string(),
                lines: REFLECTION_LINES,
            });
        }
    }

    template.push(ContentBlock::Callout {
        heading: "Need More Support?".to_string(),
        body: "If things feel like too much, reach out to someone you trust or to a \
               qualified professional. You don't have to work through this alone."
            .to_string(),
    });

    template
}
