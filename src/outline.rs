use pdf_writer::{Finish, Pdf, TextStr};

use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;

/// The document outline (bookmarks panel): a flat list of entries, each
/// jumping to a position on a page
#[derive(Default, Debug)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    /// 0-based position of the target page in the document
    pub page_index: usize,
    /// Vertical position on the target page, in PDF user space
    pub top: Pt,
    pub title: String,
}

impl Outline {
    pub fn add_bookmark(&mut self, page_index: usize, top: Pt, title: String) {
        self.entries.push(OutlineEntry {
            page_index,
            top,
            title,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the outline and returns the ref of its root, or [None] when
    /// there are no entries to write
    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        writer: &mut Pdf,
    ) -> Option<pdf_writer::Ref> {
        // only entries whose page was written can be linked to
        let targets: Vec<(&OutlineEntry, pdf_writer::Ref)> = self
            .entries
            .iter()
            .filter_map(|entry| match refs.get(RefType::Page(entry.page_index)) {
                Some(page_ref) => Some((entry, page_ref)),
                None => {
                    log::warn!(
                        "bookmark {:?} points at missing page {}",
                        entry.title,
                        entry.page_index
                    );
                    None
                }
            })
            .collect();
        if targets.is_empty() {
            return None;
        }

        // generate IDs for everything
        let outlines_id = refs.gen(RefType::Outlines);
        let entry_ids: Vec<pdf_writer::Ref> = (0..targets.len())
            .map(|i| refs.gen(RefType::OutlineEntry(i)))
            .collect();

        // write the root outline
        let mut outline = writer.outline(outlines_id);
        outline.first(entry_ids[0]);
        outline.last(entry_ids[entry_ids.len() - 1]);
        outline.count(entry_ids.len() as i32);
        outline.finish();

        // write all our items
        for (i, (entry, page_ref)) in targets.iter().enumerate() {
            let mut item = writer.outline_item(entry_ids[i]);
            item.parent(outlines_id);
            item.title(TextStr(entry.title.as_str()));
            if i > 0 {
                item.prev(entry_ids[i - 1]);
            }
            if i + 1 < entry_ids.len() {
                item.next(entry_ids[i + 1]);
            }
            item.dest().page(*page_ref).xyz(0.0, *entry.top, None);
        }

        Some(outlines_id)
    }
}
