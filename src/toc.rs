//! Table-of-contents derivation from section snapshots.

use crate::sections::SectionSnapshot;

/// One link in the generated outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Identifier of the section the entry links to.
    pub target: String,
    /// Display text: first heading, or the identifier when headless.
    pub label: String,
}

impl TocEntry {
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

/// One entry per visible, identified section, in input (document) order.
/// Sections without an identifier are skipped silently. Deterministic in its
/// input, so rebuilding from the same page state is idempotent.
pub fn build_toc(sections: &[SectionSnapshot]) -> Vec<TocEntry> {
    sections
        .iter()
        .filter(|sec| !sec.should_hide())
        .filter_map(|sec| {
            let id = sec.id.as_deref()?;
            let label = match &sec.heading {
                Some(heading) => heading.trim().to_string(),
                None => id.to_string(),
            };
            Some(TocEntry {
                target: id.to_string(),
                label,
            })
        })
        .collect()
}
