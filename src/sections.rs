//! Section emptiness heuristic.
//!
//! Decisions are made on [`SectionSnapshot`]s — structural facts pulled out
//! of a section element by the adapter — so the heuristic is testable without
//! a document.

/// Headings stripped from the scratch copy before judging what remains.
pub const HEADING_SELECTOR: &str = "h1, h2, h3";
/// Heading the TOC label is taken from (first match).
pub const LABEL_SELECTOR: &str = "h2, h3";
/// Media that makes a section count as non-empty.
pub const MEDIA_SELECTOR: &str = "img, video, iframe, table";
/// List content that makes a section count as non-empty.
pub const LIST_SELECTOR: &str = "ul, ol, li";
/// Other content blocks that make a section count as non-empty.
pub const BLOCK_SELECTOR: &str = ".attraction, p, blockquote, pre, code";

/// Structural facts about one section, captured in document order and
/// evaluated independently of every other section.
#[derive(Debug, Clone, Default)]
pub struct SectionSnapshot {
    /// Identifier, if the element carries a non-empty `id`.
    pub id: Option<String>,
    /// Explicit hide flag (`data-hide="true"`, or pre-hidden markup).
    pub force_hide: bool,
    /// Text of the first `h2`/`h3`, untrimmed.
    pub heading: Option<String>,
    /// Text content with all headings removed.
    pub body_text: String,
    pub has_media: bool,
    pub has_list: bool,
    pub has_block: bool,
}

impl SectionSnapshot {
    /// Empty means nothing is left once headings are ignored: no media, no
    /// lists, no content blocks, and only whitespace text. A section holding
    /// just a heading is therefore empty and gets hidden; that is the
    /// intended reading, not an accident.
    pub fn is_empty(&self) -> bool {
        !self.has_media
            && !self.has_list
            && !self.has_block
            && collapse_whitespace(&self.body_text).is_empty()
    }

    /// Hidden when explicitly flagged or empty. There is no force-show
    /// escape hatch for an intentionally blank section.
    pub fn should_hide(&self) -> bool {
        self.force_hide || self.is_empty()
    }
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
