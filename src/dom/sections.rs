//! Section visibility pass and TOC rendering.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::sections::{
    SectionSnapshot, BLOCK_SELECTOR, HEADING_SELECTOR, LABEL_SELECTOR, LIST_SELECTOR,
    MEDIA_SELECTOR,
};
use crate::toc::build_toc;

const SECTION_SELECTOR: &str = ".section";
const TOC_LIST_SELECTOR: &str = "[data-toc]";
const TOC_CARD_SELECTOR: &str = ".toc-card";

/// Hide empty or flagged sections, then rebuild the TOC from what is left.
/// Snapshots are taken up front and drive both steps, so the TOC can never
/// reference a section this pass hides.
pub(crate) fn process(document: &Document) {
    let elements = super::query_all(document, SECTION_SELECTOR);
    let snapshots: Vec<SectionSnapshot> = elements.iter().map(snapshot).collect();

    let mut hidden = 0usize;
    for (el, snap) in elements.iter().zip(&snapshots) {
        if snap.should_hide() {
            let _ = el.set_attribute("hidden", "");
            let _ = el.set_attribute("aria-hidden", "true");
            hidden += 1;
        }
    }
    tracing::debug!(total = snapshots.len(), hidden, "section visibility pass");

    render_toc(document, &snapshots);
}

/// Pull the structural facts the emptiness heuristic and the TOC need out of
/// a live section element.
fn snapshot(el: &Element) -> SectionSnapshot {
    let id = el.get_attribute("id").filter(|id| !id.is_empty());
    // Markup may pre-hide a section directly; that counts as an explicit flag.
    let force_hide =
        el.get_attribute("data-hide").is_some_and(|v| v == "true") || el.has_attribute("hidden");
    let heading = el
        .query_selector(LABEL_SELECTOR)
        .ok()
        .flatten()
        .and_then(|h| h.text_content());

    // Judge the remaining content on a scratch copy with the headings removed.
    let Some(scratch) = el
        .clone_node_with_deep(true)
        .ok()
        .map(|node| node.unchecked_into::<Element>())
    else {
        // Clone failure: probe the live element instead. Heading text stays
        // in, which errs toward treating the section as non-empty.
        return SectionSnapshot {
            id,
            force_hide,
            heading,
            body_text: el.text_content().unwrap_or_default(),
            has_media: has_match(el, MEDIA_SELECTOR),
            has_list: has_match(el, LIST_SELECTOR),
            has_block: has_match(el, BLOCK_SELECTOR),
        };
    };

    if let Ok(headings) = scratch.query_selector_all(HEADING_SELECTOR) {
        for i in 0..headings.length() {
            if let Some(h) = headings.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                h.remove();
            }
        }
    }

    SectionSnapshot {
        id,
        force_hide,
        heading,
        body_text: scratch.text_content().unwrap_or_default(),
        has_media: has_match(&scratch, MEDIA_SELECTOR),
        has_list: has_match(&scratch, LIST_SELECTOR),
        has_block: has_match(&scratch, BLOCK_SELECTOR),
    }
}

fn has_match(el: &Element, selector: &str) -> bool {
    el.query_selector(selector).ok().flatten().is_some()
}

/// Rebuild the `[data-toc]` list in place; with nothing to link, hide the
/// enclosing TOC card instead.
fn render_toc(document: &Document, snapshots: &[SectionSnapshot]) {
    let Ok(Some(list)) = document.query_selector(TOC_LIST_SELECTOR) else {
        return;
    };

    let entries = build_toc(snapshots);
    list.set_inner_html("");
    for entry in &entries {
        let Ok(item) = document.create_element("li") else {
            continue;
        };
        let Ok(anchor) = document.create_element("a") else {
            continue;
        };
        let _ = anchor.set_attribute("href", &entry.href());
        anchor.set_text_content(Some(&entry.label));
        let _ = item.append_child(&anchor);
        let _ = list.append_child(&item);
    }

    if entries.is_empty() {
        if let Ok(Some(card)) = list.closest(TOC_CARD_SELECTOR) {
            let _ = card.set_attribute("hidden", "");
            let _ = card.set_attribute("aria-hidden", "true");
        }
    }
    tracing::debug!(entries = entries.len(), "toc rebuilt");
}
