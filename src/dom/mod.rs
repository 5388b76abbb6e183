//! Thin adapter binding the pure modules to the live document.
//!
//! Everything here is wasm32-only and degrades to a silent no-op whenever a
//! page is missing the markup a feature expects.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

mod actions;
mod search;
mod sections;
mod theme;

/// Runs once when the module is instantiated on a page.
#[wasm_bindgen(start)]
pub fn start() {
    web_sys::console::log_1(
        &format!("gv-enhance {} ({})", env!("GV_VERSION"), env!("GV_GIT_SHA")).into(),
    );
    enhance();
}

/// Full page-load pass. Order matters only at the end: the TOC is built from
/// the outcome of the section visibility pass.
pub fn enhance() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    theme::init(&document);
    actions::stamp_year(&document);
    actions::bind_theme_toggles(&document);
    search::init(&document);
    sections::process(&document);
    actions::init_scroll_top(&window, &document);

    tracing::debug!("page enhancements initialized");
}

/// All elements matching `selector`; empty when the page has none.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
