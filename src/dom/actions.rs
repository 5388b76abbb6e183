//! Small page actions: year stamping, theme toggle wiring, scroll to top.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, ScrollBehavior, ScrollToOptions, Window};

use super::{query_all, theme};

const SCROLL_TOP_SELECTOR: &str = r#"[data-action="scroll-top"]"#;

/// Stamp the current four-digit year into every `[data-year]` placeholder.
/// Computed once at load; it does not live-update across midnight.
pub(crate) fn stamp_year(document: &Document) {
    let year = js_sys::Date::new_0().get_full_year().to_string();
    for el in query_all(document, "[data-year]") {
        el.set_text_content(Some(&year));
    }
}

/// Wire every theme-toggle control on the page.
pub(crate) fn bind_theme_toggles(document: &Document) {
    for button in query_all(document, theme::TOGGLE_SELECTOR) {
        let doc = document.clone();
        let onclick = Closure::wrap(Box::new(move |_: Event| {
            theme::toggle(&doc);
        }) as Box<dyn FnMut(_)>);
        let _ = button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref());
        // Listener lives as long as the page.
        onclick.forget();
    }
}

/// Smooth-scroll the viewport to the top when the control is present.
pub(crate) fn init_scroll_top(window: &Window, document: &Document) {
    let Some(button) = query_all(document, SCROLL_TOP_SELECTOR).into_iter().next() else {
        return;
    };
    let win = window.clone();
    let onclick = Closure::wrap(Box::new(move |_: Event| {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    }) as Box<dyn FnMut(_)>);
    let _ = button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref());
    onclick.forget();
}
