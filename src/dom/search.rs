//! Live filtering of the index-page location cards.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement};

use crate::search::normalize;

use super::query_all;

const SEARCH_INPUT_ID: &str = "search";
const CARD_SELECTOR: &str = ".location";

/// Attach the input listener when the page has a search box. The card list
/// is collected once; filtering toggles inline display and never removes
/// cards from the document. The whole list is re-evaluated on every
/// keystroke.
pub(crate) fn init(document: &Document) {
    let Some(input) = document
        .get_element_by_id(SEARCH_INPUT_ID)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };

    let cards: Vec<HtmlElement> = query_all(document, CARD_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();

    let input_el = input.clone();
    let oninput = Closure::wrap(Box::new(move |_: Event| {
        let query = normalize(&input_el.value());
        for card in &cards {
            let text = card.text_content().unwrap_or_default();
            let style = card.style();
            if normalize(&text).contains(&query) {
                let _ = style.remove_property("display");
            } else {
                let _ = style.set_property("display", "none");
            }
        }
    }) as Box<dyn FnMut(_)>);
    let _ = input.add_event_listener_with_callback("input", oninput.as_ref().unchecked_ref());
    // Listener lives as long as the page.
    oninput.forget();
}
