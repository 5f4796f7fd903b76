//! Defensive DOM access helpers.
//!
//! Every lookup returns an `Option`: the layer is loaded on pages that may
//! not carry all of its markup (the contact modal is only on some pages),
//! so a missing element turns the operation into a no-op instead of a
//! panic. Visibility is toggled through the page's `hidden`/`flex` utility
//! classes, which is also what drives the CSS transitions.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

/// The current document, when running in a normal page context.
pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Look up an element by id, typed to [`HtmlElement`].
pub fn by_id(id: &str) -> Option<HtmlElement> {
    document()?.get_element_by_id(id)?.dyn_into().ok()
}

/// All elements annotated with detail content.
pub fn interactive_elements() -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("[data-hover]") else {
        return Vec::new();
    };
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(element) = nodes.get(index).and_then(|node| node.dyn_into().ok()) {
            elements.push(element);
        }
    }
    elements
}

/// Whether the element opted out of popup behavior to stay navigable.
pub fn is_link(element: &Element) -> bool {
    element.get_attribute("data-is-link").as_deref() == Some("true")
}

/// Show an element by swapping the `hidden` class for `flex`.
pub fn reveal(id: &str) -> bool {
    let Some(element) = by_id(id) else {
        tracing::warn!("reveal: element #{id} not found");
        return false;
    };
    let classes = element.class_list();
    let _ = classes.remove_1("hidden");
    let _ = classes.add_1("flex");
    true
}

/// Hide an element by swapping the `flex` class for `hidden`.
pub fn conceal(id: &str) -> bool {
    let Some(element) = by_id(id) else {
        tracing::warn!("conceal: element #{id} not found");
        return false;
    };
    let classes = element.class_list();
    let _ = classes.remove_1("flex");
    let _ = classes.add_1("hidden");
    true
}

/// Resolve the action attribute for a click, walking up from the event
/// target so icons or text nested inside an action-tagged element still
/// dispatch.
pub fn action_attr_for(event: &Event) -> Option<String> {
    let target: Element = event.target()?.dyn_into().ok()?;
    let tagged = target.closest("[data-action]").ok()??;
    tagged.get_attribute("data-action")
}

/// Set an element's text content, clearing it when `text` is `None`.
pub fn set_text(id: &str, text: Option<&str>) {
    if let Some(element) = by_id(id) {
        element.set_text_content(text);
    }
}
