//! Small web-sys helpers shared by the installers.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{MotionError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(MotionError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(MotionError::NoDocument)
}

/// Append a `<style>` block to `<head>` (or `<body>` if the page has no head).
pub fn inject_style(doc: &Document, css: &str) -> Result<()> {
    let style = doc.create_element("style")?;
    style.set_text_content(Some(css));
    if let Some(head) = doc.head() {
        head.append_child(&style)?;
    } else {
        doc.body().ok_or(MotionError::NoBody)?.append_child(&style)?;
    }
    Ok(())
}

/// Every element matching `selector` that is an `HtmlElement`. An invalid
/// selector yields an empty list.
pub fn query_all(root: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn query_one(root: &Document, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

pub fn query_child(parent: &Element, selector: &str) -> Option<HtmlElement> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

/// Set an inline style property; an empty value clears it.
pub fn set_style(el: &HtmlElement, prop: &str, value: &str) {
    let _ = el.style().set_property(prop, value);
}

pub fn apply_styles(el: &HtmlElement, styles: &[(&str, &str)]) {
    for (prop, value) in styles {
        set_style(el, prop, value);
    }
}
