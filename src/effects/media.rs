//! Videos, in-page anchor scrolling and the hero placeholder.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, HtmlElement, HtmlMediaElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::console;
use crate::dom;
use crate::error::{MotionError, Result};

/// Selector for the in-page target of a fragment link; `None` for anything
/// else, including a bare `#`.
pub fn fragment_selector(href: &str) -> Option<&str> {
    if href.starts_with('#') && href.len() > 1 { Some(href) } else { None }
}

pub const HERO_PLACEHOLDER_TEXT: &str = "TEAM";

const HERO_BACKGROUND: &str = "linear-gradient(135deg, #d4c4b4 0%, #a89484 100%)";
const HERO_PLACEHOLDER_CSS: &str = "position: absolute; top: 50%; left: 50%; \
    transform: translate(-50%, -50%); font-size: 48px; \
    color: rgba(58, 48, 41, 0.3); font-weight: bold;";

// --- DOM ---------------------------------------------------------------------

/// Start every `<video>` once its data loads. Autoplay rejection is logged
/// and otherwise ignored.
pub fn install_autoplay(doc: &Document) -> Result<()> {
    for el in dom::query_all(doc, "video") {
        let Ok(media) = el.dyn_into::<HtmlMediaElement>() else {
            continue;
        };
        let target = media.clone();
        let closure = Closure::wrap(Box::new(move || {
            let Ok(promise) = target.play() else {
                return;
            };
            spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    let reason = MotionError::from(e);
                    console::log(&format!("Video autoplay was prevented: {}", reason));
                }
            });
        }) as Box<dyn FnMut()>);
        media.add_event_listener_with_callback("loadeddata", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// `nav a[href^="#"]` scrolls smoothly instead of jumping.
pub fn install_smooth_scroll(doc: &Document) -> Result<()> {
    for link in dom::query_all(doc, "nav a") {
        let anchor = link.clone();
        let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            if !href.starts_with('#') {
                return;
            }
            evt.prevent_default();
            let Some(selector) = fragment_selector(&href) else {
                return;
            };
            let target = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector(selector).ok().flatten());
            if let Some(section) = target {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }) as Box<dyn FnMut(_)>);
        link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

pub fn decorate_hero(doc: &Document, hero: &HtmlElement) -> Result<()> {
    dom::set_style(hero, "background", HERO_BACKGROUND);
    dom::set_style(hero, "position", "relative");
    let placeholder = doc.create_element("div")?;
    placeholder.set_attribute("style", HERO_PLACEHOLDER_CSS)?;
    placeholder.set_text_content(Some(HERO_PLACEHOLDER_TEXT));
    hero.append_child(&placeholder)?;
    Ok(())
}
