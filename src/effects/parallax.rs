//! Scroll-driven parallax. Offsets are pure functions of the scroll
//! position; the DOM side batches updates into one animation frame per
//! scroll burst.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::dom;
use crate::error::Result;

/// Slogan lines move only once the page has scrolled past this many pixels.
pub const SLOGAN_THRESHOLD_PX: f64 = 30.0;

/// `(we_ignite_y, ideas_y)`, or `None` to clear both transforms.
pub fn slogan_offsets(scrolled: f64) -> Option<(f64, f64)> {
    if scrolled > SLOGAN_THRESHOLD_PX {
        let rate = scrolled * -0.1;
        Some((rate, rate * 0.8))
    } else {
        None
    }
}

/// Home-page video containers: the first drifts faster than the rest.
pub fn video_offset(index: usize, scrolled: f64) -> f64 {
    let speed = if index == 0 { 0.5 } else { 0.3 };
    -(scrolled * speed)
}

/// About-page cinematic blocks: each successive block moves 0.1 faster.
pub fn cinematic_offset(index: usize, scrolled: f64) -> f64 {
    scrolled * (index as f64 + 1.0) * 0.1
}

pub fn in_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

pub fn translate_y(px: f64) -> String {
    format!("translateY({}px)", px)
}

// --- DOM ---------------------------------------------------------------------

/// Run `update(scrollY)` at most once per animation frame while scrolling.
fn on_scroll_frame<F>(update: F) -> Result<()>
where
    F: Fn(f64) + 'static,
{
    let win = dom::window()?;
    let ticking = Rc::new(Cell::new(false));
    let frame = {
        let ticking = ticking.clone();
        Closure::wrap(Box::new(move |_ts: f64| {
            let scrolled = web_sys::window()
                .and_then(|w| w.page_y_offset().ok())
                .unwrap_or(0.0);
            update(scrolled);
            ticking.set(false);
        }) as Box<dyn FnMut(f64)>)
    };
    let scroll = Closure::wrap(Box::new(move || {
        if ticking.get() {
            return;
        }
        if let Some(w) = web_sys::window() {
            if w.request_animation_frame(frame.as_ref().unchecked_ref()).is_ok() {
                ticking.set(true);
            }
        }
    }) as Box<dyn FnMut()>);
    win.add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref())?;
    scroll.forget();
    Ok(())
}

pub fn install_slogan(we_ignite: HtmlElement, ideas: HtmlElement) -> Result<()> {
    on_scroll_frame(move |scrolled| match slogan_offsets(scrolled) {
        Some((a, b)) => {
            dom::set_style(&we_ignite, "transform", &translate_y(a));
            dom::set_style(&ideas, "transform", &translate_y(b));
        }
        None => {
            dom::set_style(&we_ignite, "transform", "");
            dom::set_style(&ideas, "transform", "");
        }
    })
}

pub fn install_videos(videos: Vec<HtmlElement>) -> Result<()> {
    on_scroll_frame(move |scrolled| {
        for (i, video) in videos.iter().enumerate() {
            dom::set_style(video, "transform", &translate_y(video_offset(i, scrolled)));
        }
    })
}

pub fn install_cinematic(blocks: Vec<HtmlElement>) -> Result<()> {
    on_scroll_frame(move |scrolled| {
        let viewport = web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        for (i, block) in blocks.iter().enumerate() {
            let rect = block.get_bounding_client_rect();
            if !in_viewport(rect.top(), rect.bottom(), viewport) {
                continue;
            }
            if let Some(inner) = dom::query_child(block, ".cinematic-video") {
                let y = cinematic_offset(i, scrolled);
                let transform = format!("translateY({}px) scale(1.05)", y);
                dom::set_style(&inner, "transform", &transform);
            }
        }
    })
}
