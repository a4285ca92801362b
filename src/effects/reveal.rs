//! Load-time staggered reveals and the scroll fade-in observer.

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config::EffectsConfig;
use crate::dom;
use crate::console;
use crate::error::{MotionError, Result};
use crate::schedule::Scheduler;

const EASE: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

const FADE_IN_FROM: &[(&str, &str)] = &[
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "all 0.8s cubic-bezier(0.4, 0, 0.2, 1)"),
];

/// An element is hidden with `from` styles at load and shown with `to`
/// styles after `base_ms + index * step_ms`.
#[derive(Clone, Copy, Debug)]
pub struct Stagger {
    pub selector: &'static str,
    pub base_ms: u32,
    pub step_ms: u32,
    pub from: &'static [(&'static str, &'static str)],
    pub to: &'static [(&'static str, &'static str)],
}

impl Stagger {
    pub fn delay_ms(&self, index: usize) -> u32 {
        self.base_ms + index as u32 * self.step_ms
    }
}

const WORD_FROM: &[(&str, &str)] = &[
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "all 0.8s cubic-bezier(0.4, 0, 0.2, 1)"),
];
const WORD_TO: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateY(0)")];

pub const MAIN_TITLE: Stagger = Stagger {
    selector: ".main-title span",
    base_ms: 200,
    step_ms: 200,
    from: WORD_FROM,
    to: WORD_TO,
};

pub const ABOUT_TITLE: Stagger = Stagger {
    selector: ".about-title span",
    base_ms: 200,
    step_ms: 300,
    from: WORD_FROM,
    to: WORD_TO,
};

pub const CINEMATIC_ENTRANCE: Stagger = Stagger {
    selector: ".about-gif",
    base_ms: 200,
    step_ms: 300,
    from: &[
        ("opacity", "0"),
        ("transform", "translateY(50px) scale(0.8)"),
        ("transition", "all 1s cubic-bezier(0.23, 1, 0.320, 1)"),
    ],
    to: &[("opacity", "1"), ("transform", "translateY(0) scale(1)")],
};

/// Navigation and content frame lines, drawn in this order.
pub const FRAME_LINES: [&str; 10] = [
    ".line-logo-to-nav",
    ".nav-frame-top",
    ".nav-frame-right",
    ".nav-frame-bottom",
    ".nav-frame-left",
    ".nav-to-content-connector",
    ".content-frame-top",
    ".content-frame-right",
    ".content-frame-bottom",
    ".content-frame-left",
];

pub fn frame_line_delay_ms(index: usize) -> u32 {
    500 + index as u32 * 100
}

/// Horizontal lines grow in width, everything else in height.
pub fn frame_line_axis(selector: &str) -> &'static str {
    if selector.contains("horizontal") { "width" } else { "height" }
}

/// About page: cascade hover/scroll transitions across sibling cards.
pub const TEAM_MEMBER_STEP_S: f64 = 0.1;
pub const VALUE_ITEM_STEP_S: f64 = 0.15;

pub fn transition_delay(index: usize, step_s: f64) -> String {
    // Round to avoid 0.30000000000000004s.
    let secs = (index as f64 * step_s * 1000.0).round() / 1000.0;
    format!("{}s", secs)
}

// --- DOM ---------------------------------------------------------------------

pub fn play_stagger(doc: &Document, stagger: &Stagger, scheduler: &Rc<dyn Scheduler>) {
    for (i, el) in dom::query_all(doc, stagger.selector).into_iter().enumerate() {
        dom::apply_styles(&el, stagger.from);
        let to = stagger.to;
        scheduler.after(stagger.delay_ms(i), Box::new(move || dom::apply_styles(&el, to)));
    }
}

pub fn play_frame_lines(doc: &Document, scheduler: &Rc<dyn Scheduler>) {
    for (i, selector) in FRAME_LINES.iter().enumerate() {
        let Some(line) = dom::query_one(doc, selector) else {
            continue;
        };
        let axis = frame_line_axis(selector);
        dom::set_style(&line, axis, "0");
        dom::set_style(&line, "transition", &format!("{} 1s {}", axis, EASE));
        scheduler.after(
            frame_line_delay_ms(i),
            Box::new(move || dom::set_style(&line, axis, "")),
        );
    }
}

pub fn cascade_transition_delays(doc: &Document) {
    let cascades = [
        (".team-member", TEAM_MEMBER_STEP_S),
        (".value-item", VALUE_ITEM_STEP_S),
    ];
    for (selector, step) in cascades {
        for (i, el) in dom::query_all(doc, selector).iter().enumerate() {
            dom::set_style(el, "transition-delay", &transition_delay(i, step));
        }
    }
}

/// Prime scroll targets invisible, then add the fade-in class the first
/// time each one intersects the viewport.
pub fn install_fade_in(doc: &Document, config: &EffectsConfig) -> Result<()> {
    let class = config.fade_in_class.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let target = entry.target();
                if let Err(e) = target.class_list().add_1(&class) {
                    let err = MotionError::from(e);
                    console::warn(&format!("site-motion: fade-in failed: {}", err));
                }
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.fade_in_threshold));
    options.set_root_margin(&config.fade_in_root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for el in dom::query_all(doc, &config.fade_in_targets) {
        if el.style().get_property_value("opacity").unwrap_or_default().is_empty() {
            dom::apply_styles(&el, FADE_IN_FROM);
        }
        observer.observe(&el);
    }

    let css = format!(
        ".{} {{ opacity: 1 !important; transform: translateY(0) !important; }}",
        config.fade_in_class
    );
    dom::inject_style(doc, &css)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_stagger_delays() {
        assert_eq!(MAIN_TITLE.delay_ms(0), 200);
        assert_eq!(MAIN_TITLE.delay_ms(3), 800);
        assert_eq!(ABOUT_TITLE.delay_ms(2), 800);
        assert_eq!(CINEMATIC_ENTRANCE.delay_ms(1), 500);
    }

    #[test]
    fn test_frame_lines() {
        assert_eq!(frame_line_delay_ms(0), 500);
        assert_eq!(frame_line_delay_ms(9), 1400);
        assert_eq!(frame_line_axis(".nav-frame-top"), "height");
        assert_eq!(frame_line_axis(".line-horizontal"), "width");
    }

    #[test]
    fn test_transition_delay_format() {
        assert_eq!(transition_delay(0, TEAM_MEMBER_STEP_S), "0s");
        assert_eq!(transition_delay(3, TEAM_MEMBER_STEP_S), "0.3s");
        assert_eq!(transition_delay(2, VALUE_ITEM_STEP_S), "0.3s");
        assert_eq!(transition_delay(1, VALUE_ITEM_STEP_S), "0.15s");
    }
}
