//! Page transitions: in-site link clicks are intercepted, a branded overlay
//! plays a fixed timed sequence, then the real navigation happens.
//!
//! The logic (predicate, labels, state machine, click policy) is pure and
//! host-testable; [`mount_overlay`] and [`install`] are the parts that touch
//! the DOM.

mod controller;
mod label;
mod predicate;
mod sequencer;

pub use controller::{ClickOutcome, ReentryPolicy, TransitionController};
pub use label::OverlayLabel;
pub use predicate::should_transition;
pub use sequencer::{Effect, EffectSink, Phase, Sequencer, Step, run_sequence};

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlElement};

use crate::config::TransitionConfig;
use crate::console;
use crate::dom;
use crate::error::{MotionError, Result};
use crate::schedule::Scheduler;

/// The overlay node plus the class markers the stylesheet interprets.
struct OverlayDom {
    overlay: Element,
    label: Element,
    body: HtmlElement,
    active_class: String,
    fade_class: String,
    body_class: String,
}

impl EffectSink for OverlayDom {
    fn apply(&self, effect: &Effect) {
        let outcome = match effect {
            Effect::SetLabel(label) => {
                self.label.set_text_content(Some(label.text()));
                Ok(())
            }
            Effect::MarkBodyTransitioning => self.body.class_list().add_1(&self.body_class),
            Effect::ActivateOverlay => self.overlay.class_list().add_1(&self.active_class),
            Effect::FadeOutOverlay => self.overlay.class_list().add_1(&self.fade_class),
            Effect::Navigate(url) => match web_sys::window() {
                Some(w) => w.location().set_href(url),
                None => Ok(()),
            },
        };
        if let Err(e) = outcome {
            console::warn(&format!("site-motion: {:?} failed: {}", effect, MotionError::from(e)));
        }
    }
}

/// Append the overlay (`overlay_class > label_class`, showing the placeholder
/// label) to `<body>` and return the sink that maps effects onto it.
pub fn mount_overlay(doc: &Document, config: &TransitionConfig) -> Result<Rc<dyn EffectSink>> {
    let body = doc.body().ok_or(MotionError::NoBody)?;

    let overlay = doc.create_element("div")?;
    overlay.set_class_name(&config.overlay_class);
    let label = doc.create_element("div")?;
    label.set_class_name(&config.label_class);
    label.set_text_content(Some(&config.placeholder_label));
    overlay.append_child(&label)?;
    body.append_child(&overlay)?;

    Ok(Rc::new(OverlayDom {
        overlay,
        label,
        body,
        active_class: config.active_class.clone(),
        fade_class: config.fade_class.clone(),
        body_class: config.body_class.clone(),
    }))
}

thread_local! {
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Create the single overlay and the delegated click listener. A second call is a no-op.
pub fn install(config: &TransitionConfig, scheduler: Rc<dyn Scheduler>) -> Result<()> {
    if INSTALLED.with(|f| f.get()) {
        return Ok(());
    }
    let doc = dom::document()?;
    let sink = mount_overlay(&doc, config)?;
    let controller = Rc::new(RefCell::new(TransitionController::new(
        config.reentry,
        config.timings,
    )));

    let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
        let Some(link) = evt
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a[href]").ok().flatten())
        else {
            return;
        };
        let href = link.get_attribute("href");
        let destination = link
            .dyn_ref::<HtmlAnchorElement>()
            .map(|a| a.href())
            .or_else(|| href.clone())
            .unwrap_or_default();
        let outcome = controller.borrow_mut().on_click(href.as_deref(), &destination);
        if outcome.prevents_default() {
            evt.prevent_default();
        }
        if let ClickOutcome::Started(seq) = outcome {
            let ctl = controller.clone();
            run_sequence(
                seq,
                sink.clone(),
                scheduler.clone(),
                Box::new(move || ctl.borrow_mut().finished()),
            );
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();

    INSTALLED.with(|f| f.set(true));
    Ok(())
}
