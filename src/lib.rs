//! Site Motion core crate.
//!
//! Presentation behavior for the marketing site, compiled to WASM and loaded
//! on every page:
//! - `intro`: the loading screen that plays once per browsing session.
//! - `transition`: intercepted in-site navigation behind a timed overlay.
//! - `effects`: scroll / hover / load-time decoration.
//!
//! Timing and state logic is plain Rust and tests on the host; the web-sys
//! wiring only interprets what that logic decides.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub mod config;
mod console;
mod dom;
pub mod effects;
pub mod error;
pub mod intro;
pub mod schedule;
pub mod session;
pub mod transition;

pub use config::MotionConfig;
pub use error::{MotionError, Result};
pub use intro::{IntroGate, IntroPlan};
pub use schedule::{ManualScheduler, Scheduler, TimeoutScheduler};
pub use transition::{OverlayLabel, ReentryPolicy, Sequencer, should_transition};

use session::{BrowserSession, MemorySession, SessionStore};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

type Gate = IntroGate<Box<dyn SessionStore>>;

/// Runs when the module is instantiated, i.e. before the page is interactive.
#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    console::report("startup", start(load_config()));
}

#[cfg(feature = "serde_json")]
fn load_config() -> MotionConfig {
    let inline = dom::document()
        .ok()
        .and_then(|d| d.get_element_by_id(config::CONFIG_SCRIPT_ID))
        .and_then(|el| el.text_content());
    match inline {
        Some(json) => MotionConfig::from_json(&json).unwrap_or_else(|e| {
            console::warn(&format!("site-motion: {}; using defaults", e));
            MotionConfig::default()
        }),
        None => MotionConfig::default(),
    }
}

#[cfg(not(feature = "serde_json"))]
fn load_config() -> MotionConfig {
    MotionConfig::default()
}

fn open_session() -> Box<dyn SessionStore> {
    match BrowserSession::open() {
        Ok(s) => Box::new(s),
        Err(e) => {
            console::warn(&format!("site-motion: {}; intro will replay on every page", e));
            Box::new(MemorySession::new())
        }
    }
}

fn start(config: MotionConfig) -> Result<()> {
    let doc = dom::document()?;
    let scheduler: Rc<dyn Scheduler> = Rc::new(TimeoutScheduler);

    // Pre-paint half of the intro gate.
    let gate: Gate = IntroGate::open(open_session(), &config.intro);
    if gate.suppress_before_paint() {
        console::report(
            "intro suppression",
            intro::hide_screen_before_paint(&doc, &config.intro),
        );
    }

    let config = Rc::new(config);

    // The module may be instantiated after DOMContentLoaded or even load;
    // run the handler now if its event has already fired.
    let ready_state = doc.ready_state();
    {
        let config = config.clone();
        let scheduler = scheduler.clone();
        let on_load = move || {
            let mut gate = gate;
            console::report(
                "intro",
                intro::on_page_load(&mut gate, &config.intro, scheduler.clone()),
            );
        };
        if ready_state == "complete" {
            on_load();
        } else {
            let win = dom::window()?;
            once(&win, "load", on_load)?;
        }
    }

    let on_ready = move || {
        console::report(
            "page transitions",
            transition::install(&config.transition, scheduler.clone()),
        );
        if let Ok(doc) = dom::document() {
            effects::install(&doc, &config.effects, scheduler.clone());
        }
    };
    if ready_state == "loading" {
        once(&doc, "DOMContentLoaded", on_ready)?;
    } else {
        on_ready();
    }
    Ok(())
}

/// Attach a listener that runs `f` the first time `event` fires.
fn once<F>(target: &web_sys::EventTarget, event: &str, f: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    let mut f = Some(f);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(f) = f.take() {
            f();
        }
    }) as Box<dyn FnMut()>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
