//! Intro gate: the full-page loading screen plays once per browsing session.
//!
//! The gate reads the session flag once, at construction (script
//! evaluation, before first paint). On page load it decides between
//! playing the intro, removing the screen outright, or doing nothing when
//! the page has no loading screen. The flag is written *before* the dwell
//! starts, so a reload mid-intro does not replay it.

use std::rc::Rc;

use web_sys::{Document, Element};

use crate::config::IntroConfig;
use crate::console;
use crate::dom;
use crate::error::{MotionError, Result};
use crate::schedule::Scheduler;
use crate::session::SessionStore;

/// What to do with the loading screen once the page has loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroPlan {
    /// No loading screen on this page.
    Absent,
    /// Already played this session: drop it with no animation.
    RemoveNow,
    /// First page of the session: hold, fade, then remove.
    Play { dwell_ms: u32, fade_ms: u32 },
}

pub struct IntroGate<S: SessionStore> {
    store: S,
    key: String,
    dwell_ms: u32,
    fade_ms: u32,
    visited: bool,
}

impl<S: SessionStore> IntroGate<S> {
    pub fn open(store: S, config: &IntroConfig) -> Self {
        // Any non-empty value counts as set.
        let visited = store
            .get(&config.session_key)
            .is_some_and(|v| !v.is_empty());
        Self {
            store,
            key: config.session_key.clone(),
            dwell_ms: config.dwell_ms,
            fade_ms: config.fade_ms,
            visited,
        }
    }

    pub fn visited(&self) -> bool {
        self.visited
    }

    /// Whether the loading screen must be hidden before first paint.
    pub fn suppress_before_paint(&self) -> bool {
        self.visited
    }

    pub fn on_load(&mut self, screen_present: bool) -> IntroPlan {
        if !screen_present {
            return IntroPlan::Absent;
        }
        if self.visited {
            return IntroPlan::RemoveNow;
        }
        self.store.set(&self.key, "true");
        self.visited = true;
        IntroPlan::Play { dwell_ms: self.dwell_ms, fade_ms: self.fade_ms }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// The visual end of the gate.
pub trait LoadingScreen {
    fn fade_out(&self);
    fn remove(&self);
}

/// Carry out `plan` against `screen`, deferring through `scheduler`.
pub fn run_intro(plan: IntroPlan, screen: Rc<dyn LoadingScreen>, scheduler: Rc<dyn Scheduler>) {
    match plan {
        IntroPlan::Absent => {}
        IntroPlan::RemoveNow => screen.remove(),
        IntroPlan::Play { dwell_ms, fade_ms } => {
            let sched = scheduler.clone();
            scheduler.after(
                dwell_ms,
                Box::new(move || {
                    screen.fade_out();
                    sched.after(fade_ms, Box::new(move || screen.remove()));
                }),
            );
        }
    }
}

// --- DOM ---------------------------------------------------------------------

struct DomScreen {
    el: Element,
    fade_class: String,
}

impl LoadingScreen for DomScreen {
    fn fade_out(&self) {
        if let Err(e) = self.el.class_list().add_1(&self.fade_class) {
            console::warn(&format!("site-motion: intro fade-out failed: {}", MotionError::from(e)));
        }
    }

    fn remove(&self) {
        self.el.remove();
    }
}

/// Hide the loading screen via an injected rule so it never flashes.
pub fn hide_screen_before_paint(doc: &Document, config: &IntroConfig) -> Result<()> {
    let css = format!(".{} {{ display: none !important; }}", config.screen_class);
    dom::inject_style(doc, &css)
}

/// Page-load half of the gate.
pub fn on_page_load<S: SessionStore>(
    gate: &mut IntroGate<S>,
    config: &IntroConfig,
    scheduler: Rc<dyn Scheduler>,
) -> Result<()> {
    let doc = dom::document()?;
    let screen = doc.get_element_by_id(&config.screen_id);
    let plan = gate.on_load(screen.is_some());
    if let Some(el) = screen {
        let screen = Rc::new(DomScreen { el, fade_class: config.fade_class.clone() });
        run_intro(plan, screen, scheduler);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;
    use crate::session::MemorySession;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<&'static str>>,
    }

    impl LoadingScreen for Recorder {
        fn fade_out(&self) {
            self.events.borrow_mut().push("fade-out");
        }
        fn remove(&self) {
            self.events.borrow_mut().push("remove");
        }
    }

    #[test]
    fn test_first_visit_sets_flag_before_dwell() {
        let mut gate = IntroGate::open(MemorySession::new(), &IntroConfig::default());
        assert!(!gate.suppress_before_paint());
        let plan = gate.on_load(true);
        assert_eq!(plan, IntroPlan::Play { dwell_ms: 3500, fade_ms: 800 });
        assert_eq!(gate.store().get("hasVisited").as_deref(), Some("true"));
    }

    #[test]
    fn test_repeat_visit_removes_immediately() {
        let store = MemorySession::with_entry("hasVisited", "true");
        let mut gate = IntroGate::open(store, &IntroConfig::default());
        assert!(gate.suppress_before_paint());
        assert_eq!(gate.on_load(true), IntroPlan::RemoveNow);
    }

    #[test]
    fn test_absent_screen_leaves_flag_alone() {
        let mut gate = IntroGate::open(MemorySession::new(), &IntroConfig::default());
        assert_eq!(gate.on_load(false), IntroPlan::Absent);
        assert_eq!(gate.store().get("hasVisited"), None);
    }

    #[test]
    fn test_empty_flag_value_is_unset() {
        let store = MemorySession::with_entry("hasVisited", "");
        let gate = IntroGate::open(store, &IntroConfig::default());
        assert!(!gate.visited());
    }

    #[test]
    fn test_run_intro_timeline() {
        let clock = Rc::new(ManualScheduler::new());
        let screen = Rc::new(Recorder::default());
        run_intro(IntroPlan::Play { dwell_ms: 3500, fade_ms: 800 }, screen.clone(), clock.clone());
        clock.advance_by(3499);
        assert!(screen.events.borrow().is_empty());
        clock.advance_by(1);
        assert_eq!(*screen.events.borrow(), vec!["fade-out"]);
        clock.advance_by(799);
        assert_eq!(*screen.events.borrow(), vec!["fade-out"]);
        clock.advance_by(1);
        assert_eq!(*screen.events.borrow(), vec!["fade-out", "remove"]);
    }

    #[test]
    fn test_remove_now_is_synchronous() {
        let clock = Rc::new(ManualScheduler::new());
        let screen = Rc::new(Recorder::default());
        run_intro(IntroPlan::RemoveNow, screen.clone(), clock.clone());
        assert_eq!(*screen.events.borrow(), vec!["remove"]);
        assert_eq!(clock.pending(), 0);
    }
}
