// Integration tests (native) for the `site-motion` crate.
// These avoid wasm/browser APIs: sequences run against a recording sink on
// the virtual-clock scheduler.

use std::cell::RefCell;
use std::rc::Rc;

use site_motion::config::{IntroConfig, TransitionTimings};
use site_motion::intro::{IntroGate, IntroPlan, LoadingScreen, run_intro};
use site_motion::session::{MemorySession, SessionStore};
use site_motion::transition::{
    ClickOutcome, Effect, EffectSink, OverlayLabel, ReentryPolicy, TransitionController,
    run_sequence, should_transition,
};
use site_motion::{ManualScheduler, Scheduler};

/// Records `(virtual ms, effect)` pairs.
struct Timeline {
    clock: Rc<ManualScheduler>,
    events: RefCell<Vec<(u64, Effect)>>,
}

impl EffectSink for Timeline {
    fn apply(&self, effect: &Effect) {
        self.events.borrow_mut().push((self.clock.now(), effect.clone()));
    }
}

fn timeline(clock: &Rc<ManualScheduler>) -> Rc<Timeline> {
    Rc::new(Timeline { clock: clock.clone(), events: RefCell::new(Vec::new()) })
}

// Drives one click through a controller the way the DOM listener does.
fn click(
    ctl: &Rc<RefCell<TransitionController>>,
    href: &str,
    sink: &Rc<Timeline>,
    clock: &Rc<ManualScheduler>,
) -> bool {
    let outcome = ctl.borrow_mut().on_click(Some(href), href);
    let prevented = outcome.prevents_default();
    if let ClickOutcome::Started(seq) = outcome {
        let done = ctl.clone();
        let sink: Rc<dyn EffectSink> = sink.clone();
        let sched: Rc<dyn Scheduler> = clock.clone();
        run_sequence(seq, sink, sched, Box::new(move || done.borrow_mut().finished()));
    }
    prevented
}

#[test]
fn qualification_predicate_table() {
    let cases = [
        ("services.html", true),
        ("about-us.html", true),
        ("#team", false),
        ("http://x.com/a.html", false),
        ("archive.zip", false),
        ("files/archive.zip?v=.html", false),
        ("contact", false),
    ];
    for (href, expected) in cases {
        assert_eq!(should_transition(Some(href)), expected, "href {:?}", href);
    }
}

#[test]
fn overlay_label_resolution() {
    assert_eq!(OverlayLabel::for_destination("about-us.html").text(), "ABOUT US");
    assert_eq!(OverlayLabel::for_destination("game.html").text(), "GAME");
    assert_eq!(OverlayLabel::for_destination("services.html").text(), "SERVICES");
    assert_eq!(OverlayLabel::for_destination("index.html").text(), "HOME");
}

#[test]
fn full_sequence_timeline() {
    let clock = Rc::new(ManualScheduler::new());
    let sink = timeline(&clock);
    let ctl = Rc::new(RefCell::new(TransitionController::new(
        ReentryPolicy::RejectWhileActive,
        TransitionTimings::default(),
    )));

    assert!(click(&ctl, "about-us.html", &sink, &clock));
    // Label and body suppression happen synchronously with the click.
    assert_eq!(sink.events.borrow().len(), 2);
    clock.run_until_idle();

    let events = sink.events.borrow().clone();
    assert_eq!(
        events,
        vec![
            (0, Effect::SetLabel(OverlayLabel::About)),
            (0, Effect::MarkBodyTransitioning),
            (50, Effect::ActivateOverlay),
            (800, Effect::FadeOutOverlay),
            (1400, Effect::Navigate("about-us.html".to_string())),
        ]
    );
    assert_eq!(TransitionTimings::default().total_ms(), 1400);
    assert_eq!(ctl.borrow().in_flight(), 0);
}

#[test]
fn no_navigation_before_total_elapsed() {
    let clock = Rc::new(ManualScheduler::new());
    let sink = timeline(&clock);
    let ctl = Rc::new(RefCell::new(TransitionController::new(
        ReentryPolicy::default(),
        TransitionTimings::default(),
    )));
    click(&ctl, "game.html", &sink, &clock);
    clock.advance_by(1399);
    assert!(!sink.events.borrow().iter().any(|(_, e)| matches!(e, Effect::Navigate(_))));
    clock.advance_by(1);
    assert!(matches!(sink.events.borrow().last(), Some((1400, Effect::Navigate(_)))));
}

#[test]
fn non_qualifying_click_starts_nothing() {
    let clock = Rc::new(ManualScheduler::new());
    let sink = timeline(&clock);
    let ctl = Rc::new(RefCell::new(TransitionController::new(
        ReentryPolicy::default(),
        TransitionTimings::default(),
    )));
    for href in ["#team", "https://example.com/page.html", "brochure.zip"] {
        assert!(!click(&ctl, href, &sink, &clock));
    }
    assert!(sink.events.borrow().is_empty());
    assert_eq!(clock.pending(), 0);
}

#[test]
fn overlapping_click_rejected_by_default() {
    let clock = Rc::new(ManualScheduler::new());
    let sink = timeline(&clock);
    let ctl = Rc::new(RefCell::new(TransitionController::new(
        ReentryPolicy::RejectWhileActive,
        TransitionTimings::default(),
    )));
    click(&ctl, "game.html", &sink, &clock);
    clock.advance_by(400);
    // Still intercepted, but no second sequence.
    assert!(click(&ctl, "services.html", &sink, &clock));
    clock.run_until_idle();
    let navigations: Vec<_> = sink
        .events
        .borrow()
        .iter()
        .filter_map(|(t, e)| match e {
            Effect::Navigate(url) => Some((*t, url.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(navigations, vec![(1400, "game.html".to_string())]);
}

#[test]
fn overlapping_click_allowed_runs_independently() {
    let clock = Rc::new(ManualScheduler::new());
    let sink = timeline(&clock);
    let ctl = Rc::new(RefCell::new(TransitionController::new(
        ReentryPolicy::AllowOverlapping,
        TransitionTimings::default(),
    )));
    click(&ctl, "game.html", &sink, &clock);
    clock.advance_by(400);
    assert!(click(&ctl, "services.html", &sink, &clock));
    assert_eq!(ctl.borrow().in_flight(), 2);
    clock.run_until_idle();
    let navigations: Vec<_> = sink
        .events
        .borrow()
        .iter()
        .filter(|(_, e)| matches!(e, Effect::Navigate(_)))
        .map(|(t, _)| *t)
        .collect();
    assert_eq!(navigations, vec![1400, 1800]);
    assert_eq!(ctl.borrow().in_flight(), 0);
}

#[derive(Default)]
struct Screen {
    log: RefCell<Vec<&'static str>>,
}

impl LoadingScreen for Screen {
    fn fade_out(&self) {
        self.log.borrow_mut().push("fade-out");
    }
    fn remove(&self) {
        self.log.borrow_mut().push("remove");
    }
}

#[test]
fn intro_plays_once_per_session() {
    let config = IntroConfig::default();
    let clock = Rc::new(ManualScheduler::new());

    // First page of the session.
    let mut first = IntroGate::open(MemorySession::new(), &config);
    assert!(!first.suppress_before_paint());
    let plan = first.on_load(true);
    assert_eq!(first.store().get("hasVisited").as_deref(), Some("true"));
    let screen = Rc::new(Screen::default());
    run_intro(plan, screen.clone(), clock.clone());
    clock.run_until_idle();
    assert_eq!(*screen.log.borrow(), vec!["fade-out", "remove"]);
    assert_eq!(clock.now(), 4300);

    // Next page shares the session store.
    let store = first.store().clone();
    let mut second = IntroGate::open(store, &config);
    assert!(second.suppress_before_paint());
    let plan = second.on_load(true);
    assert_eq!(plan, IntroPlan::RemoveNow);
    let screen = Rc::new(Screen::default());
    run_intro(plan, screen.clone(), clock.clone());
    assert_eq!(*screen.log.borrow(), vec!["remove"]);
    assert_eq!(clock.pending(), 0);
}

#[test]
fn intro_flag_is_set_before_dwell_completes() {
    let config = IntroConfig::default();
    let clock = Rc::new(ManualScheduler::new());
    let mut gate = IntroGate::open(MemorySession::new(), &config);
    let plan = gate.on_load(true);
    run_intro(plan, Rc::new(Screen::default()), clock.clone());
    clock.advance_by(1000);
    // A reload mid-dwell sees the flag and skips the intro.
    let reloaded = IntroGate::open(gate.store().clone(), &config);
    assert!(reloaded.visited());
}
