//! The transition sequence as an explicit state machine.
//!
//! `Idle → Priming → Holding → FadingOut → Navigating`. Each transition
//! yields the effects to apply now and how long to wait before the next
//! one; the machine itself never touches the DOM or a timer. With default
//! timings the overlay activates at 50ms, fades at 800ms and the
//! navigation fires at 1400ms.

use std::rc::Rc;

use super::label::OverlayLabel;
use crate::config::TransitionTimings;
use crate::schedule::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Priming,
    Holding,
    FadingOut,
    Navigating,
}

/// Visual state changes, interpreted by an [`EffectSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    SetLabel(OverlayLabel),
    MarkBodyTransitioning,
    ActivateOverlay,
    FadeOutOverlay,
    Navigate(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub effects: Vec<Effect>,
    /// Wait before the next `advance`; `None` once the sequence is done.
    pub wait_ms: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct Sequencer {
    destination: String,
    timings: TransitionTimings,
    phase: Phase,
}

impl Sequencer {
    pub fn new(destination: impl Into<String>, timings: TransitionTimings) -> Self {
        Self { destination: destination.into(), timings, phase: Phase::Idle }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Label + body suppression, then wait out the prime delay. `None` unless idle.
    pub fn start(&mut self) -> Option<Step> {
        if self.phase != Phase::Idle {
            return None;
        }
        self.phase = Phase::Priming;
        Some(Step {
            effects: vec![
                Effect::SetLabel(OverlayLabel::for_destination(&self.destination)),
                Effect::MarkBodyTransitioning,
            ],
            wait_ms: Some(self.timings.prime_ms),
        })
    }

    pub fn advance(&mut self) -> Option<Step> {
        let (next, effects, wait_ms) = match self.phase {
            Phase::Idle | Phase::Navigating => return None,
            Phase::Priming => (
                Phase::Holding,
                vec![Effect::ActivateOverlay],
                Some(self.timings.hold_ms),
            ),
            Phase::Holding => (
                Phase::FadingOut,
                vec![Effect::FadeOutOverlay],
                Some(self.timings.fade_out_ms),
            ),
            Phase::FadingOut => (
                Phase::Navigating,
                vec![Effect::Navigate(self.destination.clone())],
                None,
            ),
        };
        self.phase = next;
        Some(Step { effects, wait_ms })
    }
}

pub trait EffectSink {
    fn apply(&self, effect: &Effect);
}

/// Drive `seq` to completion. `on_finish` runs after the last step's effects.
pub fn run_sequence(
    mut seq: Sequencer,
    sink: Rc<dyn EffectSink>,
    scheduler: Rc<dyn Scheduler>,
    on_finish: Box<dyn FnOnce()>,
) {
    match seq.start() {
        Some(step) => continue_from(seq, step, sink, scheduler, on_finish),
        None => on_finish(),
    }
}

fn continue_from(
    mut seq: Sequencer,
    step: Step,
    sink: Rc<dyn EffectSink>,
    scheduler: Rc<dyn Scheduler>,
    on_finish: Box<dyn FnOnce()>,
) {
    for effect in &step.effects {
        sink.apply(effect);
    }
    let Some(ms) = step.wait_ms else {
        on_finish();
        return;
    };
    let sched = scheduler.clone();
    scheduler.after(
        ms,
        Box::new(move || match seq.advance() {
            Some(next) => continue_from(seq, next, sink, sched, on_finish),
            None => on_finish(),
        }),
    );
}
