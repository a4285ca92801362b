//! Click routing and the overlapping-click policy.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::predicate::should_transition;
use super::sequencer::Sequencer;
use crate::config::TransitionTimings;

/// What happens to a qualifying click while another sequence is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReentryPolicy {
    /// Swallow the click: default navigation is suppressed and nothing starts.
    #[default]
    RejectWhileActive,
    /// Start an independent sequence sharing the same overlay.
    AllowOverlapping,
}

#[derive(Debug)]
pub enum ClickOutcome {
    /// Not ours; let the browser navigate.
    Native,
    /// Intercepted and dropped under [`ReentryPolicy::RejectWhileActive`].
    Suppressed,
    /// Intercepted; drive this sequencer.
    Started(Sequencer),
}

impl ClickOutcome {
    pub fn prevents_default(&self) -> bool {
        !matches!(self, ClickOutcome::Native)
    }
}

#[derive(Debug)]
pub struct TransitionController {
    policy: ReentryPolicy,
    timings: TransitionTimings,
    in_flight: usize,
}

impl TransitionController {
    pub fn new(policy: ReentryPolicy, timings: TransitionTimings) -> Self {
        Self { policy, timings, in_flight: 0 }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// `href` is the raw attribute (for the predicate); `destination` is the
    /// resolved URL the browser will load.
    pub fn on_click(&mut self, href: Option<&str>, destination: &str) -> ClickOutcome {
        if !should_transition(href) {
            return ClickOutcome::Native;
        }
        if self.in_flight > 0 && self.policy == ReentryPolicy::RejectWhileActive {
            return ClickOutcome::Suppressed;
        }
        self.in_flight += 1;
        ClickOutcome::Started(Sequencer::new(destination, self.timings))
    }

    /// Called once a started sequence has issued its navigation.
    pub fn finished(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_qualifying_is_native() {
        let mut ctl =
            TransitionController::new(ReentryPolicy::default(), TransitionTimings::default());
        for href in [Some("#team"), Some("http://x.com/a.html"), Some("archive.zip"), None] {
            let outcome = ctl.on_click(href, "whatever");
            assert!(matches!(outcome, ClickOutcome::Native));
            assert!(!outcome.prevents_default());
        }
        assert_eq!(ctl.in_flight(), 0);
    }

    #[test]
    fn test_reject_while_active() {
        let mut ctl = TransitionController::new(
            ReentryPolicy::RejectWhileActive,
            TransitionTimings::default(),
        );
        assert!(matches!(ctl.on_click(Some("game.html"), "game.html"), ClickOutcome::Started(_)));
        let second = ctl.on_click(Some("about.html"), "about.html");
        assert!(matches!(second, ClickOutcome::Suppressed));
        assert!(second.prevents_default());
        ctl.finished();
        assert!(matches!(ctl.on_click(Some("about.html"), "about.html"), ClickOutcome::Started(_)));
    }

    #[test]
    fn test_allow_overlapping() {
        let mut ctl = TransitionController::new(
            ReentryPolicy::AllowOverlapping,
            TransitionTimings::default(),
        );
        assert!(matches!(ctl.on_click(Some("game.html"), "game.html"), ClickOutcome::Started(_)));
        assert!(matches!(ctl.on_click(Some("about.html"), "about.html"), ClickOutcome::Started(_)));
        assert_eq!(ctl.in_flight(), 2);
    }
}
