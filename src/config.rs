//! Tunables for every behavior in the crate.
//!
//! Defaults reproduce the site's shipped look. With the `serde` feature the
//! types (de)serialize with per-field defaults, so a partial JSON document
//! only overrides what it names.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::transition::ReentryPolicy;

/// Id of the optional inline `<script type="application/json">` config block.
pub const CONFIG_SCRIPT_ID: &str = "site-motion-config";

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotionConfig {
    pub intro: IntroConfig,
    pub transition: TransitionConfig,
    pub effects: EffectsConfig,
}

#[cfg(feature = "serde_json")]
impl MotionConfig {
    /// Parse a (possibly partial) JSON document; missing fields keep defaults.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One-time loading screen.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IntroConfig {
    pub session_key: String,
    pub screen_id: String,
    pub screen_class: String,
    pub fade_class: String,
    pub dwell_ms: u32,
    pub fade_ms: u32,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            session_key: "hasVisited".to_string(),
            screen_id: "loadingScreen".to_string(),
            screen_class: "loading-screen".to_string(),
            fade_class: "fade-out".to_string(),
            dwell_ms: 3500,
            fade_ms: 800,
        }
    }
}

/// Waits between the sequencer's phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransitionTimings {
    pub prime_ms: u32,
    pub hold_ms: u32,
    pub fade_out_ms: u32,
}

impl TransitionTimings {
    /// Click-to-navigation latency.
    pub fn total_ms(&self) -> u32 {
        self.prime_ms + self.hold_ms + self.fade_out_ms
    }
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self { prime_ms: 50, hold_ms: 750, fade_out_ms: 600 }
    }
}

/// Page-transition overlay: timings plus the class markers the stylesheet keys on.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransitionConfig {
    pub timings: TransitionTimings,
    pub reentry: ReentryPolicy,
    pub overlay_class: String,
    pub label_class: String,
    pub placeholder_label: String,
    pub active_class: String,
    pub fade_class: String,
    pub body_class: String,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            timings: TransitionTimings::default(),
            reentry: ReentryPolicy::default(),
            overlay_class: "page-transition".to_string(),
            label_class: "transition-text".to_string(),
            placeholder_label: "LOADING...".to_string(),
            active_class: "active".to_string(),
            fade_class: "fade-out".to_string(),
            body_class: "transitioning".to_string(),
        }
    }
}

/// Scroll fade-in observer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EffectsConfig {
    pub fade_in_class: String,
    pub fade_in_threshold: f64,
    pub fade_in_root_margin: String,
    pub fade_in_targets: String,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            fade_in_class: "fade-in".to_string(),
            fade_in_threshold: 0.1,
            fade_in_root_margin: "0px 0px -50px 0px".to_string(),
            fade_in_targets: ".video-container, .text-content, .animate-on-scroll".to_string(),
        }
    }
}
