//! Thin wrappers over `web_sys::console`. Only the DOM layer logs.

use crate::error::MotionError;

pub(crate) fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

pub(crate) fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// Log a failed installer and swallow it; decorative code must not block the page.
pub(crate) fn report(context: &str, result: Result<(), MotionError>) {
    if let Err(e) = result {
        warn(&format!("site-motion: {} failed: {}", context, e));
    }
}
