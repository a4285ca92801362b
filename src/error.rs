//! Error type shared by the DOM wiring layer.
//!
//! Nothing in this crate treats an error as fatal: installers return
//! `Result` so `?` works through web-sys calls, and the entry points in
//! `lib.rs` log whatever comes back and carry on.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("javascript error: {0}")]
    Js(String),
    #[cfg(feature = "serde_json")]
    #[error("invalid motion config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for MotionError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(s) => MotionError::Js(s),
            None => MotionError::Js(format!("{:?}", value)),
        }
    }
}

impl From<MotionError> for JsValue {
    fn from(err: MotionError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MotionError>;
