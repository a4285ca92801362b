//! Per-session key/value storage behind the intro gate.

use std::collections::HashMap;

use web_sys::Storage;

use crate::console;
use crate::error::{MotionError, Result};

pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// `window.sessionStorage`. Reads that throw count as absent; failed writes are logged.
pub struct BrowserSession {
    storage: Storage,
}

impl BrowserSession {
    pub fn open() -> Result<Self> {
        let win = web_sys::window().ok_or(MotionError::NoWindow)?;
        let storage = win
            .session_storage()?
            .ok_or_else(|| MotionError::Js("sessionStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl SessionStore for BrowserSession {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            let err = MotionError::from(e);
            console::warn(&format!("site-motion: session flag not stored: {}", err));
        }
    }
}

/// In-memory store; also the fallback when the browser refuses session storage.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    entries: HashMap<String, String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut s = Self::new();
        s.set(key, value);
        s
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}
