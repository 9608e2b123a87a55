//! Environment value access behind an injectable seam.
//!
//! Handlers never read `std::env` directly; they go through a [`ValueSource`]
//! held in application state. Production uses [`ProcessEnv`]; tests inject a
//! [`StaticEnv`] with fixed values so assertions are deterministic regardless
//! of the surrounding process environment.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A source of named string values, typically environment variables.
pub trait ValueSource: Send + Sync {
    /// Returns the value for `key`, or `None` if unset.
    fn get(&self, key: &str) -> Option<String>;

    /// Returns the value for `key`, falling back to `default` when unset.
    fn value_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

/// Reads values from the process environment.
///
/// Values are read on every call, so changes to the process environment
/// are visible without a restart.
pub struct ProcessEnv;

impl ValueSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed in-memory source for tests.
///
/// Clones share the underlying map, so a test can keep a handle and update
/// values after the server is running to simulate live environment changes.
#[derive(Clone, Default)]
pub struct StaticEnv {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert for test setup.
    pub fn with(self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    /// Updates a value on a running source.
    pub fn set(&self, key: &str, value: &str) {
        self.values
            .write()
            .expect("StaticEnv lock poisoned")
            .insert(key.to_string(), value.to_string());
    }
}

impl ValueSource for StaticEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .expect("StaticEnv lock poisoned")
            .get(key)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_or_falls_back_when_unset() {
        let env = StaticEnv::new();
        assert_eq!(env.get("GREETING"), None);
        assert_eq!(env.value_or("GREETING", "Hi"), "Hi");
    }

    #[test]
    fn value_or_prefers_the_set_value() {
        let env = StaticEnv::new().with("GREETING", "Hello");
        assert_eq!(env.value_or("GREETING", "Hi"), "Hello");
    }

    #[test]
    fn clones_observe_later_updates() {
        let env = StaticEnv::new().with("GREETING", "Hi");
        let handle = env.clone();
        handle.set("GREETING", "Howdy");
        assert_eq!(env.get("GREETING").as_deref(), Some("Howdy"));
    }
}
