//! Lookup-session surface: lazy diagnostics and the per-session cache

use std::collections::HashMap;

use crate::value::SecretValue;

/// Host-owned session context for one configuration-resolution pass.
///
/// The cache lives exactly as long as the session and is keyed by the
/// original, untransformed key. `explain` is side-effect only and never
/// affects control flow.
pub trait SessionContext {
    /// Lazy diagnostic logging; the thunk runs only when diagnostics are on
    fn explain<F: FnOnce() -> String>(&self, message: F);

    fn cache_has_key(&self, key: &str) -> bool;

    fn cached_value(&self, key: &str) -> Option<SecretValue>;

    fn cache(&mut self, key: &str, value: SecretValue);
}

/// In-memory session, one per resolution pass.
#[derive(Debug, Default)]
pub struct Session {
    cache: HashMap<String, SecretValue>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionContext for Session {
    fn explain<F: FnOnce() -> String>(&self, message: F) {
        if tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!("{}", message());
        }
    }

    fn cache_has_key(&self, key: &str) -> bool {
        self.cache.contains_key(key)
    }

    fn cached_value(&self, key: &str) -> Option<SecretValue> {
        self.cache.get(key).cloned()
    }

    fn cache(&mut self, key: &str, value: SecretValue) {
        self.cache.insert(key.to_string(), value);
    }
}
