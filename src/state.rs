//! Shared application state for request handlers.

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use crate::config::{AppConfig, DEFAULT_HOSTNAME, HOSTNAME_KEY};
use crate::env::ValueSource;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the application configuration, the environment value source,
/// the host identity captured at startup, and the invocation counter.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub env: Arc<dyn ValueSource>,
    /// Host identity, read from `HOSTNAME` once at construction and
    /// immutable for the process lifetime.
    pub hostname: Arc<str>,
    /// Count of greeting requests served since process start.
    pub invocations: Arc<AtomicU64>,
}

impl AppState {
    /// Creates a new application state, capturing the host identity from
    /// the given value source.
    pub fn new(config: AppConfig, env: Arc<dyn ValueSource>) -> Self {
        let hostname = env.value_or(HOSTNAME_KEY, DEFAULT_HOSTNAME);
        Self {
            config: Arc::new(config),
            env,
            hostname: hostname.into(),
            invocations: Arc::new(AtomicU64::new(0)),
        }
    }
}
