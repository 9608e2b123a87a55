//! Greeting endpoint.
//!
//! Returns `"<greeting> (<count>, <hostname>)"` where the greeting is read
//! from the environment on every request, the count is the number of prior
//! greeting requests, and the hostname was captured at startup.

use std::sync::atomic::Ordering;

use axum::extract::State;
use tracing::instrument;

use crate::config::{DEFAULT_GREETING, GREETING_KEY};
use crate::state::AppState;

/// Greeting handler.
///
/// The counter is bumped atomically; the response carries the value from
/// before the bump, so the first request reports 0. No ordering between
/// concurrent requests is guaranteed, only that each observes a unique count.
#[instrument(name = "greeting::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> String {
    let greeting = state.env.value_or(GREETING_KEY, DEFAULT_GREETING);
    let count = state.invocations.fetch_add(1, Ordering::Relaxed);

    let msg = format!("{} ({}, {})", greeting, count, state.hostname);
    tracing::info!("{}", msg);
    msg
}
