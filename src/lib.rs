//! Hail: a tiny greeting service.
//!
//! Exposes a greeting endpoint that reports an invocation count and the
//! host identity, plus a liveness probe for deployment tooling. The
//! library surface exists so integration tests can assemble the router
//! and state directly.

pub mod config;
pub mod env;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
