//! Driving port for visit counters.
//!
//! Counter operations are best-effort: store failures are absorbed by the
//! implementation, so callers always get a value back.

use async_trait::async_trait;

use crate::domain::Counter;

/// Domain use-case port for reading and bumping per-handler counters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Record one visit for `handler` and return the new value.
    async fn increment(&self, handler: &str) -> Counter;

    /// Current value for `handler` without recording a visit.
    async fn read(&self, handler: &str) -> Counter;
}
