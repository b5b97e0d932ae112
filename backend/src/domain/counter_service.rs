//! Visit counter service implementing the [`CounterStore`] driving port.
//!
//! Increments run an optimistic compare-and-swap loop against the
//! [`CounterCache`]: read the stored document, compute the next value, and
//! write it back only if the stored document has not changed in between. A
//! lost race re-reads and retries, up to a bounded number of attempts.
//!
//! Store failures never reach the caller. A failed read counts as zero and a
//! failed or abandoned write still returns the computed value; both are
//! logged.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{CounterCache, CounterStore};
use crate::domain::{Counter, CounterKey};

/// Default number of compare-and-swap attempts per increment.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;

/// Best-effort counter service over a [`CounterCache`].
#[derive(Clone)]
pub struct CounterService<C> {
    cache: Arc<C>,
    max_attempts: u32,
}

impl<C> CounterService<C> {
    /// Create a service using [`DEFAULT_MAX_ATTEMPTS`].
    pub fn new(cache: Arc<C>) -> Self {
        Self::with_max_attempts(cache, DEFAULT_MAX_ATTEMPTS)
    }

    /// Create a service with an explicit attempt bound (at least one).
    pub fn with_max_attempts(cache: Arc<C>, max_attempts: u32) -> Self {
        Self {
            cache,
            max_attempts: max_attempts.max(1),
        }
    }
}

impl<C> CounterService<C>
where
    C: CounterCache,
{
    async fn load_raw(&self, key: &CounterKey) -> Option<Vec<u8>> {
        match self.cache.load(key).await {
            Ok(raw) => raw,
            Err(error) => {
                warn!(
                    %error,
                    handler = key.handler(),
                    operation = "load",
                    "counter read failed; treating as zero"
                );
                None
            }
        }
    }
}

#[async_trait]
impl<C> CounterStore for CounterService<C>
where
    C: CounterCache,
{
    async fn increment(&self, handler: &str) -> Counter {
        let key = CounterKey::new(handler);
        let mut next = Counter::default().next();

        for attempt in 1..=self.max_attempts {
            let current = self.load_raw(&key).await;
            next = Counter::decode(current.as_deref()).next();

            let encoded = match next.encode() {
                Ok(encoded) => encoded,
                Err(error) => {
                    warn!(%error, handler, operation = "encode", "counter not persisted");
                    return next;
                }
            };

            match self
                .cache
                .compare_and_swap(&key, current.as_deref(), &encoded)
                .await
            {
                Ok(true) => return next,
                Ok(false) => {
                    debug!(handler, attempt, "counter changed concurrently; retrying");
                }
                Err(error) => {
                    warn!(%error, handler, operation = "store", "counter not persisted");
                    return next;
                }
            }
        }

        warn!(
            handler,
            attempts = self.max_attempts,
            operation = "store",
            "counter update abandoned after repeated conflicts"
        );
        next
    }

    async fn read(&self, handler: &str) -> Counter {
        let key = CounterKey::new(handler);
        Counter::decode(self.load_raw(&key).await.as_deref())
    }
}
