//! Per-handler visit counters.
//!
//! A counter lives under the cache key `counter:<handler>` in the hash field
//! `check`, stored as the JSON document `{"counter": n}`.

use serde::{Deserialize, Serialize};

/// Hash field holding the counter document.
pub const COUNTER_FIELD: &str = "check";

const KEY_PREFIX: &str = "counter:";

/// Current value of a visit counter.
///
/// # Examples
/// ```
/// use roster::domain::Counter;
///
/// let counter = Counter::decode(Some(br#"{"counter":4}"#.as_slice())).next();
/// assert_eq!(counter.value(), 5);
/// assert_eq!(Counter::decode(Some(b"garbage".as_slice())).value(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    counter: i64,
}

impl Counter {
    /// Counter holding `value` visits.
    pub const fn new(value: i64) -> Self {
        Self { counter: value }
    }

    /// Visits recorded so far.
    pub const fn value(self) -> i64 {
        self.counter
    }

    /// The value after one more visit.
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            counter: self.counter.saturating_add(1),
        }
    }

    /// Decode stored bytes; an absent or malformed value, including one that
    /// is not UTF-8, reads as zero.
    pub fn decode(raw: Option<&[u8]>) -> Self {
        raw.and_then(|raw| serde_json::from_slice(raw).ok())
            .unwrap_or_default()
    }

    /// Encode the stored document form.
    pub fn encode(self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self)
    }
}

/// Cache key of the counter belonging to `handler`.
///
/// Handlers are opaque; the empty handler is a valid, shared counter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CounterKey {
    key: String,
}

impl CounterKey {
    /// Key for `handler`'s counter.
    pub fn new(handler: &str) -> Self {
        Self {
            key: format!("{KEY_PREFIX}{handler}"),
        }
    }

    /// Full cache key, including the `counter:` prefix.
    pub fn as_str(&self) -> &str {
        self.key.as_str()
    }

    /// Handler name the key was built from.
    pub fn handler(&self) -> &str {
        self.key.get(KEY_PREFIX.len()..).unwrap_or_default()
    }

    /// Hash field holding the document.
    pub fn field(&self) -> &'static str {
        COUNTER_FIELD
    }
}

impl std::fmt::Display for CounterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
