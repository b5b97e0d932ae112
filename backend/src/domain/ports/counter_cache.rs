//! Port interface for the key-value store holding visit counters.
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::CounterKey;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced by the counter cache adapter.
    pub enum CounterCacheError {
        /// Connection could not be checked out of the pool.
        Connection { message: String } => "counter cache connection failed: {message}",
        /// Cache backend rejected or failed the command.
        Backend { message: String } => "counter cache backend failure: {message}",
    }
}

/// Raw access to stored counter documents.
///
/// Values are opaque bytes here, compared exactly as stored; decoding
/// belongs to the domain.
#[async_trait]
pub trait CounterCache: Send + Sync {
    /// Read the stored document for `key`, if any.
    async fn load(&self, key: &CounterKey) -> Result<Option<Vec<u8>>, CounterCacheError>;

    /// Atomically replace the stored document with `value` when it still
    /// equals `expected` (`None` meaning "absent").
    ///
    /// Returns `false` when another writer got there first.
    async fn compare_and_swap(
        &self,
        key: &CounterKey,
        expected: Option<&[u8]>,
        value: &[u8],
    ) -> Result<bool, CounterCacheError>;
}

/// Process-local counter cache used when no Redis URL is configured.
#[derive(Debug, Default)]
pub struct FixtureCounterCache {
    values: Mutex<HashMap<String, Vec<u8>>>,
}

impl FixtureCounterCache {
    fn with_values<T>(
        &self,
        f: impl FnOnce(&mut HashMap<String, Vec<u8>>) -> T,
    ) -> Result<T, CounterCacheError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|_| CounterCacheError::backend("fixture counter cache poisoned"))?;
        Ok(f(&mut guard))
    }
}

#[async_trait]
impl CounterCache for FixtureCounterCache {
    async fn load(&self, key: &CounterKey) -> Result<Option<Vec<u8>>, CounterCacheError> {
        self.with_values(|values| values.get(key.as_str()).cloned())
    }

    async fn compare_and_swap(
        &self,
        key: &CounterKey,
        expected: Option<&[u8]>,
        value: &[u8],
    ) -> Result<bool, CounterCacheError> {
        self.with_values(|values| {
            if values.get(key.as_str()).map(Vec::as_slice) != expected {
                return false;
            }
            values.insert(key.as_str().to_owned(), value.to_owned());
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn swap_from_absent_only_succeeds_once() {
        let cache = FixtureCounterCache::default();
        let key = CounterKey::new("home");

        assert!(cache.compare_and_swap(&key, None, b"a").await.expect("swap"));
        assert!(!cache.compare_and_swap(&key, None, b"b").await.expect("swap"));
        assert_eq!(cache.load(&key).await.expect("load"), Some(b"a".to_vec()));
    }

    #[rstest]
    #[tokio::test]
    async fn swap_requires_the_expected_value() {
        let cache = FixtureCounterCache::default();
        let key = CounterKey::new("home");
        cache.compare_and_swap(&key, None, b"a").await.expect("seed");

        assert!(!cache.compare_and_swap(&key, Some(b"x".as_slice()), b"b").await.expect("swap"));
        assert!(cache.compare_and_swap(&key, Some(b"a".as_slice()), b"b").await.expect("swap"));
        assert_eq!(cache.load(&key).await.expect("load"), Some(b"b".to_vec()));
    }

    #[rstest]
    #[tokio::test]
    async fn keys_are_independent() {
        let cache = FixtureCounterCache::default();
        cache
            .compare_and_swap(&CounterKey::new("a"), None, b"1")
            .await
            .expect("seed");
        assert!(cache.load(&CounterKey::new("b")).await.expect("load").is_none());
    }
}
