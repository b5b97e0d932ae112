//! Shared Redis connection pool built on `bb8-redis`.
//!
//! Mirrors the PostgreSQL pool: a bounded number of multiplexed connections,
//! established lazily, with a checkout timeout so an unreachable server fails
//! requests quickly instead of stalling them.

use std::time::Duration;

use bb8_redis::RedisConnectionManager;
use bb8_redis::bb8::{Pool, PooledConnection, RunError};
use bb8_redis::redis::RedisError;

/// Default upper bound on pooled connections.
pub const DEFAULT_MAX_SIZE: u32 = 10;

/// Default checkout timeout.
pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur during cache pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CachePoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get cache connection from pool: {message}")]
    Checkout { message: String },

    /// Failed to build the pool, typically because the URL is invalid.
    #[error("failed to build cache connection pool: {message}")]
    Build { message: String },
}

impl CachePoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

impl From<RunError<RedisError>> for CachePoolError {
    fn from(error: RunError<RedisError>) -> Self {
        match error {
            RunError::User(inner) => Self::checkout(inner.to_string()),
            RunError::TimedOut => Self::checkout("timed out waiting for a connection"),
        }
    }
}

/// Configuration for the Redis connection pool.
#[derive(Debug, Clone)]
pub struct CachePoolConfig {
    redis_url: String,
    max_size: u32,
    connection_timeout: Duration,
}

impl CachePoolConfig {
    /// Create a configuration for `redis_url` with default limits.
    pub fn new(redis_url: impl Into<String>) -> Self {
        Self {
            redis_url: redis_url.into(),
            max_size: DEFAULT_MAX_SIZE,
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
        }
    }

    /// Set the maximum number of connections in the pool (at least one).
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size.max(1);
        self
    }

    /// Set the connection checkout timeout.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Connection URL.
    pub fn redis_url(&self) -> &str {
        &self.redis_url
    }

    /// Maximum pooled connections.
    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    /// How long a checkout waits for a connection.
    pub fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }
}

/// Async connection pool for Redis.
#[derive(Clone)]
pub struct RedisPool {
    inner: Pool<RedisConnectionManager>,
}

impl RedisPool {
    /// Create a new pool with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `CachePoolError::Build` when the URL cannot be parsed.
    pub async fn new(config: CachePoolConfig) -> Result<Self, CachePoolError> {
        let manager = RedisConnectionManager::new(config.redis_url.as_str())
            .map_err(|err| CachePoolError::build(err.to_string()))?;

        let pool = Pool::builder()
            .max_size(config.max_size)
            .min_idle(None)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| CachePoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Get a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns `CachePoolError::Checkout` if a connection cannot be obtained
    /// within the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, RedisConnectionManager>, CachePoolError> {
        Ok(self.inner.get().await?)
    }
}
