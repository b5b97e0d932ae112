//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use roster::domain::DEFAULT_MAX_ATTEMPTS;
use roster::outbound::cache::RedisPool;
use roster::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) cache_pool: Option<RedisPool>,
    pub(crate) counter_max_attempts: u32,
}

impl ServerConfig {
    /// Construct a server configuration with no stores attached.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            cache_pool: None,
            counter_max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Attach the pool user listings read from.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Attach the Redis pool backing visit counters.
    #[must_use]
    pub fn with_cache_pool(mut self, pool: RedisPool) -> Self {
        self.cache_pool = Some(pool);
        self
    }

    /// Bound the compare-and-swap attempts per counter increment.
    #[must_use]
    pub fn with_counter_max_attempts(mut self, attempts: u32) -> Self {
        self.counter_max_attempts = attempts;
        self
    }
}
