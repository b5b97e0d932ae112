//! Redis cache adapters.
//!
//! Connections come from a shared `bb8-redis` pool; adapters check one out
//! per command and return it immediately.

mod pool;
mod redis_counter_cache;

pub use pool::{CachePoolConfig, CachePoolError, RedisPool};
pub use redis_counter_cache::RedisCounterCache;
