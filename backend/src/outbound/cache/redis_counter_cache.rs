//! Redis-backed `CounterCache` adapter.
//!
//! Counters live in hashes (`HGET`/`HSET` on the key's field). The
//! compare-and-swap runs as a Lua script so the check and the write happen
//! atomically on the server.

use async_trait::async_trait;
use bb8_redis::redis::{self, RedisError};
use tracing::debug;

use crate::domain::CounterKey;
use crate::domain::ports::{CounterCache, CounterCacheError};

use super::pool::{CachePoolError, RedisPool};

/// `KEYS[1]` hash key; `ARGV`: field, expectation flag (`1` when a value
/// is expected, `0` when the field must be absent), expected value, new value.
const COMPARE_AND_SWAP_SCRIPT: &str = r"
local current = redis.call('HGET', KEYS[1], ARGV[1])
if ARGV[2] == '1' then
  if current ~= ARGV[3] then return 0 end
else
  if current then return 0 end
end
redis.call('HSET', KEYS[1], ARGV[1], ARGV[4])
return 1
";

/// `CounterCache` implementation over a shared [`RedisPool`].
#[derive(Clone)]
pub struct RedisCounterCache {
    pool: RedisPool,
}

impl RedisCounterCache {
    /// Create a new cache adapter with the given pool.
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: CachePoolError) -> CounterCacheError {
    match error {
        CachePoolError::Checkout { message } | CachePoolError::Build { message } => {
            CounterCacheError::connection(message)
        }
    }
}

fn map_redis_error(error: RedisError) -> CounterCacheError {
    debug!(kind = ?error.kind(), %error, "redis command failed");
    if error.is_io_error() || error.is_connection_dropped() || error.is_timeout() {
        CounterCacheError::connection(error.to_string())
    } else {
        CounterCacheError::backend(error.to_string())
    }
}

fn compare_and_swap_command(key: &CounterKey, expected: Option<&[u8]>, value: &[u8]) -> redis::Cmd {
    let (flag, expected) = match expected {
        Some(expected) => ("1", expected),
        None => ("0", &[][..]),
    };
    let mut cmd = redis::cmd("EVAL");
    cmd.arg(COMPARE_AND_SWAP_SCRIPT)
        .arg(1)
        .arg(key.as_str())
        .arg(key.field())
        .arg(flag)
        .arg(expected)
        .arg(value);
    cmd
}

#[async_trait]
impl CounterCache for RedisCounterCache {
    async fn load(&self, key: &CounterKey) -> Result<Option<Vec<u8>>, CounterCacheError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let raw: Option<Vec<u8>> = redis::cmd("HGET")
            .arg(key.as_str())
            .arg(key.field())
            .query_async(&mut *conn)
            .await
            .map_err(map_redis_error)?;
        Ok(raw)
    }

    async fn compare_and_swap(
        &self,
        key: &CounterKey,
        expected: Option<&[u8]>,
        value: &[u8],
    ) -> Result<bool, CounterCacheError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let swapped: i64 = compare_and_swap_command(key, expected, value)
            .query_async(&mut *conn)
            .await
            .map_err(map_redis_error)?;
        Ok(swapped == 1)
    }
}
