//! Service configuration loaded via OrthoConfig.
//!
//! Values come from `ROSTER_*` environment variables, command-line flags or a
//! configuration file. Every setting is optional; accessors supply defaults.

use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::DEFAULT_MAX_ATTEMPTS;
use crate::outbound::persistence::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE};

/// Listen address used when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime settings for the HTTP server and its stores.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct Settings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Primary PostgreSQL URL. Without it the user directory serves fixtures.
    pub database_url: Option<String>,
    /// Read replica URL used for listings instead of the primary.
    pub database_replica_url: Option<String>,
    /// Redis URL. Without it counters live in process memory.
    pub redis_url: Option<String>,
    /// Maximum connections per pool.
    pub pool_max_size: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_timeout_secs: Option<u64>,
    /// Compare-and-swap attempts per counter increment.
    pub counter_max_attempts: Option<u32>,
}

impl Settings {
    /// Parse the configured listen address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when the configured value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// URL listings read from: the replica when set, otherwise the primary.
    pub fn read_database_url(&self) -> Option<&str> {
        self.database_replica_url
            .as_deref()
            .or(self.database_url.as_deref())
    }

    /// Connections per pool, defaulting to the pool wrappers' default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }

    /// Checkout timeout shared by both pools.
    pub fn pool_timeout(&self) -> Duration {
        self.pool_timeout_secs
            .map_or(DEFAULT_CONNECTION_TIMEOUT, Duration::from_secs)
    }

    /// Compare-and-swap attempts per increment.
    pub fn counter_max_attempts(&self) -> u32 {
        self.counter_max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS)
    }
}
