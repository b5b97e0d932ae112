//! Service entry-point: loads settings, builds store pools and serves the
//! REST endpoints with OpenAPI docs.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use roster::inbound::http::health::HealthState;
use roster::outbound::cache::{CachePoolConfig, RedisPool};
use roster::outbound::persistence::{DbPool, PoolConfig};
use roster::settings::Settings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = Settings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("invalid bind address: {e}"),
        )
    })?;

    let mut config = ServerConfig::new(bind_addr)
        .with_counter_max_attempts(settings.counter_max_attempts());

    match settings.read_database_url() {
        Some(url) => {
            let pool_config = PoolConfig::new(url)
                .with_max_size(settings.pool_max_size())
                .with_connection_timeout(settings.pool_timeout());
            let pool = DbPool::new(pool_config)
                .await
                .map_err(|e| std::io::Error::other(format!("database pool: {e}")))?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database URL configured; serving fixture users"),
    }

    match settings.redis_url.as_deref() {
        Some(url) => {
            let pool_config = CachePoolConfig::new(url)
                .with_max_size(settings.pool_max_size())
                .with_connection_timeout(settings.pool_timeout());
            let pool = RedisPool::new(pool_config)
                .await
                .map_err(|e| std::io::Error::other(format!("redis pool: {e}")))?;
            config = config.with_cache_pool(pool);
        }
        None => warn!("no Redis URL configured; counters are kept in memory"),
    }

    info!(%bind_addr, "starting HTTP server");
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
