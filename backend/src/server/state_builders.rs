//! Builders for HTTP state ports.
//!
//! Store-backed adapters are used when a pool is configured; otherwise the
//! in-memory fixtures keep the server usable for development and tests.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use roster::domain::ports::{
    CounterStore, FixtureCounterCache, FixtureUserRepository, UsersQuery,
};
use roster::domain::{CounterService, UserDirectoryService};
use roster::inbound::http::state::HttpState;
use roster::outbound::cache::RedisCounterCache;
use roster::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

fn build_users_query(config: &ServerConfig) -> Arc<dyn UsersQuery> {
    let clock = Arc::new(DefaultClock);
    match &config.db_pool {
        Some(pool) => Arc::new(UserDirectoryService::new(
            Arc::new(DieselUserRepository::new(pool.clone())),
            clock,
        )),
        None => Arc::new(UserDirectoryService::new(
            Arc::new(FixtureUserRepository::seeded()),
            clock,
        )),
    }
}

fn build_counter_store(config: &ServerConfig) -> Arc<dyn CounterStore> {
    let attempts = config.counter_max_attempts;
    match &config.cache_pool {
        Some(pool) => Arc::new(CounterService::with_max_attempts(
            Arc::new(RedisCounterCache::new(pool.clone())),
            attempts,
        )),
        None => Arc::new(CounterService::with_max_attempts(
            Arc::new(FixtureCounterCache::default()),
            attempts,
        )),
    }
}

pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        build_users_query(config),
        build_counter_store(config),
    ))
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use super::*;
    use roster::domain::UserListRequest;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn missing_stores_fall_back_to_fixtures() {
        let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)));
        let state = build_http_state(&config);

        let users = state
            .users
            .list_users(&UserListRequest::new("", 10, 0))
            .await
            .expect("fixture users");
        assert_eq!(users.len(), 3);

        assert_eq!(state.counters.increment("home").await.value(), 1);
        assert_eq!(state.counters.read("home").await.value(), 1);
    }
}
