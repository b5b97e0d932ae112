//! Shared helpers for integration tests against a live Redis.
//!
//! Suites read their connection URL from the environment and skip with a
//! marker on stderr when it is unset, so `cargo test` stays green on machines
//! without Redis. PostgreSQL suites use the embedded cluster in `pg_embed.rs`.

/// Redis URL for the counter cache suite.
pub const REDIS_URL_VAR: &str = "ROSTER_TEST_REDIS_URL";

/// Return the URL stored in `var`, or print a skip marker and return `None`.
pub fn store_url(var: &str) -> Option<String> {
    match std::env::var(var) {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("SKIP-TEST-STORE: {var} is not set");
            None
        }
    }
}
