//! Roster service library: a paginated user directory backed by PostgreSQL
//! and per-handler visit counters backed by Redis.
//!
//! The crate follows a ports-and-adapters layout. [`domain`] holds the
//! business types and port traits, [`inbound`] the HTTP adapter and
//! [`outbound`] the Diesel and Redis adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
