//! HTTP inbound adapter exposing REST endpoints.

pub mod counter;
pub mod envelope;
pub mod error;
pub mod health;
pub mod query;
pub mod schemas;
pub mod state;
pub mod users;

pub use error::ApiResult;
