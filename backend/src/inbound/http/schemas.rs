//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the serialised shape of their domain
//! counterparts but live in the inbound adapter layer where framework
//! concerns belong.

use chrono::{DateTime, Utc};
use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// A backing store is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "internal_error")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Internal server error")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Stable numeric identifier.
    #[schema(example = 42)]
    user_id: i64,
    #[schema(example = "Ada Lovelace")]
    full_name: String,
    #[schema(example = "ada@example.com")]
    email: String,
    birth_date: DateTime<Utc>,
    create_time: DateTime<Utc>,
    update_time: DateTime<Utc>,
    /// Mobile number.
    #[schema(example = "628123456789")]
    msisdn: String,
    /// Whole years elapsed since `birth_date` at response time.
    #[schema(example = 36)]
    age: i32,
}

/// OpenAPI schema for [`crate::domain::Counter`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Counter)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CounterSchema {
    /// Visits recorded for the handler.
    #[schema(example = 3)]
    counter: i64,
}

/// Envelope returned by `GET /users`.
#[derive(ToSchema)]
#[schema(as = UsersEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UsersEnvelopeSchema {
    data: Vec<UserSchema>,
    /// Number of entries in `data`.
    #[schema(example = 1)]
    total_data: u64,
}

/// Envelope returned by `GET /counter`.
#[derive(ToSchema)]
#[schema(as = CounterEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CounterEnvelopeSchema {
    data: CounterSchema,
    /// Always `0` for single-object payloads.
    #[schema(example = 0)]
    total_data: u64,
}
