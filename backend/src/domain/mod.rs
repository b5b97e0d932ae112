//! Domain primitives, services and ports.
//!
//! Purpose: Define the user directory and visit counter use-cases
//! independently of HTTP, SQL and Redis. Adapters in `inbound` and
//! `outbound` depend on this module, never the other way round.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - TraceId: request correlation identifier in task-local scope.
//! - User / UserRecord / UserId: directory entries with derived age.
//! - UserSearch / UserListRequest: listing filter and page window.
//! - Counter / CounterKey: per-handler visit counters.
//! - calendar_diff / CalendarDiff / age_in_years: calendar arithmetic.
//! - UserDirectoryService / CounterService: driving port implementations.

mod calendar;
mod counter;
mod counter_service;
mod error;
pub mod ports;
mod trace_id;
mod user;
mod user_directory;
mod user_search;

pub use self::calendar::{CalendarDiff, age_in_years, calendar_diff};
pub use self::counter::{COUNTER_FIELD, Counter, CounterKey};
pub use self::counter_service::{CounterService, DEFAULT_MAX_ATTEMPTS};
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserRecord};
pub use self::user_directory::UserDirectoryService;
pub use self::user_search::{UserListRequest, UserSearch};
