//! Limit/offset page requests and the `{data, total_data}` response envelope
//! shared by roster endpoints.
//!
//! Endpoints accept pagination input as raw query strings. [`PageRequest`]
//! turns that input into a bounded, non-negative window, falling back to
//! [`DEFAULT_LIMIT`] and [`DEFAULT_OFFSET`] when a value is missing or
//! unusable. [`Envelope`] wraps any serialisable payload and derives the
//! `total_data` count from whether the payload is a single item or a
//! collection.

mod envelope;
mod page;

pub use envelope::{Envelope, Payload};
pub use page::{DEFAULT_LIMIT, DEFAULT_OFFSET, PageRequest, PageRequestError};
