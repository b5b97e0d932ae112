//! Rendering of `{data, total_data}` envelopes as HTTP responses.

use actix_web::HttpResponse;
use actix_web::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ContentType};
use pagination::Envelope;
use serde::Serialize;
use tracing::error;

use crate::domain::Error;

use super::ApiResult;

/// Serialise `envelope` into a `200 OK` JSON response open to any origin.
///
/// The body is fully serialised before the response is built, so a payload
/// that cannot be represented as JSON yields an `internal_error` rather than
/// a truncated body.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use pagination::Envelope;
/// use roster::inbound::http::envelope::envelope_response;
///
/// let response = envelope_response(&Envelope::collection(vec![1, 2])).expect("serialisable");
/// assert_eq!(response.status(), StatusCode::OK);
/// ```
pub fn envelope_response<T: Serialize>(envelope: &Envelope<T>) -> ApiResult<HttpResponse> {
    let body = envelope.to_json_vec().map_err(|err| {
        error!(error = %err, "response envelope serialisation failed");
        Error::internal(format!("response serialisation failed: {err}"))
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .body(body))
}
