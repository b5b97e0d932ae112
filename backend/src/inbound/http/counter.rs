//! Per-handler visit counter.
//!
//! ```text
//! GET /counter?handler=home&c=1   increment, then return the new value
//! GET /counter?handler=home       read only
//! ```

use actix_web::{HttpResponse, get, web};
use pagination::Envelope;
use utoipa::IntoParams;

use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::envelope_response;
use crate::inbound::http::query::{QueryPairs, first_value};
use crate::inbound::http::schemas::{CounterEnvelopeSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Query string of `GET /counter`. A repeated key keeps its first value.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CounterParams {
    /// Counter name; missing means the empty name.
    pub handler: Option<String>,
    /// `1` records a visit before reading; any other value only reads.
    pub c: Option<String>,
}

impl CounterParams {
    fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            handler: first_value(pairs, "handler"),
            c: first_value(pairs, "c"),
        }
    }

    fn handler(&self) -> &str {
        self.handler.as_deref().unwrap_or_default()
    }

    fn increments(&self) -> bool {
        self.c.as_deref() == Some("1")
    }
}

/// Read, and optionally bump, a visit counter.
///
/// Counter storage is best-effort: an unavailable store yields the value the
/// service could compute rather than an error.
#[utoipa::path(
    get,
    path = "/counter",
    params(CounterParams),
    responses(
        (status = 200, description = "Counter value", body = CounterEnvelopeSchema),
        (status = 500, description = "Response could not be serialised", body = ErrorSchema)
    ),
    tags = ["counter"],
    operation_id = "visitCounter"
)]
#[get("/counter")]
pub async fn counter(
    state: web::Data<HttpState>,
    query: QueryPairs,
) -> ApiResult<HttpResponse> {
    let params = CounterParams::from_pairs(&query);
    let handler = params.handler();
    let value = if params.increments() {
        state.counters.increment(handler).await
    } else {
        state.counters.read(handler).await
    };
    envelope_response(&Envelope::single(value))
}
