//! Lenient query-string access.
//!
//! Handlers extract the raw pairs instead of a typed struct so a repeated
//! key never rejects the request: the first occurrence wins.

use actix_web::web;

/// Query string pairs in request order.
pub type QueryPairs = web::Query<Vec<(String, String)>>;

/// First value supplied for `name`, if any.
pub fn first_value(pairs: &[(String, String)], name: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
}
