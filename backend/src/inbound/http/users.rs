//! User directory listing.
//!
//! ```text
//! GET /users?search=ada&limit=10&offset=0
//! ```

use actix_web::{HttpResponse, get, web};
use pagination::{Envelope, PageRequest};
use tracing::warn;
use utoipa::IntoParams;

use crate::domain::{UserListRequest, UserSearch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::envelope_response;
use crate::inbound::http::query::{QueryPairs, first_value};
use crate::inbound::http::schemas::{ErrorSchema, UsersEnvelopeSchema};
use crate::inbound::http::state::HttpState;

/// Query string of `GET /users`.
///
/// Values arrive as raw strings so unusable pagination input can fall back
/// to defaults instead of rejecting the request. A repeated key keeps its
/// first value.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersParams {
    /// Case-insensitive substring of the full name.
    pub search: Option<String>,
    /// Page size; missing, non-numeric or negative values mean 10.
    #[param(value_type = Option<i64>)]
    pub limit: Option<String>,
    /// Rows to skip; missing, non-numeric or negative values mean 0.
    #[param(value_type = Option<i64>)]
    pub offset: Option<String>,
}

impl ListUsersParams {
    fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            search: first_value(pairs, "search"),
            limit: first_value(pairs, "limit"),
            offset: first_value(pairs, "offset"),
        }
    }
}

impl From<&ListUsersParams> for UserListRequest {
    fn from(params: &ListUsersParams) -> Self {
        let search = UserSearch::new(params.search.as_deref().unwrap_or_default());
        let page = PageRequest::from_query(params.limit.as_deref(), params.offset.as_deref());
        Self::with_page(search, page)
    }
}

/// List users, newest identifier first.
///
/// A failing store degrades to an empty page; the failure is logged with the
/// request's trace identifier.
#[utoipa::path(
    get,
    path = "/users",
    params(ListUsersParams),
    responses(
        (status = 200, description = "Users page", body = UsersEnvelopeSchema),
        (status = 500, description = "Response could not be serialised", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: QueryPairs,
) -> ApiResult<HttpResponse> {
    let request = UserListRequest::from(&ListUsersParams::from_pairs(&query));
    let users = match state.users.list_users(&request).await {
        Ok(users) => users,
        Err(error) => {
            warn!(
                %error,
                code = ?error.code(),
                operation = "list_users",
                "user listing failed; returning an empty page"
            );
            Vec::new()
        }
    };
    envelope_response(&Envelope::collection(users))
}

#[cfg(test)]
mod tests {
    //! Handler behaviour over a mocked users port.

    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{FixtureCounterCache, MockUsersQuery};
    use crate::domain::{CounterService, Error, User, UserId, UserRecord};
    use actix_web::http::StatusCode;
    use actix_web::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
    use actix_web::{App, test};
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use serde_json::{Value, json};

    fn user(id: i64, name: &str) -> User {
        let at = Utc
            .with_ymd_and_hms(2000, 1, 1, 0, 0, 0)
            .single()
            .expect("valid timestamp");
        let record = UserRecord {
            id: UserId::new(id),
            full_name: name.to_owned(),
            email: format!("{id}@example.com"),
            birth_date: at,
            create_time: at,
            update_time: at,
            msisdn: "628".to_owned(),
        };
        User::from_record(record, &at)
    }

    fn state(users: MockUsersQuery) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            Arc::new(users),
            Arc::new(CounterService::new(Arc::new(FixtureCounterCache::default()))),
        ))
    }

    async fn call(users: MockUsersQuery, uri: &str) -> (StatusCode, Option<String>, Value) {
        let app = test::init_service(App::new().app_data(state(users)).service(list_users)).await;
        let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = response.status();
        let cors = response
            .headers()
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body: Value = test::read_body_json(response).await;
        (status, cors, body)
    }

    #[rstest]
    #[actix_web::test]
    async fn lists_users_in_an_envelope() {
        let mut users = MockUsersQuery::new();
        users
            .expect_list_users()
            .times(1)
            .return_once(|_| Ok(vec![user(2, "Grace"), user(1, "Ada")]));

        let (status, cors, body) = call(users, "/users").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(cors.as_deref(), Some("*"));
        assert_eq!(body["total_data"], json!(2));
        assert_eq!(body["data"][0]["user_id"], json!(2));
        assert_eq!(body["data"][1]["full_name"], json!("Ada"));
        assert_eq!(body["data"][1]["age"], json!(0));
    }

    #[rstest]
    #[case("/users?search=ada&limit=5&offset=15", Some("ada"), 5, 15)]
    #[case("/users?limit=abc&offset=-3", None, 10, 0)]
    #[case("/users?search=&limit=-1", None, 10, 0)]
    #[case("/users?search=%25x_", Some("%x_"), 10, 0)]
    #[case("/users?limit=1&limit=2", None, 1, 0)]
    #[case("/users?search=a&search=b&offset=4&offset=x", Some("a"), 10, 4)]
    #[case("/users?offset&limit=3&limit=", None, 3, 0)]
    #[actix_web::test]
    async fn query_string_is_normalised(
        #[case] uri: &str,
        #[case] term: Option<&'static str>,
        #[case] limit: u32,
        #[case] offset: u32,
    ) {
        let mut users = MockUsersQuery::new();
        users
            .expect_list_users()
            .withf(move |request| {
                request.search().term() == term
                    && request.page().limit() == limit
                    && request.page().offset() == offset
            })
            .times(1)
            .return_once(|_| Ok(Vec::new()));

        let (status, _, body) = call(users, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data": [], "total_data": 0 }));
    }

    #[rstest]
    #[case(Error::service_unavailable("db down"))]
    #[case(Error::internal("bad column"))]
    #[actix_web::test]
    async fn store_failure_degrades_to_an_empty_page(#[case] failure: Error) {
        let mut users = MockUsersQuery::new();
        users
            .expect_list_users()
            .times(1)
            .return_once(move |_| Err(failure));

        let (status, cors, body) = call(users, "/users").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(cors.as_deref(), Some("*"));
        assert_eq!(body, json!({ "data": [], "total_data": 0 }));
    }
}
