//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Listing filters `full_name` with `ILIKE` against a bound pattern, so the
//! search term never becomes part of the SQL text.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{UserListRequest, UserRecord};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::UserRow;
use super::pool::{DbPool, PoolError};
use super::schema::ws_user;

/// Diesel-backed implementation of the `UserRepository` port.
///
/// Point the pool at a read replica to keep listing traffic off the primary.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_basic_pool_error(error, |message| UserPersistenceError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_basic_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

/// Listing query: optional name filter, newest identifier first, then the
/// requested window.
fn list_query(request: &UserListRequest) -> ws_user::BoxedQuery<'static, Pg> {
    let mut query: ws_user::BoxedQuery<'static, Pg> =
        ws_user::table.order(ws_user::user_id.desc()).into_boxed();

    if let Some(pattern) = request.search().like_pattern() {
        query = query.filter(ws_user::full_name.ilike(pattern));
    }

    let page = request.page();
    query.limit(page.limit_i64()).offset(page.offset_i64())
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(
        &self,
        request: &UserListRequest,
    ) -> Result<Vec<UserRecord>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = list_query(request)
            .load::<UserRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(UserRecord::from).collect())
    }
}
