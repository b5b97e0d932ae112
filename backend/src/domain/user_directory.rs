//! User directory service implementing the [`UsersQuery`] driving port.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersQuery};
use crate::domain::{Error, User, UserListRequest};

/// Lists users from a [`UserRepository`] and derives each user's age from
/// the injected clock.
#[derive(Clone)]
pub struct UserDirectoryService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> UserDirectoryService<R> {
    /// Create a new service over `repo`, reading "now" from `clock`.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> UsersQuery for UserDirectoryService<R>
where
    R: UserRepository,
{
    async fn list_users(&self, request: &UserListRequest) -> Result<Vec<User>, Error> {
        let records = self
            .repo
            .list(request)
            .await
            .map_err(map_persistence_error)?;
        let now = self.clock.utc();
        Ok(records
            .into_iter()
            .map(|record| User::from_record(record, &now))
            .collect())
    }
}
