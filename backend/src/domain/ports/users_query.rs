//! Driving port for user directory listings.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch users without
//! importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User, UserListRequest};

/// Domain use-case port for listing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return the users matching `request`, each with its derived age.
    async fn list_users(&self, request: &UserListRequest) -> Result<Vec<User>, Error>;
}
