//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use chrono::{TimeZone, Utc};

use crate::domain::{UserId, UserListRequest, UserRecord};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List stored users matching the request's search term, newest
    /// identifier first, windowed by the request's page.
    ///
    /// No matching rows is an empty vector, not an error.
    async fn list(&self, request: &UserListRequest)
    -> Result<Vec<UserRecord>, UserPersistenceError>;
}

/// In-memory user repository used when no database is configured.
///
/// Applies the same filtering, ordering and windowing as the SQL adapter.
#[derive(Debug, Clone)]
pub struct FixtureUserRepository {
    records: Vec<UserRecord>,
}

impl FixtureUserRepository {
    /// Repository over the given records.
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self { records }
    }

    /// Repository seeded with a small fixed directory.
    pub fn seeded() -> Self {
        let at = |year, month, day| {
            Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
                .single()
                .unwrap_or_default()
        };
        let record = |id, name: &str, email: &str, birth| UserRecord {
            id: UserId::new(id),
            full_name: name.to_owned(),
            email: email.to_owned(),
            birth_date: birth,
            create_time: at(2023, 1, 1),
            update_time: at(2023, 1, 1),
            msisdn: format!("62811000{id:04}"),
        };
        Self::new(vec![
            record(1, "Ada Lovelace", "ada@example.com", at(1990, 12, 10)),
            record(2, "Grace Hopper", "grace@example.com", at(1986, 12, 9)),
            record(3, "Alan Turing", "alan@example.com", at(1992, 6, 23)),
        ])
    }
}

impl Default for FixtureUserRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn list(
        &self,
        request: &UserListRequest,
    ) -> Result<Vec<UserRecord>, UserPersistenceError> {
        let needle = request.search().term().map(str::to_lowercase);
        let mut matches: Vec<&UserRecord> = self
            .records
            .iter()
            .filter(|record| {
                needle
                    .as_deref()
                    .is_none_or(|needle| record.full_name.to_lowercase().contains(needle))
            })
            .collect();
        matches.sort_by(|a, b| b.id.cmp(&a.id));
        let page = request.page();
        Ok(matches
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }
}
