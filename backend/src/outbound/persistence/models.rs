//! Diesel row types. Internal to the persistence adapters.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{UserId, UserRecord};

use super::schema::ws_user;

/// Queryable row for `ws_user`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = ws_user)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub user_id: i64,
    pub full_name: String,
    pub user_email: String,
    pub birth_date: DateTime<Utc>,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
    pub msisdn: String,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.user_id),
            full_name: row.full_name,
            email: row.user_email,
            birth_date: row.birth_date,
            create_time: row.create_time,
            update_time: row.update_time,
            msisdn: row.msisdn,
        }
    }
}
