//! User directory entities.
//!
//! [`UserRecord`] mirrors what the relational store holds. [`User`] is what
//! clients see: the same fields plus `age`, derived from the birth date at
//! read time and never persisted.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::calendar::age_in_years;

/// Stable numeric user identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User row as read from persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Primary key, `user_id` in the table.
    pub id: UserId,
    /// Display name; the column searched by listings.
    pub full_name: String,
    /// Contact address, stored as `user_email`.
    pub email: String,
    /// Source of the derived age.
    pub birth_date: DateTime<Utc>,
    /// When the row was inserted.
    pub create_time: DateTime<Utc>,
    /// When the row was last modified.
    pub update_time: DateTime<Utc>,
    /// Phone number in international form.
    pub msisdn: String,
}

/// User as returned by the directory.
///
/// ## Serialisation
/// Field names are snake_case and timestamps RFC 3339:
/// `{"user_id":1,"full_name":"…","email":"…","birth_date":"…",
/// "create_time":"…","update_time":"…","msisdn":"…","age":24}`.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use roster::domain::{User, UserId, UserRecord};
///
/// let at = |y| Utc.with_ymd_and_hms(y, 1, 1, 0, 0, 0).unwrap();
/// let record = UserRecord {
///     id: UserId::new(7),
///     full_name: "Ada Lovelace".into(),
///     email: "ada@example.com".into(),
///     birth_date: at(1990),
///     create_time: at(2020),
///     update_time: at(2021),
///     msisdn: "628123".into(),
/// };
/// let user = User::from_record(record, &at(2024));
/// assert_eq!(user.age(), 34);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    user_id: UserId,
    full_name: String,
    email: String,
    birth_date: DateTime<Utc>,
    create_time: DateTime<Utc>,
    update_time: DateTime<Utc>,
    msisdn: String,
    age: i32,
}

impl User {
    /// Build the client view of `record`, deriving `age` relative to `now`.
    pub fn from_record<Tz: TimeZone>(record: UserRecord, now: &DateTime<Tz>) -> Self {
        let age = age_in_years(&record.birth_date, now);
        let UserRecord {
            id,
            full_name,
            email,
            birth_date,
            create_time,
            update_time,
            msisdn,
        } = record;
        Self {
            user_id: id,
            full_name,
            email,
            birth_date,
            create_time,
            update_time,
            msisdn,
            age,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.user_id
    }

    /// Display name as stored.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Full calendar years since the birth date at read time.
    pub fn age(&self) -> i32 {
        self.age
    }
}
