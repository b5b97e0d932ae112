//! Integration tests for `DieselUserRepository` against embedded PostgreSQL.
//!
//! Every test gets its own migrated database from `pg-embedded-setup-unpriv`
//! and seeds `ws_user` itself. Cluster start failures panic unless
//! `SKIP_TEST_CLUSTER=1` is set.

use diesel::pg::PgConnection;
use diesel::{Connection, RunQueryDsl};
use pg_embedded_setup_unpriv::TemporaryDatabase;
use roster::domain::ports::{UserPersistenceError, UserRepository};
use roster::domain::{UserListRequest, UserRecord};
use roster::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

#[path = "support/pg_embed.rs"]
mod pg_embed;

use pg_embed::{handle_cluster_setup_failure, provision_database, shared_cluster};

const SEED: &str = r"
INSERT INTO ws_user (user_id, full_name, user_email, birth_date, create_time, update_time, msisdn)
VALUES
  (1, 'Ada Lovelace', 'ada@example.com', '1815-12-10T00:00:00Z', '2020-01-01T00:00:00Z', '2020-01-01T00:00:00Z', '440001'),
  (2, 'Grace Hopper', 'grace@example.com', '1906-12-09T00:00:00Z', '2020-01-02T00:00:00Z', '2020-01-02T00:00:00Z', '440002'),
  (3, 'Alan Turing', 'alan@example.com', '1912-06-23T00:00:00Z', '2020-01-03T00:00:00Z', '2020-01-03T00:00:00Z', '440003'),
  (4, '100%_real\name', 'odd@example.com', '1990-01-01T00:00:00Z', '2020-01-04T00:00:00Z', '2020-01-04T00:00:00Z', '440004'),
  (5, '100 real names', 'plain@example.com', '1990-01-01T00:00:00Z', '2020-01-05T00:00:00Z', '2020-01-05T00:00:00Z', '440005')
";

/// Seeded database plus a repository over it.
struct SeededDatabase {
    /// Runtime for the async repository calls; the cluster API is blocking.
    runtime: Runtime,
    repository: DieselUserRepository,
    _database: TemporaryDatabase,
}

impl SeededDatabase {
    fn list(&self, search: &str, limit: i64, offset: i64) -> Vec<UserRecord> {
        self.runtime
            .block_on(self.repository.list(&UserListRequest::new(search, limit, offset)))
            .expect("list users")
    }
}

fn setup_seeded_database() -> Result<SeededDatabase, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let database = provision_database(shared_cluster()?)?;

    let mut conn = PgConnection::establish(database.url()).map_err(|err| err.to_string())?;
    diesel::sql_query(SEED)
        .execute(&mut conn)
        .map_err(|err| format!("seed ws_user: {err}"))?;

    let pool = runtime
        .block_on(DbPool::new(PoolConfig::new(database.url()).with_max_size(2)))
        .map_err(|err| err.to_string())?;

    Ok(SeededDatabase {
        runtime,
        repository: DieselUserRepository::new(pool),
        _database: database,
    })
}

#[fixture]
fn seeded() -> Option<SeededDatabase> {
    match setup_seeded_database() {
        Ok(db) => Some(db),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn ids(records: &[UserRecord]) -> Vec<i64> {
    records.iter().map(|record| record.id.get()).collect()
}

#[rstest]
#[case("", 10, 0, vec![5, 4, 3, 2, 1])]
#[case("", 2, 1, vec![4, 3])]
#[case("  turing ", 10, 0, vec![3])]
#[case("GRACE", 10, 0, vec![2])]
#[case("%_", 10, 0, vec![4])]
#[case("\\", 10, 0, vec![4])]
#[case("nobody", 10, 0, vec![])]
#[case("%' OR '1'='1", 10, 0, vec![])]
#[case("' --", 10, 0, vec![])]
#[case("'", 10, 0, vec![])]
fn lists_filtered_windows_newest_first(
    seeded: Option<SeededDatabase>,
    #[case] search: &str,
    #[case] limit: i64,
    #[case] offset: i64,
    #[case] expected: Vec<i64>,
) {
    let Some(db) = seeded else {
        return;
    };

    assert_eq!(ids(&db.list(search, limit, offset)), expected);
}

#[rstest]
fn injection_attempts_leave_the_table_intact(seeded: Option<SeededDatabase>) {
    let Some(db) = seeded else {
        return;
    };

    for search in ["'; DROP TABLE ws_user; --", "x' OR 1=1 --"] {
        assert!(db.list(search, 10, 0).is_empty(), "{search} matched rows");
    }
    assert_eq!(ids(&db.list("", 10, 0)), vec![5, 4, 3, 2, 1]);
}

#[rstest]
fn maps_every_column(seeded: Option<SeededDatabase>) {
    let Some(db) = seeded else {
        return;
    };

    let records = db.list("Grace Hopper", 10, 0);

    let [grace] = records.as_slice() else {
        panic!("expected exactly one record, got {records:?}");
    };
    assert_eq!(grace.full_name, "Grace Hopper");
    assert_eq!(grace.email, "grace@example.com");
    assert_eq!(grace.msisdn, "440002");
    assert_eq!(grace.birth_date.to_rfc3339(), "1906-12-09T00:00:00+00:00");
}

#[rstest]
#[tokio::test]
async fn unreachable_server_is_a_connection_error() {
    let pool = DbPool::new(
        PoolConfig::new("postgres://roster@127.0.0.1:1/roster")
            .with_connection_timeout(std::time::Duration::from_millis(200)),
    )
    .await
    .expect("pool builds lazily");
    let repo = DieselUserRepository::new(pool);

    let error = repo
        .list(&UserListRequest::new("", 10, 0))
        .await
        .expect_err("no server listening");

    assert!(
        matches!(error, UserPersistenceError::Connection { .. }),
        "unexpected error: {error:?}"
    );
}
