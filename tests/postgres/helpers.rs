//! Shared test helpers for `PostgreSQL` integration tests.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use tracing::warn;
use uuid::Uuid;

/// Boxed error used by test setup.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Pool type shared by the user and task adapters.
pub type TestPool = Pool<ConnectionManager<PgConnection>>;

/// Variable naming an administrative connection URL for the test server.
pub const TEST_DATABASE_URL_VAR: &str = "TASKGATE_TEST_DATABASE_URL";

/// SQL creating the tracker schema.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_tracker_tables/up.sql");

/// A migrated database dropped again when the value goes out of scope.
pub struct TemporaryDatabase {
    admin_url: String,
    name: String,
    url: String,
}

impl TemporaryDatabase {
    /// Creates and migrates a fresh database on the configured test server.
    ///
    /// # Errors
    ///
    /// Returns an error if no test server is configured, or if the database
    /// cannot be created or migrated.
    pub fn create() -> Result<Self, BoxError> {
        let admin_url = admin_url(std::env::var(TEST_DATABASE_URL_VAR).ok())?;
        let name = format!("taskgate_test_{}", Uuid::new_v4().simple());
        let mut admin = PgConnection::establish(&admin_url)?;
        admin.batch_execute(&format!("CREATE DATABASE \"{name}\""))?;

        let url = with_database(&admin_url, &name)?;
        let mut connection = PgConnection::establish(&url)?;
        connection.batch_execute(CREATE_SCHEMA_SQL)?;
        Ok(Self {
            admin_url,
            name,
            url,
        })
    }

    /// Builds a small connection pool on the temporary database.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot connect.
    pub fn pool(&self) -> Result<TestPool, BoxError> {
        let pool = Pool::builder()
            .max_size(2)
            .build(ConnectionManager::<PgConnection>::new(self.url.as_str()))?;
        Ok(pool)
    }
}

impl Drop for TemporaryDatabase {
    fn drop(&mut self) {
        if let Err(err) = drop_database(&self.admin_url, &self.name) {
            warn!(database = %self.name, error = %err, "failed to drop test database");
        }
    }
}

fn drop_database(admin_url: &str, name: &str) -> Result<(), BoxError> {
    let mut admin = PgConnection::establish(admin_url)?;
    admin.batch_execute(&format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"))?;
    Ok(())
}

/// Resolves the administrative URL, failing when none is configured.
///
/// # Errors
///
/// Returns an error if the value is missing or blank.
pub fn admin_url(value: Option<String>) -> Result<String, BoxError> {
    value
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| {
            format!(
                "{TEST_DATABASE_URL_VAR} must name an administrative connection URL \
                 for the PostgreSQL tests"
            )
            .into()
        })
}

/// Replaces the database name in a `postgres://` URL.
///
/// # Errors
///
/// Returns an error if the URL has no path separator.
pub fn with_database(url: &str, name: &str) -> Result<String, BoxError> {
    let (base, query) = url
        .split_once('?')
        .map_or((url, None), |(base, query)| (base, Some(query)));
    let (server, _) = base
        .rsplit_once('/')
        .ok_or_else(|| format!("database URL has no path: {url}"))?;
    Ok(query.map_or_else(
        || format!("{server}/{name}"),
        |params| format!("{server}/{name}?{params}"),
    ))
}

/// Creates a temporary database off the async runtime threads.
///
/// # Errors
///
/// Returns an error if setup fails.
pub async fn test_database() -> Result<TemporaryDatabase, BoxError> {
    tokio::task::spawn_blocking(TemporaryDatabase::create).await?
}
