//! `PostgreSQL` end-to-end tests for the tracker façade.

use crate::postgres::helpers::{BoxError, test_database};
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;
use taskgate::{
    error::ErrorKind,
    session::adapters::SignedCookieStore,
    task::{adapters::postgres::PostgresTaskStore, services::CreateTaskRequest},
    tracker::{TaskTracker, TrackerSettings},
    user::{adapters::postgres::PostgresUserRepository, services::RegisterUserRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "needs a PostgreSQL server named by TASKGATE_TEST_DATABASE_URL"]
async fn postgres_tracker_enforces_ownership() -> Result<(), BoxError> {
    let db = test_database().await?;
    let pool = db.pool()?;
    let tracker = TaskTracker::new(
        Arc::new(PostgresUserRepository::new(pool.clone())),
        Arc::new(SignedCookieStore::new(b"0123456789abcdef0123456789abcdef")?),
        Arc::new(PostgresTaskStore::new(pool)),
        Arc::new(DefaultClock),
        &TrackerSettings::default(),
    );
    for (name, password) in [("alice", "password1"), ("bob", "password2")] {
        tracker
            .register(RegisterUserRequest::new(name, password, password))
            .await?;
    }
    let alice_login = tracker.login("alice", "password1").await?;
    let bob_login = tracker.login("bob", "password2").await?;

    let task = tracker
        .create_task(alice_login.token(), CreateTaskRequest::new("Buy milk"))
        .await?;
    let stored = tracker.get_task(alice_login.token(), task.id()).await?;
    let denied = tracker.get_task(bob_login.token(), task.id()).await;
    tracker.delete_task(alice_login.token(), task.id()).await?;

    assert_eq!(stored, task);
    assert_eq!(
        denied.err().map(|err| err.kind()),
        Some(ErrorKind::AuthorizationFailure)
    );
    assert!(tracker.list_tasks(alice_login.token(), None).await?.is_empty());
    Ok(())
}
