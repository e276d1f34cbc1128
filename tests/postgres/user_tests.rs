//! `PostgreSQL` integration tests for user credential persistence.

use crate::postgres::helpers::{BoxError, test_database};
use rstest::rstest;
use taskgate::user::{
    adapters::postgres::PostgresUserRepository,
    domain::{PasswordHasher, UserId, Username},
    ports::{UserRepository, UserRepositoryError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "needs a PostgreSQL server named by TASKGATE_TEST_DATABASE_URL"]
async fn postgres_insert_and_find_user() -> Result<(), BoxError> {
    let db = test_database().await?;
    let repo = PostgresUserRepository::new(db.pool()?);
    let name = Username::new("alice")?;
    let digest = PasswordHasher::default().hash("password1");

    let stored = repo.insert(&name, &digest).await?;
    let by_name = repo.find_by_name(&name).await?;
    let by_id = repo.find_by_id(stored.id()).await?;

    assert_eq!(by_name.as_ref(), Some(&stored));
    assert_eq!(by_id.as_ref(), Some(&stored));
    assert_eq!(stored.password_digest(), &digest);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "needs a PostgreSQL server named by TASKGATE_TEST_DATABASE_URL"]
async fn postgres_duplicate_username_is_reported() -> Result<(), BoxError> {
    let db = test_database().await?;
    let repo = PostgresUserRepository::new(db.pool()?);
    let name = Username::new("alice")?;
    let digest = PasswordHasher::default().hash("password1");
    repo.insert(&name, &digest).await?;

    let result = repo.insert(&name, &digest).await;

    assert!(matches!(result, Err(UserRepositoryError::DuplicateUsername(ref dup)) if *dup == name));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "needs a PostgreSQL server named by TASKGATE_TEST_DATABASE_URL"]
async fn postgres_password_update_overwrites_digest() -> Result<(), BoxError> {
    let db = test_database().await?;
    let repo = PostgresUserRepository::new(db.pool()?);
    let hasher = PasswordHasher::default();
    let user = repo
        .insert(&Username::new("alice")?, &hasher.hash("password1"))
        .await?;

    repo.update_password_digest(user.id(), &hasher.hash("password9"))
        .await?;
    let missing = repo
        .update_password_digest(UserId::new(), &hasher.hash("password9"))
        .await;

    let reloaded = repo.find_by_id(user.id()).await?;
    assert_eq!(
        reloaded.map(|found| *found.password_digest()),
        Some(hasher.hash("password9"))
    );
    assert!(matches!(missing, Err(UserRepositoryError::NotFound(_))));
    Ok(())
}
