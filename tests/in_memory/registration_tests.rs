//! In-memory integration tests for registration and sessions.

use super::helpers::{Harness, harness, sign_up};
use rstest::rstest;
use taskgate::{
    error::ErrorKind,
    user::services::{ChangePasswordRequest, RegisterUserRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registered_user_can_log_in(harness: Harness) -> Result<(), eyre::Report> {
    let token = sign_up(&harness.tracker, "alice", "password1").await?;

    let current = harness.tracker.current_user(Some(&token)).await?;

    let user = current.ok_or_else(|| eyre::eyre!("session should resolve to alice"))?;
    eyre::ensure!(user.name().as_str() == "alice", "unexpected user {}", user.name());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_registration_is_rejected(harness: Harness) -> Result<(), eyre::Report> {
    sign_up(&harness.tracker, "alice", "password1").await?;

    let err = harness
        .tracker
        .register(RegisterUserRequest::new("alice", "password2", "password2"))
        .await
        .err()
        .ok_or_else(|| eyre::eyre!("duplicate registration should fail"))?;

    eyre::ensure!(err.kind() == ErrorKind::DuplicateUser, "got {:?}", err.kind());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn short_password_is_invalid_input(harness: Harness) -> Result<(), eyre::Report> {
    let err = harness
        .tracker
        .register(RegisterUserRequest::new("bob", "short", "short"))
        .await
        .err()
        .ok_or_else(|| eyre::eyre!("short password should fail"))?;

    eyre::ensure!(err.kind() == ErrorKind::InvalidInput, "got {:?}", err.kind());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn wrong_password_and_unknown_user_look_identical(
    harness: Harness,
) -> Result<(), eyre::Report> {
    sign_up(&harness.tracker, "alice", "password1").await?;

    let wrong_password = harness
        .tracker
        .login("alice", "wrongpass")
        .await
        .err()
        .ok_or_else(|| eyre::eyre!("wrong password should fail"))?;
    let unknown_user = harness
        .tracker
        .login("nouser", "x")
        .await
        .err()
        .ok_or_else(|| eyre::eyre!("unknown user should fail"))?;

    eyre::ensure!(
        wrong_password.kind() == ErrorKind::AuthenticationFailure,
        "got {:?}",
        wrong_password.kind()
    );
    eyre::ensure!(
        wrong_password.to_string() == unknown_user.to_string(),
        "messages differ: '{wrong_password}' vs '{unknown_user}'"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logout_revokes_the_session(harness: Harness) -> Result<(), eyre::Report> {
    let token = sign_up(&harness.tracker, "alice", "password1").await?;

    let directive = harness.tracker.logout(Some(&token)).await?;

    eyre::ensure!(directive.max_age_secs() == -1, "cookie should be cleared");
    eyre::ensure!(
        harness.tracker.current_user(Some(&token)).await?.is_none(),
        "replayed token should be anonymous"
    );
    eyre::ensure!(harness.session_store.is_empty()?, "binding should be gone");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn changed_password_replaces_the_old_one(harness: Harness) -> Result<(), eyre::Report> {
    sign_up(&harness.tracker, "alice", "password1").await?;

    harness
        .tracker
        .change_password(ChangePasswordRequest::new("alice", "password1", "password9"))
        .await?;

    let old = harness.tracker.login("alice", "password1").await;
    eyre::ensure!(
        old.as_ref().err().map(taskgate::tracker::TrackerError::kind)
            == Some(ErrorKind::AuthenticationFailure),
        "old password should be rejected"
    );
    harness.tracker.login("alice", "password9").await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn change_password_with_wrong_old_password_fails(
    harness: Harness,
) -> Result<(), eyre::Report> {
    sign_up(&harness.tracker, "alice", "password1").await?;

    let err = harness
        .tracker
        .change_password(ChangePasswordRequest::new("alice", "nottheone", "password9"))
        .await
        .err()
        .ok_or_else(|| eyre::eyre!("wrong old password should fail"))?;

    eyre::ensure!(
        err.kind() == ErrorKind::AuthenticationFailure,
        "got {:?}",
        err.kind()
    );
    harness.tracker.login("alice", "password1").await?;
    Ok(())
}
