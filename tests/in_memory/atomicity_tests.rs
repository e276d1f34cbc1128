//! In-memory integration tests for atomic task creation.

use super::helpers::{Harness, harness, sign_up};
use rstest::rstest;
use taskgate::{error::ErrorKind, task::services::CreateTaskRequest};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ownership_failure_rolls_back_task_insert(harness: Harness) -> Result<(), eyre::Report> {
    let alice = sign_up(&harness.tracker, "alice", "password1").await?;
    harness.task_store.fail_next_ownership_insert();

    let result = harness
        .tracker
        .create_task(
            Some(&alice),
            CreateTaskRequest::new("Buy milk").with_description("2 liters"),
        )
        .await;

    let kind = result.err().map(|err| err.kind());
    eyre::ensure!(kind == Some(ErrorKind::StoreError), "got {kind:?}");
    eyre::ensure!(harness.task_store.task_count()? == 0, "task row leaked");
    eyre::ensure!(harness.task_store.ownership_count()? == 0, "ownership leaked");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn creation_recovers_after_failure(harness: Harness) -> Result<(), eyre::Report> {
    let alice = sign_up(&harness.tracker, "alice", "password1").await?;
    harness.task_store.fail_next_ownership_insert();
    let failed = harness
        .tracker
        .create_task(Some(&alice), CreateTaskRequest::new("doomed"))
        .await;
    eyre::ensure!(failed.is_err(), "injected failure should surface");

    let kept = harness
        .tracker
        .create_task(Some(&alice), CreateTaskRequest::new("kept"))
        .await?;

    let listed = harness.tracker.list_tasks(Some(&alice), None).await?;
    eyre::ensure!(
        listed.iter().map(taskgate::task::domain::Task::id).eq([kept.id()]),
        "only the second task should exist"
    );
    Ok(())
}
