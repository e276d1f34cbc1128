//! When steps for task access BDD scenarios.

use super::world::{TaskAccessWorld, run_async};
use rstest_bdd_macros::when;
use taskgate::task::services::CreateTaskRequest;

#[when(r#""{user}" creates a task titled "{title}" described as "{description}""#)]
fn user_creates_task(world: &mut TaskAccessWorld, user: String, title: String, description: String) {
    let request = CreateTaskRequest::new(&title).with_description(description);
    let result = run_async(world.tracker.create_task(world.token(&user), request));
    if let Some(task) = world.record(result) {
        world.tasks.insert(title, task.id());
    }
}

#[when(r#""{user}" requests the task "{title}""#)]
fn user_requests_task(
    world: &mut TaskAccessWorld,
    user: String,
    title: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let result = run_async(world.tracker.get_task(world.token(&user), task_id));
    world.record(result);
    Ok(())
}

#[when(r#""{user}" deletes the task "{title}""#)]
fn user_deletes_task(
    world: &mut TaskAccessWorld,
    user: String,
    title: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let result = run_async(world.tracker.delete_task(world.token(&user), task_id));
    world.record(result);
    Ok(())
}

#[when("an anonymous client lists tasks")]
fn anonymous_lists_tasks(world: &mut TaskAccessWorld) {
    let result = run_async(world.tracker.list_tasks(None, None));
    world.record(result);
}

#[when(r#""{user}" lists tasks"#)]
fn user_lists_tasks(world: &mut TaskAccessWorld, user: String) {
    let result = run_async(world.tracker.list_tasks(world.token(&user), None));
    world.last_listing = world.record(result);
}

#[when(r#""{user}" logs out"#)]
fn user_logs_out(world: &mut TaskAccessWorld, user: String) {
    let result = run_async(world.tracker.logout(world.token(&user)));
    world.record(result);
}

#[when(r#""{user}" searches for "{keyword}""#)]
fn user_searches(world: &mut TaskAccessWorld, user: String, keyword: String) {
    let result = run_async(
        world
            .tracker
            .list_tasks(world.token(&user), Some(keyword.as_str())),
    );
    world.last_listing = world.record(result);
}
