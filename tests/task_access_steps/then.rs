//! Then steps for task access BDD scenarios.

use super::world::{TaskAccessWorld, run_async};
use rstest_bdd_macros::then;

#[then(r#"the request fails with "{kind}""#)]
fn request_fails_with(world: &TaskAccessWorld, kind: String) -> Result<(), eyre::Report> {
    let actual = world
        .last_error
        .ok_or_else(|| eyre::eyre!("expected the last request to fail with {kind}"))?;
    if actual.as_str() != kind {
        return Err(eyre::eyre!("expected {kind}, got {actual}"));
    }
    Ok(())
}

#[then(r#"the task list of "{user}" has {count:usize} entries"#)]
fn task_list_has_entries(
    world: &TaskAccessWorld,
    user: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let tasks = run_async(world.tracker.list_tasks(world.token(&user), None))
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    if tasks.len() != count {
        return Err(eyre::eyre!(
            "expected {count} tasks for '{user}', found {}",
            tasks.len()
        ));
    }
    Ok(())
}

#[then(r#""{user}" can read the task "{title}""#)]
fn user_can_read_task(
    world: &TaskAccessWorld,
    user: String,
    title: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let task = run_async(world.tracker.get_task(world.token(&user), task_id))
        .map_err(|err| eyre::eyre!("'{user}' could not read '{title}': {err}"))?;
    if task.title().as_str() != title {
        return Err(eyre::eyre!(
            "expected title '{title}', found '{}'",
            task.title()
        ));
    }
    Ok(())
}

#[then("the store holds {count:usize} tasks")]
fn store_holds_tasks(world: &TaskAccessWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = world
        .task_store
        .task_count()
        .map_err(|err| eyre::eyre!("task count failed: {err}"))?;
    let ownerships = world
        .task_store
        .ownership_count()
        .map_err(|err| eyre::eyre!("ownership count failed: {err}"))?;
    if tasks != count || ownerships != count {
        return Err(eyre::eyre!(
            "expected {count} tasks and ownerships, found {tasks} and {ownerships}"
        ));
    }
    Ok(())
}

#[then(r#"the search returns only "{title}""#)]
fn search_returns_only(world: &TaskAccessWorld, title: String) -> Result<(), eyre::Report> {
    let listing = world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no search result in scenario world"))?;
    let titles: Vec<&str> = listing.iter().map(|task| task.title().as_str()).collect();
    if titles != [title.as_str()] {
        return Err(eyre::eyre!("expected only '{title}', found {titles:?}"));
    }
    Ok(())
}
