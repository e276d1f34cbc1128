//! Shared world state for task access BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use taskgate::{
    error::ErrorKind,
    session::{adapters::InMemorySessionStore, domain::SessionToken},
    task::{
        adapters::memory::InMemoryTaskStore,
        domain::{Task, TaskId},
    },
    tracker::{TaskTracker, TrackerError, TrackerSettings},
    user::adapters::memory::InMemoryUserRepository,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Tracker type used by the BDD world.
pub type TestTracker =
    TaskTracker<InMemoryUserRepository, InMemorySessionStore, InMemoryTaskStore, DefaultClock>;

/// Scenario world for task access behaviour tests.
pub struct TaskAccessWorld {
    /// The tracker under test.
    pub tracker: TestTracker,
    /// Shared handle on the task store for fault injection and counts.
    pub task_store: Arc<InMemoryTaskStore>,
    /// Registered passwords by username.
    pub passwords: HashMap<String, String>,
    /// Session tokens by username; kept after logout to replay them.
    pub tokens: HashMap<String, SessionToken>,
    /// Created task identifiers by title.
    pub tasks: HashMap<String, TaskId>,
    /// Classification of the last failed request, if it failed.
    pub last_error: Option<ErrorKind>,
    /// Result of the last search.
    pub last_listing: Option<Vec<Task>>,
}

impl TaskAccessWorld {
    /// Creates a world over empty in-memory stores.
    #[must_use]
    pub fn new() -> Self {
        let task_store = Arc::new(InMemoryTaskStore::new());
        let tracker = TaskTracker::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemorySessionStore::new()),
            Arc::clone(&task_store),
            Arc::new(DefaultClock),
            &TrackerSettings::default(),
        );
        Self {
            tracker,
            task_store,
            passwords: HashMap::new(),
            tokens: HashMap::new(),
            tasks: HashMap::new(),
            last_error: None,
            last_listing: None,
        }
    }

    /// Returns the session token held by `user`, if any.
    pub fn token(&self, user: &str) -> Option<&SessionToken> {
        self.tokens.get(user)
    }

    /// Returns the identifier of the task created with `title`.
    ///
    /// # Errors
    ///
    /// Returns an error when no task with that title was created.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.tasks
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no task titled '{title}' in scenario world"))
    }

    /// Records the outcome of a request, returning its value on success.
    pub fn record<T>(&mut self, result: Result<T, TrackerError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.last_error = None;
                Some(value)
            }
            Err(err) => {
                self.last_error = Some(err.kind());
                None
            }
        }
    }
}

impl Default for TaskAccessWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskAccessWorld {
    TaskAccessWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
