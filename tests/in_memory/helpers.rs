//! Shared test helpers for in-memory tracker integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskgate::{
    session::{adapters::InMemorySessionStore, domain::SessionToken},
    task::{adapters::memory::InMemoryTaskStore, domain::ListingScope},
    tracker::{TaskTracker, TrackerSettings},
    user::{adapters::memory::InMemoryUserRepository, services::RegisterUserRequest},
};

/// Tracker type wired over in-memory stores.
pub type MemoryTracker =
    TaskTracker<InMemoryUserRepository, InMemorySessionStore, InMemoryTaskStore, DefaultClock>;

/// A tracker plus direct handles on its stores.
pub struct Harness {
    /// The tracker under test.
    pub tracker: MemoryTracker,
    /// The task store behind the tracker.
    pub task_store: Arc<InMemoryTaskStore>,
    /// The session store behind the tracker.
    pub session_store: Arc<InMemorySessionStore>,
}

/// Builds a harness with the given listing scope.
#[must_use]
pub fn harness_with_scope(listing_scope: ListingScope) -> Harness {
    let task_store = Arc::new(InMemoryTaskStore::new());
    let session_store = Arc::new(InMemorySessionStore::new());
    let settings = TrackerSettings {
        listing_scope,
        ..TrackerSettings::default()
    };
    let tracker = TaskTracker::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::clone(&session_store),
        Arc::clone(&task_store),
        Arc::new(DefaultClock),
        &settings,
    );
    Harness {
        tracker,
        task_store,
        session_store,
    }
}

/// Provides a harness with default settings.
#[fixture]
pub fn harness() -> Harness {
    harness_with_scope(ListingScope::Owned)
}

/// Registers `name` with `password` and logs them in, returning the token.
///
/// # Errors
///
/// Returns an error if registration or login fails.
pub async fn sign_up(
    tracker: &MemoryTracker,
    name: &str,
    password: &str,
) -> Result<SessionToken, eyre::Report> {
    tracker
        .register(RegisterUserRequest::new(name, password, password))
        .await?;
    let directive = tracker.login(name, password).await?;
    directive
        .token()
        .cloned()
        .ok_or_else(|| eyre::eyre!("login did not issue a token"))
}
