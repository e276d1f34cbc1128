//! In-memory task and ownership store for tests and single-process use.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Ownership, Task, TaskDraft, TaskEdit, TaskId, TaskKeyword},
    ports::{TaskOwnershipStore, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;

/// Thread-safe in-memory store implementing both task ports.
///
/// Multi-row writes run against a copy of the state and replace it only on
/// success, so a failure part-way leaves nothing behind.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
    fail_next_ownership_insert: Arc<AtomicBool>,
}

#[derive(Debug, Clone, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    insertion_order: Vec<TaskId>,
    ownerships: HashMap<TaskId, Ownership>,
}

impl InMemoryTaskState {
    fn ordered(&self) -> impl Iterator<Item = &Task> {
        self.insertion_order
            .iter()
            .filter_map(|id| self.tasks.get(id))
    }

    fn remove(&mut self, task_id: TaskId) {
        self.ownerships.remove(&task_id);
        self.tasks.remove(&task_id);
        self.insertion_order.retain(|id| *id != task_id);
    }
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next ownership insert fail after the task row was written,
    /// exercising the rollback path of [`TaskOwnershipStore::create_owned_task`].
    pub fn fail_next_ownership_insert(&self) {
        self.fail_next_ownership_insert.store(true, Ordering::SeqCst);
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the lock is poisoned.
    pub fn task_count(&self) -> TaskRepositoryResult<usize> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.tasks.len())
    }

    /// Returns the number of stored ownership records.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the lock is poisoned.
    pub fn ownership_count(&self) -> TaskRepositoryResult<usize> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.ownerships.len())
    }

    fn transaction<T>(
        &self,
        f: impl FnOnce(&mut InMemoryTaskState) -> TaskRepositoryResult<T>,
    ) -> TaskRepositoryResult<T> {
        let mut state = self.state.write().map_err(poisoned)?;
        let mut working = state.clone();
        let value = f(&mut working)?;
        *state = working;
        Ok(value)
    }

    fn list_matching(
        &self,
        keyword: Option<&TaskKeyword>,
        include: impl Fn(&Task, &InMemoryTaskState) -> bool,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        let tasks = state
            .ordered()
            .filter(|task| include(task, &state))
            .filter(|task| keyword.is_none_or(|kw| kw.matches(task)))
            .cloned()
            .collect();
        Ok(tasks)
    }
}

fn poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskStore {
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn update(&self, id: TaskId, edit: &TaskEdit) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.apply(edit);
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.transaction(|state| {
            state.remove(id);
            Ok(())
        })
    }
}

#[async_trait]
impl TaskOwnershipStore for InMemoryTaskStore {
    async fn create_owned_task(
        &self,
        owner: UserId,
        draft: &TaskDraft,
    ) -> TaskRepositoryResult<TaskId> {
        let fail_ownership = self.fail_next_ownership_insert.swap(false, Ordering::SeqCst);
        self.transaction(|state| {
            let task_id = TaskId::new();
            state.tasks.insert(task_id, Task::from_draft(task_id, draft));
            state.insertion_order.push(task_id);

            if fail_ownership {
                return Err(TaskRepositoryError::persistence(std::io::Error::other(
                    "injected ownership insert failure",
                )));
            }
            state.ownerships.insert(task_id, Ownership::new(owner, task_id));
            Ok(task_id)
        })
    }

    async fn list_owned(
        &self,
        owner: UserId,
        keyword: Option<TaskKeyword>,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.list_matching(keyword.as_ref(), |task, state| {
            state
                .ownerships
                .get(&task.id())
                .is_some_and(|ownership| ownership.is_held_by(owner))
        })
    }

    async fn list_all(&self, keyword: Option<TaskKeyword>) -> TaskRepositoryResult<Vec<Task>> {
        self.list_matching(keyword.as_ref(), |_, _| true)
    }

    async fn is_owner(&self, user_id: UserId, task_id: TaskId) -> TaskRepositoryResult<bool> {
        let state = self.state.read().map_err(poisoned)?;
        let owned = state.tasks.contains_key(&task_id)
            && state
                .ownerships
                .get(&task_id)
                .is_some_and(|ownership| ownership.is_held_by(user_id));
        Ok(owned)
    }

    async fn delete_ownership(&self, task_id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.ownerships.remove(&task_id);
        Ok(())
    }
}
