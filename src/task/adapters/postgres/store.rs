//! `PostgreSQL` store implementing the task and ownership ports.

use super::{
    models::{NewOwnershipRow, NewTaskRow, TaskChangeset, TaskRow},
    schema::{ownerships, tasks},
};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskDraft, TaskEdit, TaskId, TaskKeyword, TaskTitle},
    ports::{TaskOwnershipStore, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;
use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::expression_methods::PgTextExpressionMethods;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error as DieselError;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: TaskPgPool,
}

impl PostgresTaskStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

impl From<DieselError> for TaskRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskStore {
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn update(&self, id: TaskId, edit: &TaskEdit) -> TaskRepositoryResult<()> {
        let changeset = TaskChangeset {
            title: edit.title().as_str().to_owned(),
            description: edit.description().unwrap_or_default().to_owned(),
            is_done: edit.is_done(),
        };
        self.run_blocking(move |connection| {
            let updated = diesel::update(tasks::table.find(id.into_inner()))
                .set(&changeset)
                .execute(connection)?;
            if updated == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            connection.transaction::<_, TaskRepositoryError, _>(|tx| {
                diesel::delete(ownerships::table.filter(ownerships::task_id.eq(id.into_inner())))
                    .execute(tx)?;
                diesel::delete(tasks::table.find(id.into_inner())).execute(tx)?;
                Ok(())
            })
        })
        .await
    }
}

#[async_trait]
impl TaskOwnershipStore for PostgresTaskStore {
    async fn create_owned_task(
        &self,
        owner: UserId,
        draft: &TaskDraft,
    ) -> TaskRepositoryResult<TaskId> {
        let new_row = NewTaskRow {
            title: draft.title().as_str().to_owned(),
            description: draft.description().unwrap_or_default().to_owned(),
            is_done: false,
            created_at: draft.created_at(),
        };
        self.run_blocking(move |connection| {
            connection.transaction::<_, TaskRepositoryError, _>(|tx| {
                let task_id = diesel::insert_into(tasks::table)
                    .values(&new_row)
                    .returning(tasks::id)
                    .get_result::<uuid::Uuid>(tx)?;
                diesel::insert_into(ownerships::table)
                    .values(NewOwnershipRow {
                        task_id,
                        user_id: owner.into_inner(),
                    })
                    .execute(tx)?;
                Ok(TaskId::from_uuid(task_id))
            })
        })
        .await
    }

    async fn list_owned(
        &self,
        owner: UserId,
        keyword: Option<TaskKeyword>,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let mut query = tasks::table
                .inner_join(ownerships::table.on(ownerships::task_id.eq(tasks::id)))
                .filter(ownerships::user_id.eq(owner.into_inner()))
                .select(TaskRow::as_select())
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .into_boxed();
            if let Some(pattern) = keyword.as_ref().map(TaskKeyword::like_pattern) {
                query = query.filter(
                    tasks::title
                        .ilike(pattern.clone())
                        .or(tasks::description.ilike(pattern)),
                );
            }
            let rows = query.load::<TaskRow>(connection)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_all(&self, keyword: Option<TaskKeyword>) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let mut query = tasks::table
                .select(TaskRow::as_select())
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .into_boxed();
            if let Some(pattern) = keyword.as_ref().map(TaskKeyword::like_pattern) {
                query = query.filter(
                    tasks::title
                        .ilike(pattern.clone())
                        .or(tasks::description.ilike(pattern)),
                );
            }
            let rows = query.load::<TaskRow>(connection)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn is_owner(&self, user_id: UserId, task_id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let owned = diesel::select(exists(
                ownerships::table
                    .filter(ownerships::task_id.eq(task_id.into_inner()))
                    .filter(ownerships::user_id.eq(user_id.into_inner())),
            ))
            .get_result::<bool>(connection)?;
            Ok(owned)
        })
        .await
    }

    async fn delete_ownership(&self, task_id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(ownerships::table.filter(ownerships::task_id.eq(task_id.into_inner())))
                .execute(connection)?;
            Ok(())
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        is_done,
        created_at,
    } = row;

    let persisted_title = TaskTitle::new(title).map_err(TaskRepositoryError::invalid_persisted_data)?;
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        title: persisted_title,
        description: Some(description),
        is_done,
        created_at,
    }))
}
