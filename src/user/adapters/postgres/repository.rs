//! `PostgreSQL` repository implementation for user credentials.

use super::{
    models::{NewUserRow, UserRow},
    schema::users,
};
use crate::user::{
    domain::{PasswordDigest, User, UserId, Username},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by user adapters.
pub type UserPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: UserPgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: UserPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> UserRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> UserRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(UserRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(UserRepositoryError::persistence)?
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(
        &self,
        name: &Username,
        password_digest: &PasswordDigest,
    ) -> UserRepositoryResult<User> {
        let username = name.clone();
        let new_row = NewUserRow {
            name: name.as_str().to_owned(),
            password_digest: password_digest.as_bytes().to_vec(),
        };

        self.run_blocking(move |connection| {
            // The unique index on `name` is the source of truth; the
            // pre-check only exists to report the duplicate by name.
            let existing = find_row_by_name(connection, username.as_str())?;
            if existing.is_some() {
                return Err(UserRepositoryError::DuplicateUsername(username));
            }

            let row = diesel::insert_into(users::table)
                .values(&new_row)
                .returning(UserRow::as_returning())
                .get_result::<UserRow>(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        UserRepositoryError::DuplicateUsername(username.clone())
                    }
                    _ => UserRepositoryError::persistence(err),
                })?;
            row_to_user(row)
        })
        .await
    }

    async fn find_by_name(&self, name: &Username) -> UserRepositoryResult<Option<User>> {
        let name_str = name.as_str().to_owned();
        self.run_blocking(move |connection| {
            find_row_by_name(connection, &name_str)?
                .map(row_to_user)
                .transpose()
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::id.eq(id.into_inner()))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn update_password_digest(
        &self,
        id: UserId,
        password_digest: &PasswordDigest,
    ) -> UserRepositoryResult<()> {
        let digest_bytes = password_digest.as_bytes().to_vec();
        self.run_blocking(move |connection| {
            let updated_count = diesel::update(users::table.filter(users::id.eq(id.into_inner())))
                .set(users::password_digest.eq(&digest_bytes))
                .execute(connection)
                .map_err(UserRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(UserRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn find_row_by_name(
    connection: &mut PgConnection,
    name: &str,
) -> UserRepositoryResult<Option<UserRow>> {
    users::table
        .filter(users::name.eq(name))
        .select(UserRow::as_select())
        .first::<UserRow>(connection)
        .optional()
        .map_err(UserRepositoryError::persistence)
}

fn row_to_user(row: UserRow) -> UserRepositoryResult<User> {
    let UserRow {
        id,
        name,
        password_digest,
    } = row;

    let parsed_name = Username::new(name).map_err(UserRepositoryError::invalid_persisted_data)?;
    let digest = PasswordDigest::from_slice(&password_digest)
        .map_err(UserRepositoryError::invalid_persisted_data)?;
    Ok(User::new(UserId::from_uuid(id), parsed_name, digest))
}
