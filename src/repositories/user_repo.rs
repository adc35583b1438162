//! PostgreSQL user repository.
//!
//! Provides the [`UserStore`] operations for the users table using diesel_async.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult, DatabaseErrorConverter};
use crate::models::{NewUser, User, UserRow};
use crate::repositories::UserStore;

/// User repository holding an async connection pool.
///
/// `AsyncDbPool` (bb8::Pool) is `Arc`-backed, so cloning is cheap.
#[derive(Clone)]
pub struct UserRepository {
    pool: AsyncDbPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_username(&self, name: &str) -> AppResult<Option<User>> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        let row = users
            .filter(username.eq(name))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "find user by username"))?;

        Ok(row.map(User::from))
    }

    /// Relies on the `users_username_key` unique constraint, so two concurrent
    /// inserts of the same username cannot both succeed.
    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        let row = diesel::insert_into(users)
            .values(&new_user)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "create user"))?;

        Ok(User::from(row))
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        let rows = users
            .order(id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "list users"))?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        let affected = diesel::delete(users)
            .execute(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "delete all users"))?;

        Ok(affected as u64)
    }

    async fn ping(&self) -> AppResult<()> {
        let mut conn = self.pool.get().await?;

        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map_err(|e| AppError::Database {
                operation: "ping".to_string(),
                source: anyhow::Error::from(e),
            })?;

        Ok(())
    }
}
