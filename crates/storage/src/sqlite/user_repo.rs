use annie_core::model::{User, UserId};
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::{conn, ser, user_id_from_i64};
use crate::repository::{StorageError, UserRepository};

#[async_trait::async_trait]
impl UserRepository for SqliteRepository {
    async fn insert_user(&self, user: &User) -> Result<UserId, StorageError> {
        let res = sqlx::query(
            r"
            INSERT INTO users (username, email, password_hash)
            VALUES (?1, ?2, ?3)
            ",
        )
        .bind(user.username())
        .bind(user.email())
        .bind(user.password_hash())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error().is_some_and(|db| db.is_unique_violation()) {
                StorageError::Conflict
            } else {
                conn(e)
            }
        })?;

        user_id_from_i64(res.last_insert_rowid())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT id, username, email, password_hash
            FROM users WHERE username = ?1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(conn)?;

        match row {
            Some(row) => Ok(Some(User::from_persisted(
                user_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
                row.try_get("username").map_err(ser)?,
                row.try_get("email").map_err(ser)?,
                row.try_get("password_hash").map_err(ser)?,
            ))),
            None => Ok(None),
        }
    }
}
