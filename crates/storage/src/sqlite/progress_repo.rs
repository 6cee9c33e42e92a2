use annie_core::model::{Progress, ProgressId, UserId};
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::{conn, progress_id_from_i64, ser, u32_from_i64, u64_to_i64, user_id_from_i64};
use crate::repository::{ProgressRepository, StorageError};

#[async_trait::async_trait]
impl ProgressRepository for SqliteRepository {
    async fn upsert_progress(&self, progress: &Progress) -> Result<ProgressId, StorageError> {
        let row = sqlx::query(
            r"
            INSERT INTO progress (user_id, exercise_complete, quiz_complete, vocabulary_mastered, last_activity)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(user_id) DO UPDATE SET
                exercise_complete = excluded.exercise_complete,
                quiz_complete = excluded.quiz_complete,
                vocabulary_mastered = excluded.vocabulary_mastered,
                last_activity = excluded.last_activity
            RETURNING id
            ",
        )
        .bind(u64_to_i64("user_id", progress.user_id.value())?)
        .bind(i64::from(progress.exercises_completed))
        .bind(i64::from(progress.quizzes_completed))
        .bind(i64::from(progress.vocabulary_mastered))
        .bind(progress.last_activity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error().is_some_and(|db| db.is_foreign_key_violation()) {
                StorageError::NotFound
            } else {
                conn(e)
            }
        })?;

        progress_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)
    }

    async fn progress_for_user(&self, user_id: UserId) -> Result<Option<Progress>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, exercise_complete, quiz_complete, vocabulary_mastered, last_activity
            FROM progress WHERE user_id = ?1
            ",
        )
        .bind(u64_to_i64("user_id", user_id.value())?)
        .fetch_optional(&self.pool)
        .await
        .map_err(conn)?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(Progress {
            id: Some(progress_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?),
            user_id: user_id_from_i64(row.try_get::<i64, _>("user_id").map_err(ser)?)?,
            exercises_completed: u32_from_i64(
                "exercise_complete",
                row.try_get::<i64, _>("exercise_complete").map_err(ser)?,
            )?,
            quizzes_completed: u32_from_i64(
                "quiz_complete",
                row.try_get::<i64, _>("quiz_complete").map_err(ser)?,
            )?,
            vocabulary_mastered: u32_from_i64(
                "vocabulary_mastered",
                row.try_get::<i64, _>("vocabulary_mastered").map_err(ser)?,
            )?,
            last_activity: row.try_get("last_activity").map_err(ser)?,
        }))
    }
}
