use annie_core::model::{NewVocabulary, Vocabulary};
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::{conn, count_from_i64, map_vocabulary_row, ser};
use crate::repository::{StorageError, VocabularyRepository};

#[async_trait::async_trait]
impl VocabularyRepository for SqliteRepository {
    async fn insert_vocabulary(&self, entries: &[NewVocabulary]) -> Result<usize, StorageError> {
        let mut tx = self.pool.begin().await.map_err(conn)?;
        for entry in entries {
            sqlx::query(
                r"
                INSERT INTO vocabulary (english, vietnamese, example, audio_url)
                VALUES (?1, ?2, ?3, ?4)
                ",
            )
            .bind(&entry.english)
            .bind(&entry.vietnamese)
            .bind(entry.example.as_deref())
            .bind(entry.audio_url.as_deref())
            .execute(&mut *tx)
            .await
            .map_err(conn)?;
        }
        tx.commit().await.map_err(conn)?;
        Ok(entries.len())
    }

    async fn list_vocabulary(&self) -> Result<Vec<Vocabulary>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, english, vietnamese, example, audio_url
            FROM vocabulary
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            entries.push(map_vocabulary_row(&row)?);
        }
        Ok(entries)
    }

    async fn count_vocabulary(&self) -> Result<u64, StorageError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM vocabulary")
            .fetch_one(&self.pool)
            .await
            .map_err(conn)?;
        count_from_i64(row.try_get::<i64, _>("n").map_err(ser)?)
    }
}
