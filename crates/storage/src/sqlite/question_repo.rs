use annie_core::model::{NewQuestion, Question, QuestionId, QuestionKind};
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::{conn, count_from_i64, map_question_row, question_table, ser};
use crate::repository::{QuestionRepository, StorageError};

/// Bound parameters per `IN (...)` lookup, well under SQLite's variable limit.
const IDS_PER_QUERY: usize = 500;

#[async_trait::async_trait]
impl QuestionRepository for SqliteRepository {
    async fn insert_questions(&self, questions: &[NewQuestion]) -> Result<usize, StorageError> {
        let mut tx = self.pool.begin().await.map_err(conn)?;
        for question in questions {
            let sql = format!(
                r"
                INSERT INTO {} (question, answer, options, difficulty)
                VALUES (?1, ?2, ?3, ?4)
                ",
                question_table(question.kind)
            );
            sqlx::query(&sql)
                .bind(&question.prompt)
                .bind(&question.answer)
                .bind(question.options.joined())
                .bind(question.difficulty.map(|d| d.as_str()))
                .execute(&mut *tx)
                .await
                .map_err(conn)?;
        }
        tx.commit().await.map_err(conn)?;
        Ok(questions.len())
    }

    async fn list_questions(&self, kind: QuestionKind) -> Result<Vec<Question>, StorageError> {
        let sql = format!(
            r"
            SELECT id, question, answer, options, difficulty
            FROM {}
            ORDER BY id ASC
            ",
            question_table(kind)
        );
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(conn)?;

        let mut questions = Vec::with_capacity(rows.len());
        for row in rows {
            questions.push(map_question_row(kind, &row)?);
        }
        Ok(questions)
    }

    async fn get_questions(
        &self,
        kind: QuestionKind,
        ids: &[QuestionId],
    ) -> Result<Vec<Question>, StorageError> {
        // Ids past i64::MAX cannot name a row.
        let mut keys: Vec<i64> = ids
            .iter()
            .filter_map(|id| i64::try_from(id.value()).ok())
            .collect();
        keys.sort_unstable();
        keys.dedup();

        let mut questions = Vec::new();
        for chunk in keys.chunks(IDS_PER_QUERY) {
            let placeholders = (1..=chunk.len())
                .map(|i| format!("?{i}"))
                .collect::<Vec<_>>()
                .join(", ");
            let sql = format!(
                r"
                SELECT id, question, answer, options, difficulty
                FROM {}
                WHERE id IN ({placeholders})
                ORDER BY id ASC
                ",
                question_table(kind)
            );

            let mut q = sqlx::query(&sql);
            for key in chunk {
                q = q.bind(*key);
            }

            let rows = q.fetch_all(&self.pool).await.map_err(conn)?;
            for row in rows {
                questions.push(map_question_row(kind, &row)?);
            }
        }
        Ok(questions)
    }

    async fn count_questions(&self, kind: QuestionKind) -> Result<u64, StorageError> {
        let sql = format!("SELECT COUNT(*) AS n FROM {}", question_table(kind));
        let row = sqlx::query(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(conn)?;
        count_from_i64(row.try_get::<i64, _>("n").map_err(ser)?)
    }
}
