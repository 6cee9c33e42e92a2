use chrono::Utc;
use sqlx::SqlitePool;

use super::SqliteInitError;

/// Runs the versioned migrations for the current schema.
///
/// Version 1 creates the content tables (vocabulary, exercises, quizzes) and
/// the account tables (users, progress).
#[allow(clippy::too_many_lines)]
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteInitError> {
    async fn is_applied(pool: &SqlitePool, version: i64) -> Result<bool, sqlx::Error> {
        let row = sqlx::query("SELECT 1 FROM schema_migrations WHERE version = ?1")
            .bind(version)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    sqlx::query(
        r"
            CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                applied_at TEXT NOT NULL
            );
            ",
    )
    .execute(pool)
    .await?;

    if !is_applied(pool, 1).await? {
        let mut tx = pool.begin().await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS vocabulary (
                    id INTEGER PRIMARY KEY,
                    english TEXT NOT NULL CHECK (length(english) <= 100),
                    vietnamese TEXT NOT NULL CHECK (length(vietnamese) <= 100),
                    example TEXT CHECK (example IS NULL OR length(example) <= 255),
                    audio_url TEXT CHECK (audio_url IS NULL OR length(audio_url) <= 255)
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        // Exercises and quizzes share a layout but keep separate id spaces.
        for table in ["exercises", "quizzes"] {
            let ddl = format!(
                r"
                CREATE TABLE IF NOT EXISTS {table} (
                    id INTEGER PRIMARY KEY,
                    question TEXT NOT NULL CHECK (length(question) <= 255),
                    answer TEXT NOT NULL CHECK (length(answer) <= 100),
                    options TEXT NOT NULL CHECK (length(options) <= 255),
                    difficulty TEXT CHECK (difficulty IS NULL OR difficulty IN ('easy', 'medium', 'hard'))
                );
                "
            );
            sqlx::query(&ddl).execute(&mut *tx).await?;
        }

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS users (
                    id INTEGER PRIMARY KEY,
                    username TEXT NOT NULL UNIQUE CHECK (length(username) <= 64),
                    email TEXT NOT NULL UNIQUE CHECK (length(email) <= 120),
                    password_hash TEXT CHECK (password_hash IS NULL OR length(password_hash) <= 256)
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS progress (
                    id INTEGER PRIMARY KEY,
                    user_id INTEGER NOT NULL UNIQUE,
                    exercise_complete INTEGER NOT NULL DEFAULT 0 CHECK (exercise_complete >= 0),
                    quiz_complete INTEGER NOT NULL DEFAULT 0 CHECK (quiz_complete >= 0),
                    vocabulary_mastered INTEGER NOT NULL DEFAULT 0 CHECK (vocabulary_mastered >= 0),
                    last_activity TEXT NOT NULL,
                    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                INSERT INTO schema_migrations (version, applied_at)
                VALUES (?1, ?2)
                ON CONFLICT(version) DO NOTHING
            ",
        )
        .bind(1_i64)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
    }

    Ok(())
}
