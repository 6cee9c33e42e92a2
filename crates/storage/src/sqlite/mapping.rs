use annie_core::model::{
    AnswerOptions, Difficulty, ProgressId, Question, QuestionId, QuestionKind, UserId, Vocabulary,
    VocabularyId,
};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

fn i64_to_u64(field: &'static str, v: i64) -> Result<u64, StorageError> {
    u64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} sign overflow")))
}

pub(crate) fn u64_to_i64(field: &'static str, v: u64) -> Result<i64, StorageError> {
    i64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} overflow")))
}

pub(crate) fn u32_from_i64(field: &'static str, v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid {field}: {v}")))
}

pub(crate) fn count_from_i64(v: i64) -> Result<u64, StorageError> {
    i64_to_u64("count", v)
}

pub(crate) fn vocabulary_id_from_i64(v: i64) -> Result<VocabularyId, StorageError> {
    Ok(VocabularyId::new(i64_to_u64("vocabulary_id", v)?))
}

pub(crate) fn question_id_from_i64(v: i64) -> Result<QuestionId, StorageError> {
    Ok(QuestionId::new(i64_to_u64("question_id", v)?))
}

pub(crate) fn user_id_from_i64(v: i64) -> Result<UserId, StorageError> {
    Ok(UserId::new(i64_to_u64("user_id", v)?))
}

pub(crate) fn progress_id_from_i64(v: i64) -> Result<ProgressId, StorageError> {
    Ok(ProgressId::new(i64_to_u64("progress_id", v)?))
}

/// Table backing each question bank.
pub(crate) fn question_table(kind: QuestionKind) -> &'static str {
    match kind {
        QuestionKind::Exercise => "exercises",
        QuestionKind::Quiz => "quizzes",
    }
}

pub(crate) fn map_vocabulary_row(row: &SqliteRow) -> Result<Vocabulary, StorageError> {
    Ok(Vocabulary::from_persisted(
        vocabulary_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
        row.try_get("english").map_err(ser)?,
        row.try_get("vietnamese").map_err(ser)?,
        row.try_get("example").map_err(ser)?,
        row.try_get("audio_url").map_err(ser)?,
    ))
}

pub(crate) fn map_question_row(
    kind: QuestionKind,
    row: &SqliteRow,
) -> Result<Question, StorageError> {
    let options: String = row.try_get("options").map_err(ser)?;
    let difficulty = row
        .try_get::<Option<String>, _>("difficulty")
        .map_err(ser)?
        .map(|tag| Difficulty::parse(&tag))
        .transpose()
        .map_err(ser)?;

    Ok(Question::from_persisted(
        question_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
        kind,
        row.try_get("question").map_err(ser)?,
        row.try_get("answer").map_err(ser)?,
        AnswerOptions::from_joined(&options),
        difficulty,
    ))
}
