use std::sync::Arc;

use async_trait::async_trait;
use annie_core::model::{NewQuestion, Question, QuestionId, QuestionKind, UNKNOWN_ANSWER};
use annie_core::time::fixed_now;
use services::{AppServices, Clock, PracticeService, PracticeServiceError, SessionProgress};
use storage::repository::{QuestionRepository, Storage, StorageError};

#[tokio::test]
async fn answering_a_full_set_scores_one_hundred() {
    let services = AppServices::from_storage(Storage::in_memory(), Clock::fixed(fixed_now()))
        .await
        .unwrap();
    let practice = services.practice();

    let set = practice.practice_set(QuestionKind::Quiz).await.unwrap();
    assert_eq!(set.len(), 10);

    let form: Vec<(String, String)> = set
        .iter()
        .map(|item| {
            (
                item.field_name(),
                format!("  {}  ", item.question.answer().to_uppercase()),
            )
        })
        .collect();
    let result = practice
        .check_answers(QuestionKind::Quiz, form)
        .await
        .unwrap();
    assert_eq!(result.correct, 10);
    assert_eq!(result.total, 10);

    let mut progress = SessionProgress::default();
    progress.record(QuestionKind::Quiz, result);
    let overview = progress.overview();
    assert!((overview.overall_percentage - 100.0).abs() < f64::EPSILON);
    assert_eq!(overview.exercise.total, 0);
}

#[tokio::test]
async fn seeded_first_exercise_accepts_how() {
    let services = AppServices::from_storage(Storage::in_memory(), Clock::fixed(fixed_now()))
        .await
        .unwrap();

    let result = services
        .practice()
        .check_answers(QuestionKind::Exercise, [("exercise_1", "How")])
        .await
        .unwrap();

    assert_eq!((result.correct, result.total), (1, 1));
    assert!((result.percentage - 100.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn sqlite_grades_unknown_ids_instead_of_failing() {
    let services = AppServices::new_sqlite(
        "sqlite:file:practice_unknown_ids?mode=memory&cache=shared",
        Clock::fixed(fixed_now()),
    )
    .await
    .unwrap();
    let practice = services.practice();

    let huge = practice
        .check_answers(
            QuestionKind::Exercise,
            [("exercise_18446744073709551615", "how")],
        )
        .await
        .unwrap();
    assert_eq!((huge.correct, huge.total), (0, 1));
    assert_eq!(huge.details[0].answer, UNKNOWN_ANSWER);

    let form: Vec<(String, String)> = (1..=40_000)
        .map(|id| (format!("quiz_{id}"), "today".to_owned()))
        .collect();
    let many = practice
        .check_answers(QuestionKind::Quiz, form)
        .await
        .unwrap();
    assert_eq!(many.total, 40_000);
    assert!(many.correct >= 1);
    assert_eq!(
        many.details
            .iter()
            .filter(|d| d.answer == UNKNOWN_ANSWER)
            .count(),
        40_000 - 20
    );
}

struct UnavailableQuestions;

#[async_trait]
impl QuestionRepository for UnavailableQuestions {
    async fn insert_questions(&self, _: &[NewQuestion]) -> Result<usize, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn list_questions(&self, _: QuestionKind) -> Result<Vec<Question>, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn get_questions(
        &self,
        _: QuestionKind,
        _: &[QuestionId],
    ) -> Result<Vec<Question>, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn count_questions(&self, _: QuestionKind) -> Result<u64, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }
}

#[tokio::test]
async fn storage_failures_surface_as_errors() {
    let practice = PracticeService::new(Clock::default(), Arc::new(UnavailableQuestions));

    let err = practice
        .practice_set(QuestionKind::Exercise)
        .await
        .unwrap_err();
    assert!(matches!(err, PracticeServiceError::Storage(_)));

    let err = practice
        .check_answers(QuestionKind::Exercise, [("exercise_1", "how")])
        .await
        .unwrap_err();
    assert!(matches!(err, PracticeServiceError::Storage(_)));
}
