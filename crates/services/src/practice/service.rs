use std::collections::HashMap;
use std::sync::Arc;

use rand::rng;
use rand::seq::SliceRandom;
use tracing::debug;

use annie_core::model::{
    GradeResult, Grader, Question, QuestionId, QuestionKind, parse_submissions,
};
use storage::repository::QuestionRepository;

use crate::Clock;
use crate::error::PracticeServiceError;
use crate::practice::plan::QuestionSampler;

/// A question ready to render, with its choices in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeItem {
    pub question: Question,
    pub options: Vec<String>,
}

impl PracticeItem {
    #[must_use]
    pub fn field_name(&self) -> String {
        self.question.field_name()
    }
}

/// Draws exercise and quiz sets and grades submitted answers.
#[derive(Clone)]
pub struct PracticeService {
    clock: Clock,
    questions: Arc<dyn QuestionRepository>,
    sampler: QuestionSampler,
    shuffle_options: bool,
}

impl PracticeService {
    #[must_use]
    pub fn new(clock: Clock, questions: Arc<dyn QuestionRepository>) -> Self {
        Self {
            clock,
            questions,
            sampler: QuestionSampler::default(),
            shuffle_options: false,
        }
    }

    /// Replace the default ten-question sampler.
    #[must_use]
    pub fn with_sampler(mut self, sampler: QuestionSampler) -> Self {
        self.sampler = sampler;
        self
    }

    /// Present each question's choices in random order instead of stored order.
    #[must_use]
    pub fn with_shuffle_options(mut self, shuffle: bool) -> Self {
        self.shuffle_options = shuffle;
        self
    }

    /// Pick a random set of questions from the `kind` bank.
    ///
    /// # Errors
    ///
    /// Returns `PracticeServiceError::Storage` if the bank cannot be read.
    pub async fn practice_set(
        &self,
        kind: QuestionKind,
    ) -> Result<Vec<PracticeItem>, PracticeServiceError> {
        let bank = self.questions.list_questions(kind).await?;
        let picked = self.sampler.sample(bank);
        let mut rng = rng();

        Ok(picked
            .into_iter()
            .map(|question| {
                let mut options: Vec<String> = question.options().as_slice().to_vec();
                if self.shuffle_options {
                    options.shuffle(&mut rng);
                }
                PracticeItem { question, options }
            })
            .collect())
    }

    /// Grade the `<kind>_<id>` fields of a submitted form.
    ///
    /// # Errors
    ///
    /// Returns `PracticeServiceError::Grade` for a malformed answer field.
    /// Returns `PracticeServiceError::Storage` if the bank cannot be read.
    pub async fn check_answers<K, V>(
        &self,
        kind: QuestionKind,
        fields: impl IntoIterator<Item = (K, V)>,
    ) -> Result<GradeResult, PracticeServiceError>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let submissions = parse_submissions(kind, fields)?;
        let ids: Vec<QuestionId> = submissions.iter().map(|s| s.id).collect();
        let bank: HashMap<QuestionId, Question> = self
            .questions
            .get_questions(kind, &ids)
            .await?
            .into_iter()
            .map(|q| (q.id(), q))
            .collect();

        let result = Grader::new(kind).grade(&submissions, &bank, self.clock.now());
        debug!(
            kind = %kind,
            correct = result.correct,
            total = result.total,
            "graded submission"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annie_core::model::{QuestionDraft, UNKNOWN_ANSWER};
    use annie_core::time::fixed_now;
    use storage::repository::InMemoryRepository;

    async fn service_with(kind: QuestionKind, answers: &[&str]) -> PracticeService {
        let repo = InMemoryRepository::new();
        let drafts: Vec<_> = answers
            .iter()
            .map(|answer| {
                QuestionDraft::new(kind, format!("Pick {answer}"), *answer, &[*answer, "other"])
                    .validate()
                    .unwrap()
            })
            .collect();
        repo.insert_questions(&drafts).await.unwrap();
        PracticeService::new(Clock::fixed(fixed_now()), Arc::new(repo))
    }

    #[tokio::test]
    async fn practice_set_is_capped_at_ten() {
        let answers: Vec<String> = (0..20).map(|i| format!("a{i}")).collect();
        let refs: Vec<&str> = answers.iter().map(String::as_str).collect();
        let service = service_with(QuestionKind::Quiz, &refs).await;

        let set = service.practice_set(QuestionKind::Quiz).await.unwrap();
        assert_eq!(set.len(), 10);
        assert!(set.iter().all(|item| item.question.kind() == QuestionKind::Quiz));
    }

    #[tokio::test]
    async fn custom_sampler_sets_page_size() {
        let service = service_with(QuestionKind::Exercise, &["how", "walks", "are", "is"])
            .await
            .with_sampler(QuestionSampler::new(3));

        let set = service.practice_set(QuestionKind::Exercise).await.unwrap();
        assert_eq!(set.len(), 3);
        let mut ids: Vec<u64> = set.iter().map(|item| item.question.id().value()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn small_bank_keeps_order_and_option_order() {
        let service = service_with(QuestionKind::Exercise, &["how", "walks"]).await;

        let set = service.practice_set(QuestionKind::Exercise).await.unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set[0].question.answer(), "how");
        assert_eq!(set[0].options, vec!["how".to_owned(), "other".to_owned()]);
        assert_eq!(set[0].field_name(), "exercise_1");
    }

    #[tokio::test]
    async fn grades_submitted_form() {
        let service = service_with(QuestionKind::Exercise, &["how"]).await;

        let result = service
            .check_answers(QuestionKind::Exercise, [("exercise_1", "How")])
            .await
            .unwrap();

        assert_eq!(result.correct, 1);
        assert_eq!(result.total, 1);
        assert!((result.percentage - 100.0).abs() < f64::EPSILON);
        assert_eq!(result.graded_at, Some(fixed_now()));
    }

    #[tokio::test]
    async fn unknown_question_is_marked_unknown() {
        let service = service_with(QuestionKind::Quiz, &["cat"]).await;

        let result = service
            .check_answers(QuestionKind::Quiz, [("quiz_1", "cat"), ("quiz_99", "dog")])
            .await
            .unwrap();

        assert_eq!(result.correct, 1);
        assert_eq!(result.total, 2);
        assert!(!result.details[1].correct);
        assert_eq!(result.details[1].answer, UNKNOWN_ANSWER);
    }

    #[tokio::test]
    async fn quiz_ids_do_not_grade_exercises() {
        let service = service_with(QuestionKind::Exercise, &["how"]).await;

        let result = service
            .check_answers(QuestionKind::Quiz, [("quiz_1", "how")])
            .await
            .unwrap();

        assert_eq!(result.correct, 0);
        assert_eq!(result.details[0].answer, UNKNOWN_ANSWER);
    }

    #[tokio::test]
    async fn malformed_key_is_rejected() {
        let service = service_with(QuestionKind::Exercise, &["how"]).await;

        let err = service
            .check_answers(QuestionKind::Exercise, [("exercise_abc", "how")])
            .await
            .unwrap_err();

        assert!(matches!(err, PracticeServiceError::Grade(_)));
    }

    #[tokio::test]
    async fn empty_form_scores_zero() {
        let service = service_with(QuestionKind::Exercise, &["how"]).await;

        let result = service
            .check_answers(QuestionKind::Exercise, Vec::<(String, String)>::new())
            .await
            .unwrap();

        assert_eq!(result.total, 0);
        assert!(result.percentage.abs() < f64::EPSILON);
    }
}
