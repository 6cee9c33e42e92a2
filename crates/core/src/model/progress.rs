use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::grading::{GradeResult, percentage};
use crate::model::ids::{ProgressId, UserId};

/// Combined view of the latest exercise and quiz results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressOverview {
    pub exercise: GradeResult,
    pub quiz: GradeResult,
    pub total_correct: u32,
    pub total_questions: u32,
    pub overall_percentage: f64,
}

impl ProgressOverview {
    /// Aggregate the two latest results, treating a missing one as empty.
    ///
    /// The overall percentage is weighted by question count, so a 10-question
    /// quiz counts twice as much as a 5-question exercise set.
    #[must_use]
    pub fn aggregate(exercise: Option<GradeResult>, quiz: Option<GradeResult>) -> Self {
        let exercise = exercise.unwrap_or_default();
        let quiz = quiz.unwrap_or_default();
        let total_correct = exercise.correct.saturating_add(quiz.correct);
        let total_questions = exercise.total.saturating_add(quiz.total);

        Self {
            overall_percentage: percentage(total_correct, total_questions),
            exercise,
            quiz,
            total_correct,
            total_questions,
        }
    }

    #[must_use]
    pub fn has_activity(&self) -> bool {
        self.total_questions > 0
    }
}

/// Persisted per-user learning counters.
///
/// Present in the schema for future account support; the web routes keep
/// progress in the session instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub id: Option<ProgressId>,
    pub user_id: UserId,
    pub exercises_completed: u32,
    pub quizzes_completed: u32,
    pub vocabulary_mastered: u32,
    pub last_activity: DateTime<Utc>,
}

impl Progress {
    #[must_use]
    pub fn new(user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            user_id,
            exercises_completed: 0,
            quizzes_completed: 0,
            vocabulary_mastered: 0,
            last_activity: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::grading::GradeDetail;
    use crate::model::ids::QuestionId;

    fn result(correct: u32, total: u32) -> GradeResult {
        let details = (0..total)
            .map(|i| GradeDetail {
                id: QuestionId::new(u64::from(i) + 1),
                correct: i < correct,
                answer: "x".into(),
            })
            .collect();
        GradeResult::from_details(details, None)
    }

    #[test]
    fn missing_results_aggregate_to_zero() {
        let overview = ProgressOverview::aggregate(None, None);
        assert_eq!(overview.total_questions, 0);
        assert_eq!(overview.overall_percentage, 0.0);
        assert!(!overview.has_activity());
    }

    #[test]
    fn overall_is_weighted_by_question_count() {
        // 10/10 on exercises and 0/5 on the quiz: simple average would be 50%.
        let overview = ProgressOverview::aggregate(Some(result(10, 10)), Some(result(0, 5)));
        assert_eq!(overview.total_correct, 10);
        assert_eq!(overview.total_questions, 15);
        assert_eq!(overview.overall_percentage, 100.0 * 10.0 / 15.0);
        assert_ne!(overview.overall_percentage, 50.0);
    }

    #[test]
    fn single_kind_carries_through() {
        let overview = ProgressOverview::aggregate(None, Some(result(3, 4)));
        assert_eq!(overview.exercise.total, 0);
        assert_eq!(overview.overall_percentage, 75.0);
    }
}
