use serde::{Deserialize, Serialize};

use annie_core::model::{GradeResult, ProgressOverview, QuestionKind};

/// Latest grading result per kind, as kept in a visitor's session.
///
/// Each new result replaces the previous one of the same kind; nothing is
/// accumulated across submissions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionProgress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_results: Option<GradeResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_results: Option<GradeResult>,
}

impl SessionProgress {
    pub fn record(&mut self, kind: QuestionKind, result: GradeResult) {
        match kind {
            QuestionKind::Exercise => self.exercise_results = Some(result),
            QuestionKind::Quiz => self.quiz_results = Some(result),
        }
    }

    #[must_use]
    pub fn latest(&self, kind: QuestionKind) -> Option<&GradeResult> {
        match kind {
            QuestionKind::Exercise => self.exercise_results.as_ref(),
            QuestionKind::Quiz => self.quiz_results.as_ref(),
        }
    }

    #[must_use]
    pub fn overview(&self) -> ProgressOverview {
        ProgressOverview::aggregate(self.exercise_results.clone(), self.quiz_results.clone())
    }
}
