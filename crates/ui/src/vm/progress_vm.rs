use annie_core::model::{GradeDetail, GradeResult};
use services::SessionProgress;

use crate::vm::time_fmt::{format_datetime, format_percentage};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradeDetailVm {
    pub id: u64,
    pub correct: bool,
    pub answer: String,
}

impl From<&GradeDetail> for GradeDetailVm {
    fn from(detail: &GradeDetail) -> Self {
        Self {
            id: detail.id.value(),
            correct: detail.correct,
            answer: detail.answer.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradeResultVm {
    pub correct: u32,
    pub total: u32,
    pub percentage_label: String,
    pub graded_at_str: Option<String>,
    pub details: Vec<GradeDetailVm>,
}

impl From<&GradeResult> for GradeResultVm {
    fn from(result: &GradeResult) -> Self {
        Self {
            correct: result.correct,
            total: result.total,
            percentage_label: format_percentage(result.percentage),
            graded_at_str: result.graded_at.map(format_datetime),
            details: result.details.iter().map(GradeDetailVm::from).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressPageVm {
    pub exercise: Option<GradeResultVm>,
    pub quiz: Option<GradeResultVm>,
    pub total_correct: u32,
    pub total_questions: u32,
    pub overall_label: String,
    /// Whole-number overall score for the progress bar width.
    pub overall_width: u32,
}

impl ProgressPageVm {
    #[must_use]
    pub fn has_activity(&self) -> bool {
        self.total_questions > 0
    }
}

#[must_use]
pub fn map_progress(progress: &SessionProgress) -> ProgressPageVm {
    let overview = progress.overview();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let overall_width = overview.overall_percentage.round().clamp(0.0, 100.0) as u32;

    ProgressPageVm {
        exercise: progress.exercise_results.as_ref().map(GradeResultVm::from),
        quiz: progress.quiz_results.as_ref().map(GradeResultVm::from),
        total_correct: overview.total_correct,
        total_questions: overview.total_questions,
        overall_label: format_percentage(overview.overall_percentage),
        overall_width,
    }
}
