use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::{Question, QuestionKind};

/// Answer recorded for submissions whose question no longer exists.
pub const UNKNOWN_ANSWER: &str = "Unknown";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GradeError {
    #[error("malformed answer field {key:?}: expected {kind}_<id>")]
    MalformedKey { kind: QuestionKind, key: String },
}

/// One answer taken from a submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: QuestionId,
    pub answer: String,
}

/// Extract the submissions for `kind` from raw form pairs.
///
/// Fields without the `<kind>_` prefix are ignored. When a field repeats,
/// only its first value is kept. Order follows the form.
///
/// # Errors
///
/// Returns `GradeError::MalformedKey` if a prefixed field does not end in a
/// non-negative integer id.
pub fn parse_submissions<K, V>(
    kind: QuestionKind,
    fields: impl IntoIterator<Item = (K, V)>,
) -> Result<Vec<Submission>, GradeError>
where
    K: AsRef<str>,
    V: Into<String>,
{
    let prefix = format!("{}_", kind.as_str());
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for (key, value) in fields {
        let key = key.as_ref();
        let Some(raw_id) = key.strip_prefix(prefix.as_str()) else {
            continue;
        };
        if !seen.insert(key.to_owned()) {
            continue;
        }
        let id = raw_id
            .parse::<QuestionId>()
            .map_err(|_| GradeError::MalformedKey {
                kind,
                key: key.to_owned(),
            })?;
        out.push(Submission {
            id,
            answer: value.into(),
        });
    }

    Ok(out)
}

/// Grading outcome for a single submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeDetail {
    pub id: QuestionId,
    pub correct: bool,
    /// The stored correct answer, or `"Unknown"` if the question is missing.
    pub answer: String,
}

/// Score for one graded submission set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeResult {
    pub correct: u32,
    pub total: u32,
    pub percentage: f64,
    pub details: Vec<GradeDetail>,
    #[serde(default)]
    pub graded_at: Option<DateTime<Utc>>,
}

impl GradeResult {
    /// A result with nothing answered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            correct: 0,
            total: 0,
            percentage: 0.0,
            details: Vec::new(),
            graded_at: None,
        }
    }

    /// Tally per-item details into a result.
    #[must_use]
    pub fn from_details(details: Vec<GradeDetail>, graded_at: Option<DateTime<Utc>>) -> Self {
        let total = u32::try_from(details.len()).unwrap_or(u32::MAX);
        let correct = u32::try_from(details.iter().filter(|d| d.correct).count()).unwrap_or(u32::MAX);
        Self {
            correct,
            total,
            percentage: percentage(correct, total),
            details,
            graded_at,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl Default for GradeResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// `100 * correct / total`, or `0` when nothing was answered.
#[must_use]
pub fn percentage(correct: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * f64::from(correct) / f64::from(total)
}

/// Compares submissions against stored answers for one question bank.
#[derive(Debug, Clone, Copy)]
pub struct Grader {
    kind: QuestionKind,
}

impl Grader {
    #[must_use]
    pub fn new(kind: QuestionKind) -> Self {
        Self { kind }
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// Grade `submissions` against `questions`.
    ///
    /// A submission whose id is absent from `questions` (or belongs to the
    /// other bank) is counted as incorrect with answer `"Unknown"`.
    #[must_use]
    pub fn grade(
        &self,
        submissions: &[Submission],
        questions: &HashMap<QuestionId, Question>,
        graded_at: DateTime<Utc>,
    ) -> GradeResult {
        let details = submissions
            .iter()
            .map(|submission| {
                match questions
                    .get(&submission.id)
                    .filter(|q| q.kind() == self.kind)
                {
                    Some(question) => GradeDetail {
                        id: submission.id,
                        correct: question.is_correct(&submission.answer),
                        answer: question.answer().to_owned(),
                    },
                    None => GradeDetail {
                        id: submission.id,
                        correct: false,
                        answer: UNKNOWN_ANSWER.to_owned(),
                    },
                }
            })
            .collect();

        GradeResult::from_details(details, Some(graded_at))
    }
}
