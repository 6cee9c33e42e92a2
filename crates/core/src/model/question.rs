use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

pub const MAX_PROMPT_LEN: usize = 255;
pub const MAX_ANSWER_LEN: usize = 100;
pub const MAX_OPTIONS_LEN: usize = 255;

/// Separator used when answer choices are persisted as a single column.
pub const OPTION_SEPARATOR: char = ',';

//
// ─── KIND ──────────────────────────────────────────────────────────────────────
//

/// Which question bank a question belongs to.
///
/// Exercises and quizzes share a shape but are stored, sampled and graded
/// separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Exercise,
    Quiz,
}

impl QuestionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::Exercise => "exercise",
            QuestionKind::Quiz => "quiz",
        }
    }

    /// Form field name for an answer to the given question, e.g. `quiz_3`.
    #[must_use]
    pub fn field_name(self, id: QuestionId) -> String {
        format!("{}_{}", self.as_str(), id.value())
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Parse a stored difficulty tag.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::UnknownDifficulty` for any other tag.
    pub fn parse(tag: &str) -> Result<Self, QuestionError> {
        match tag.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(QuestionError::UnknownDifficulty(other.to_owned())),
        }
    }
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyPrompt,

    #[error("answer cannot be empty")]
    EmptyAnswer,

    #[error("at least one answer option is required")]
    NoOptions,

    #[error("answer options cannot be empty")]
    EmptyOption,

    #[error("answer option {0:?} contains a comma")]
    OptionContainsSeparator(String),

    #[error("answer {answer:?} is not one of the options")]
    AnswerNotInOptions { answer: String },

    #[error("{field} exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

//
// ─── ANSWER MATCHING ───────────────────────────────────────────────────────────
//

/// Canonical form used for answer comparison: trimmed and lowercased.
#[must_use]
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Returns true if `submitted` matches `expected` ignoring case and
/// surrounding whitespace.
#[must_use]
pub fn answers_match(submitted: &str, expected: &str) -> bool {
    normalize_answer(submitted) == normalize_answer(expected)
}

//
// ─── OPTIONS ───────────────────────────────────────────────────────────────────
//

/// Ordered answer choices for a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnswerOptions(Vec<String>);

impl AnswerOptions {
    /// Split a persisted comma-joined column into options, preserving order.
    ///
    /// Empty segments are dropped so a trailing comma does not produce a
    /// blank choice.
    #[must_use]
    pub fn from_joined(joined: &str) -> Self {
        Self(
            joined
                .split(OPTION_SEPARATOR)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    /// Join options back into their persisted representation.
    #[must_use]
    pub fn joined(&self) -> String {
        self.0.join(",")
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains_answer(&self, answer: &str) -> bool {
        self.0.iter().any(|option| answers_match(option, answer))
    }
}

impl IntoIterator for AnswerOptions {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub kind: QuestionKind,
    pub prompt: String,
    pub answer: String,
    pub options: Vec<String>,
    pub difficulty: Option<Difficulty>,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(
        kind: QuestionKind,
        prompt: impl Into<String>,
        answer: impl Into<String>,
        options: &[&str],
    ) -> Self {
        Self {
            kind,
            prompt: prompt.into(),
            answer: answer.into(),
            options: options.iter().map(|s| (*s).to_owned()).collect(),
            difficulty: None,
        }
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Validate the draft, enforcing that the answer is one of the options.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` describing the first violated rule.
    pub fn validate(self) -> Result<NewQuestion, QuestionError> {
        let prompt = self.prompt.trim().to_owned();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        check_len("question", &prompt, MAX_PROMPT_LEN)?;

        let answer = self.answer.trim().to_owned();
        if answer.is_empty() {
            return Err(QuestionError::EmptyAnswer);
        }
        check_len("answer", &answer, MAX_ANSWER_LEN)?;

        if self.options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        let mut options = Vec::with_capacity(self.options.len());
        for option in self.options {
            let option = option.trim().to_owned();
            if option.is_empty() {
                return Err(QuestionError::EmptyOption);
            }
            if option.contains(OPTION_SEPARATOR) {
                return Err(QuestionError::OptionContainsSeparator(option));
            }
            options.push(option);
        }
        let options = AnswerOptions(options);
        check_len("options", &options.joined(), MAX_OPTIONS_LEN)?;

        if !options.contains_answer(&answer) {
            return Err(QuestionError::AnswerNotInOptions { answer });
        }

        Ok(NewQuestion {
            kind: self.kind,
            prompt,
            answer,
            options,
            difficulty: self.difficulty,
        })
    }
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), QuestionError> {
    if value.chars().count() > max {
        return Err(QuestionError::TooLong { field, max });
    }
    Ok(())
}

/// A validated question awaiting an id from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub kind: QuestionKind,
    pub prompt: String,
    pub answer: String,
    pub options: AnswerOptions,
    pub difficulty: Option<Difficulty>,
}

impl NewQuestion {
    #[must_use]
    pub fn assign_id(self, id: QuestionId) -> Question {
        Question {
            id,
            kind: self.kind,
            prompt: self.prompt,
            answer: self.answer,
            options: self.options,
            difficulty: self.difficulty,
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice exercise or quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    kind: QuestionKind,
    prompt: String,
    answer: String,
    options: AnswerOptions,
    difficulty: Option<Difficulty>,
}

impl Question {
    #[must_use]
    pub fn from_persisted(
        id: QuestionId,
        kind: QuestionKind,
        prompt: String,
        answer: String,
        options: AnswerOptions,
        difficulty: Option<Difficulty>,
    ) -> Self {
        Self {
            id,
            kind,
            prompt,
            answer,
            options,
            difficulty,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn options(&self) -> &AnswerOptions {
        &self.options
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    #[must_use]
    pub fn field_name(&self) -> String {
        self.kind.field_name(self.id)
    }

    #[must_use]
    pub fn is_correct(&self, submitted: &str) -> bool {
        answers_match(submitted, &self.answer)
    }
}
