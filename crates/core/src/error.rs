use thiserror::Error;

use crate::model::{GradeError, QuestionError, UserError, VocabularyError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Grade(#[from] GradeError),
}
