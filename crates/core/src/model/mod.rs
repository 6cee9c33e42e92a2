pub mod grading;
mod ids;
pub mod progress;
pub mod question;
mod user;
mod vocabulary;

pub use ids::{ParseIdError, ProgressId, QuestionId, UserId, VocabularyId};

pub use grading::{
    GradeDetail, GradeError, GradeResult, Grader, Submission, UNKNOWN_ANSWER, parse_submissions,
};
pub use progress::{Progress, ProgressOverview};
pub use question::{
    AnswerOptions, Difficulty, NewQuestion, Question, QuestionDraft, QuestionError, QuestionKind,
    answers_match, normalize_answer,
};
pub use user::{User, UserError};
pub use vocabulary::{NewVocabulary, Vocabulary, VocabularyDraft, VocabularyError};
