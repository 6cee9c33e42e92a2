mod practice_vm;
mod progress_vm;
mod time_fmt;
mod vocabulary_vm;

pub use practice_vm::{PracticePageVm, PracticeQuestionVm};
pub use progress_vm::{GradeDetailVm, GradeResultVm, ProgressPageVm, map_progress};
pub use time_fmt::{format_datetime, format_percentage};
pub use vocabulary_vm::{PronunciationVm, VOCABULARY_LOAD_ERROR, VocabularyPageVm, VocabularyRowVm};
