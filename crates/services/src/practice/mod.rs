mod plan;
mod service;

pub use plan::{PRACTICE_SET_SIZE, QuestionSampler};
pub use service::{PracticeItem, PracticeService};
