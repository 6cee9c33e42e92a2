#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod practice;
pub mod progress;
pub mod seed;
pub mod vocabulary_service;

pub use annie_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, PracticeServiceError, SeedError, VocabularyServiceError};
pub use practice::{PRACTICE_SET_SIZE, PracticeItem, PracticeService, QuestionSampler};
pub use progress::SessionProgress;
pub use seed::{SeedReport, Seeder};
pub use vocabulary_service::{PronunciationSet, VocabularyService};
