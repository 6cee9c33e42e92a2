//! Shared error types for the services crate.

use thiserror::Error;

use annie_core::model::GradeError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `VocabularyService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VocabularyServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `PracticeService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PracticeServiceError {
    #[error(transparent)]
    Grade(#[from] GradeError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while loading built-in content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SeedError {
    #[error("invalid seed data: {0}")]
    Invalid(#[from] annie_core::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Seed(#[from] SeedError),
}
