use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::practice::PracticeService;
use crate::seed::{SeedReport, Seeder};
use crate::vocabulary_service::VocabularyService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    seed_report: SeedReport,
    vocabulary: Arc<VocabularyService>,
    practice: Arc<PracticeService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage, seeding empty tables.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or seeding fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(storage, clock).await
    }

    /// Build services over an existing storage bundle, seeding empty tables.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Seed` if built-in content cannot be stored.
    pub async fn from_storage(storage: Storage, clock: Clock) -> Result<Self, AppServicesError> {
        let seed_report = Seeder::new(
            Arc::clone(&storage.vocabulary),
            Arc::clone(&storage.questions),
        )
        .seed_if_empty()
        .await?;
        Ok(Self::without_seeding(&storage, clock).with_seed_report(seed_report))
    }

    /// Build services without touching stored content.
    #[must_use]
    pub fn without_seeding(storage: &Storage, clock: Clock) -> Self {
        Self {
            seed_report: SeedReport::default(),
            vocabulary: Arc::new(VocabularyService::new(Arc::clone(&storage.vocabulary))),
            practice: Arc::new(PracticeService::new(clock, Arc::clone(&storage.questions))),
        }
    }

    fn with_seed_report(mut self, report: SeedReport) -> Self {
        self.seed_report = report;
        self
    }

    /// What the startup seeding pass inserted.
    #[must_use]
    pub fn seed_report(&self) -> SeedReport {
        self.seed_report
    }

    #[must_use]
    pub fn vocabulary(&self) -> Arc<VocabularyService> {
        Arc::clone(&self.vocabulary)
    }

    #[must_use]
    pub fn practice(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }
}
