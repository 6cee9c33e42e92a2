//! First-start content loading.

pub mod data;

use std::fmt;
use std::sync::Arc;

use tracing::info;

use annie_core::model::{NewQuestion, NewVocabulary, QuestionDraft, QuestionKind};
use storage::repository::{QuestionRepository, VocabularyRepository};

use crate::error::SeedError;

/// Rows inserted by one seeding pass. Zero means the table already had data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub vocabulary: usize,
    pub exercises: usize,
    pub quizzes: usize,
}

impl SeedReport {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.vocabulary == 0 && self.exercises == 0 && self.quizzes == 0
    }
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vocabulary: {}, exercises: {}, quizzes: {}",
            self.vocabulary, self.exercises, self.quizzes
        )
    }
}

/// Fills empty content tables with the built-in data set.
#[derive(Clone)]
pub struct Seeder {
    vocabulary: Arc<dyn VocabularyRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl Seeder {
    #[must_use]
    pub fn new(
        vocabulary: Arc<dyn VocabularyRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            vocabulary,
            questions,
        }
    }

    /// Insert built-in content into every table that is still empty.
    ///
    /// Each table is checked on its own, so a database with vocabulary but no
    /// quizzes only receives quizzes.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Storage` if a count or insert fails.
    /// Returns `SeedError::Invalid` if built-in data fails validation.
    pub async fn seed_if_empty(&self) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();

        if self.vocabulary.count_vocabulary().await? == 0 {
            let entries = data::vocabulary()
                .into_iter()
                .map(|draft| draft.validate().map_err(annie_core::Error::from))
                .collect::<Result<Vec<NewVocabulary>, _>>()?;
            report.vocabulary = self.vocabulary.insert_vocabulary(&entries).await?;
        }

        report.exercises = self
            .seed_bank(QuestionKind::Exercise, data::exercises())
            .await?;
        report.quizzes = self.seed_bank(QuestionKind::Quiz, data::quizzes()).await?;

        if report.is_noop() {
            info!("content tables already populated");
        } else {
            info!(
                vocabulary = report.vocabulary,
                exercises = report.exercises,
                quizzes = report.quizzes,
                "seeded content tables"
            );
        }
        Ok(report)
    }

    async fn seed_bank(
        &self,
        kind: QuestionKind,
        drafts: Vec<QuestionDraft>,
    ) -> Result<usize, SeedError> {
        if self.questions.count_questions(kind).await? > 0 {
            return Ok(0);
        }
        let questions = drafts
            .into_iter()
            .map(|draft| draft.validate().map_err(annie_core::Error::from))
            .collect::<Result<Vec<NewQuestion>, _>>()?;
        Ok(self.questions.insert_questions(&questions).await?)
    }
}
