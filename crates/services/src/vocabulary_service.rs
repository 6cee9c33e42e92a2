use std::sync::Arc;

use rand::rng;
use rand::seq::IndexedRandom;
use tracing::info;

use annie_core::model::Vocabulary;
use storage::repository::VocabularyRepository;

use crate::error::VocabularyServiceError;
use crate::practice::QuestionSampler;

/// Words drawn for the pronunciation page.
pub const DAILY_WORD_COUNT: usize = 5;

/// Shown as the practice word when the vocabulary table is empty.
pub const FALLBACK_WORD: &str = "Hello";

/// Content of the pronunciation page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronunciationSet {
    pub current_word: String,
    pub daily_words: Vec<Vocabulary>,
}

#[derive(Clone)]
pub struct VocabularyService {
    vocabulary: Arc<dyn VocabularyRepository>,
}

impl VocabularyService {
    #[must_use]
    pub fn new(vocabulary: Arc<dyn VocabularyRepository>) -> Self {
        Self { vocabulary }
    }

    /// Every entry, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyServiceError::Storage` if the list cannot be read.
    pub async fn list_vocabulary(&self) -> Result<Vec<Vocabulary>, VocabularyServiceError> {
        let words = self.vocabulary.list_vocabulary().await?;
        info!(count = words.len(), "loaded vocabulary");
        Ok(words)
    }

    /// A random word to practise plus a handful of daily words.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyServiceError::Storage` if the list cannot be read.
    pub async fn pronunciation_set(&self) -> Result<PronunciationSet, VocabularyServiceError> {
        let words = self.vocabulary.list_vocabulary().await?;
        let current_word = words
            .choose(&mut rng())
            .map_or_else(|| FALLBACK_WORD.to_owned(), |w| w.english().to_owned());
        let daily_words = QuestionSampler::new(DAILY_WORD_COUNT).sample(words);

        Ok(PronunciationSet {
            current_word,
            daily_words,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annie_core::model::VocabularyDraft;
    use storage::repository::InMemoryRepository;

    async fn service_with(words: &[(&str, &str)]) -> VocabularyService {
        let repo = InMemoryRepository::new();
        let entries: Vec<_> = words
            .iter()
            .map(|(en, vi)| VocabularyDraft::new(*en, *vi).validate().unwrap())
            .collect();
        repo.insert_vocabulary(&entries).await.unwrap();
        VocabularyService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn lists_in_id_order() {
        let service = service_with(&[("apple", "quả táo"), ("book", "quyển sách")]).await;

        let words = service.list_vocabulary().await.unwrap();
        let english: Vec<_> = words.iter().map(Vocabulary::english).collect();
        assert_eq!(english, vec!["apple", "book"]);
    }

    #[tokio::test]
    async fn empty_table_falls_back_to_hello() {
        let service = service_with(&[]).await;

        let set = service.pronunciation_set().await.unwrap();
        assert_eq!(set.current_word, FALLBACK_WORD);
        assert!(set.daily_words.is_empty());
    }

    #[tokio::test]
    async fn few_words_are_all_daily_words() {
        let service = service_with(&[("cat", "con mèo"), ("dog", "con chó")]).await;

        let set = service.pronunciation_set().await.unwrap();
        assert_eq!(set.daily_words.len(), 2);
        assert!(["cat", "dog"].contains(&set.current_word.as_str()));
    }

    #[tokio::test]
    async fn many_words_yield_five_distinct() {
        let pairs: Vec<(String, String)> = (0..12)
            .map(|i| (format!("word{i}"), format!("từ {i}")))
            .collect();
        let refs: Vec<(&str, &str)> = pairs
            .iter()
            .map(|(en, vi)| (en.as_str(), vi.as_str()))
            .collect();
        let service = service_with(&refs).await;

        let set = service.pronunciation_set().await.unwrap();
        assert_eq!(set.daily_words.len(), DAILY_WORD_COUNT);
        let mut ids: Vec<_> = set.daily_words.iter().map(Vocabulary::id).collect();
        ids.sort_by_key(|id| id.value());
        ids.dedup();
        assert_eq!(ids.len(), DAILY_WORD_COUNT);
    }
}
