use annie_core::model::Vocabulary;
use services::PronunciationSet;

/// Shown in place of the word list when it cannot be loaded.
pub const VOCABULARY_LOAD_ERROR: &str = "Không thể tải từ vựng";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VocabularyRowVm {
    pub id: u64,
    pub english: String,
    pub vietnamese: String,
    pub example: Option<String>,
    pub audio_url: Option<String>,
}

impl From<&Vocabulary> for VocabularyRowVm {
    fn from(word: &Vocabulary) -> Self {
        Self {
            id: word.id().value(),
            english: word.english().to_owned(),
            vietnamese: word.vietnamese().to_owned(),
            example: word.example().map(str::to_owned),
            audio_url: word.audio_url().map(str::to_owned),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VocabularyPageVm {
    pub words: Vec<VocabularyRowVm>,
    pub error: Option<String>,
}

impl VocabularyPageVm {
    #[must_use]
    pub fn loaded(words: &[Vocabulary]) -> Self {
        Self {
            words: words.iter().map(VocabularyRowVm::from).collect(),
            error: None,
        }
    }

    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            words: Vec::new(),
            error: Some(VOCABULARY_LOAD_ERROR.to_owned()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PronunciationVm {
    pub current_word: String,
    pub daily_words: Vec<VocabularyRowVm>,
}

impl From<&PronunciationSet> for PronunciationVm {
    fn from(set: &PronunciationSet) -> Self {
        Self {
            current_word: set.current_word.clone(),
            daily_words: set.daily_words.iter().map(VocabularyRowVm::from).collect(),
        }
    }
}
