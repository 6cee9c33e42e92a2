use thiserror::Error;
use url::Url;

use crate::model::ids::VocabularyId;

pub const MAX_TERM_LEN: usize = 100;
pub const MAX_EXAMPLE_LEN: usize = 255;
pub const MAX_AUDIO_URL_LEN: usize = 255;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VocabularyError {
    #[error("english term cannot be empty")]
    EmptyEnglish,

    #[error("vietnamese translation cannot be empty")]
    EmptyVietnamese,

    #[error("{field} exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("invalid audio url: {0}")]
    InvalidAudioUrl(String),
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated vocabulary input, as produced by seed data or an editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyDraft {
    pub english: String,
    pub vietnamese: String,
    pub example: Option<String>,
    pub audio_url: Option<String>,
}

impl VocabularyDraft {
    #[must_use]
    pub fn new(english: impl Into<String>, vietnamese: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            vietnamese: vietnamese.into(),
            example: None,
            audio_url: None,
        }
    }

    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    #[must_use]
    pub fn with_audio_url(mut self, url: impl Into<String>) -> Self {
        self.audio_url = Some(url.into());
        self
    }

    /// Validate the draft.
    ///
    /// Terms are trimmed; a blank example or audio URL is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError` if a required field is empty, a field is too
    /// long, or the audio URL does not parse.
    pub fn validate(self) -> Result<NewVocabulary, VocabularyError> {
        let english = self.english.trim().to_owned();
        if english.is_empty() {
            return Err(VocabularyError::EmptyEnglish);
        }
        check_len("english", &english, MAX_TERM_LEN)?;

        let vietnamese = self.vietnamese.trim().to_owned();
        if vietnamese.is_empty() {
            return Err(VocabularyError::EmptyVietnamese);
        }
        check_len("vietnamese", &vietnamese, MAX_TERM_LEN)?;

        let example = non_blank(self.example);
        if let Some(example) = &example {
            check_len("example", example, MAX_EXAMPLE_LEN)?;
        }

        let audio_url = non_blank(self.audio_url);
        if let Some(raw) = &audio_url {
            check_len("audio_url", raw, MAX_AUDIO_URL_LEN)?;
            Url::parse(raw).map_err(|e| VocabularyError::InvalidAudioUrl(e.to_string()))?;
        }

        Ok(NewVocabulary {
            english,
            vietnamese,
            example,
            audio_url,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), VocabularyError> {
    if value.chars().count() > max {
        return Err(VocabularyError::TooLong { field, max });
    }
    Ok(())
}

/// A validated vocabulary entry that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVocabulary {
    pub english: String,
    pub vietnamese: String,
    pub example: Option<String>,
    pub audio_url: Option<String>,
}

impl NewVocabulary {
    #[must_use]
    pub fn assign_id(self, id: VocabularyId) -> Vocabulary {
        Vocabulary {
            id,
            english: self.english,
            vietnamese: self.vietnamese,
            example: self.example,
            audio_url: self.audio_url,
        }
    }
}

//
// ─── VOCABULARY ────────────────────────────────────────────────────────────────
//

/// A bilingual word or phrase with an example sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    id: VocabularyId,
    english: String,
    vietnamese: String,
    example: Option<String>,
    audio_url: Option<String>,
}

impl Vocabulary {
    /// Rehydrate an entry from storage without re-running validation.
    #[must_use]
    pub fn from_persisted(
        id: VocabularyId,
        english: String,
        vietnamese: String,
        example: Option<String>,
        audio_url: Option<String>,
    ) -> Self {
        Self {
            id,
            english,
            vietnamese,
            example,
            audio_url,
        }
    }

    #[must_use]
    pub fn id(&self) -> VocabularyId {
        self.id
    }

    #[must_use]
    pub fn english(&self) -> &str {
        &self.english
    }

    #[must_use]
    pub fn vietnamese(&self) -> &str {
        &self.vietnamese
    }

    #[must_use]
    pub fn example(&self) -> Option<&str> {
        self.example.as_deref()
    }

    #[must_use]
    pub fn audio_url(&self) -> Option<&str> {
        self.audio_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_trims_terms_and_drops_blank_example() {
        let entry = VocabularyDraft::new("  apple ", "quả táo")
            .with_example("   ")
            .validate()
            .unwrap();
        assert_eq!(entry.english, "apple");
        assert_eq!(entry.example, None);
    }

    #[test]
    fn draft_requires_both_terms() {
        let err = VocabularyDraft::new(" ", "mèo").validate().unwrap_err();
        assert_eq!(err, VocabularyError::EmptyEnglish);

        let err = VocabularyDraft::new("cat", "").validate().unwrap_err();
        assert_eq!(err, VocabularyError::EmptyVietnamese);
    }

    #[test]
    fn length_limit_counts_characters_not_bytes() {
        // 100 multi-byte characters fit; 101 do not.
        let ok = "ă".repeat(MAX_TERM_LEN);
        assert!(VocabularyDraft::new("word", ok).validate().is_ok());

        let too_long = "ă".repeat(MAX_TERM_LEN + 1);
        let err = VocabularyDraft::new("word", too_long).validate().unwrap_err();
        assert!(matches!(err, VocabularyError::TooLong { field: "vietnamese", .. }));
    }

    #[test]
    fn audio_url_must_parse() {
        let err = VocabularyDraft::new("dog", "con chó")
            .with_audio_url("not a url")
            .validate()
            .unwrap_err();
        assert!(matches!(err, VocabularyError::InvalidAudioUrl(_)));

        let entry = VocabularyDraft::new("dog", "con chó")
            .with_audio_url("https://example.com/dog.mp3")
            .validate()
            .unwrap()
            .assign_id(VocabularyId::new(4));
        assert_eq!(entry.audio_url(), Some("https://example.com/dog.mp3"));
        assert_eq!(entry.id(), VocabularyId::new(4));
    }
}
