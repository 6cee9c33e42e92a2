use async_trait::async_trait;
use annie_core::model::{
    NewQuestion, NewVocabulary, Progress, ProgressId, Question, QuestionId, QuestionKind, User,
    UserId, Vocabulary, VocabularyId,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Read access to the bilingual word list, plus bulk insert for seeding.
#[async_trait]
pub trait VocabularyRepository: Send + Sync {
    /// Insert validated entries, assigning ids in order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the entries cannot be stored.
    async fn insert_vocabulary(&self, entries: &[NewVocabulary]) -> Result<usize, StorageError>;

    /// List every entry ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn list_vocabulary(&self) -> Result<Vec<Vocabulary>, StorageError>;

    /// Number of stored entries.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn count_vocabulary(&self) -> Result<u64, StorageError>;
}

/// Exercise and quiz banks. Each `QuestionKind` is a separate id space.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Insert validated questions into the bank named by each question's kind.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if any question cannot be stored; nothing is
    /// inserted in that case.
    async fn insert_questions(&self, questions: &[NewQuestion]) -> Result<usize, StorageError>;

    /// List every question of `kind`, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn list_questions(&self, kind: QuestionKind) -> Result<Vec<Question>, StorageError>;

    /// Fetch the questions of `kind` with the given ids.
    ///
    /// Unknown ids are skipped rather than reported; callers decide how a
    /// missing question is graded.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn get_questions(
        &self,
        kind: QuestionKind,
        ids: &[QuestionId],
    ) -> Result<Vec<Question>, StorageError>;

    /// Number of questions of `kind`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn count_questions(&self, kind: QuestionKind) -> Result<u64, StorageError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the username or email is taken.
    async fn insert_user(&self, user: &User) -> Result<UserId, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;
}

#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Store counters for a user, replacing any previous row for that user.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the user does not exist or the write fails.
    async fn upsert_progress(&self, progress: &Progress) -> Result<ProgressId, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn progress_for_user(&self, user_id: UserId) -> Result<Option<Progress>, StorageError>;
}

fn lock_err<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

fn next_id(len: usize) -> u64 {
    u64::try_from(len).unwrap_or(u64::MAX - 1) + 1
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    vocabulary: Arc<Mutex<Vec<Vocabulary>>>,
    questions: Arc<Mutex<HashMap<QuestionKind, Vec<Question>>>>,
    users: Arc<Mutex<Vec<User>>>,
    progress: Arc<Mutex<HashMap<UserId, Progress>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VocabularyRepository for InMemoryRepository {
    async fn insert_vocabulary(&self, entries: &[NewVocabulary]) -> Result<usize, StorageError> {
        let mut guard = self.vocabulary.lock().map_err(lock_err)?;
        for entry in entries {
            let id = VocabularyId::new(next_id(guard.len()));
            guard.push(entry.clone().assign_id(id));
        }
        Ok(entries.len())
    }

    async fn list_vocabulary(&self) -> Result<Vec<Vocabulary>, StorageError> {
        let guard = self.vocabulary.lock().map_err(lock_err)?;
        Ok(guard.clone())
    }

    async fn count_vocabulary(&self) -> Result<u64, StorageError> {
        let guard = self.vocabulary.lock().map_err(lock_err)?;
        Ok(guard.len() as u64)
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn insert_questions(&self, questions: &[NewQuestion]) -> Result<usize, StorageError> {
        let mut guard = self.questions.lock().map_err(lock_err)?;
        for question in questions {
            let bank = guard.entry(question.kind).or_default();
            let id = QuestionId::new(next_id(bank.len()));
            bank.push(question.clone().assign_id(id));
        }
        Ok(questions.len())
    }

    async fn list_questions(&self, kind: QuestionKind) -> Result<Vec<Question>, StorageError> {
        let guard = self.questions.lock().map_err(lock_err)?;
        Ok(guard.get(&kind).cloned().unwrap_or_default())
    }

    async fn get_questions(
        &self,
        kind: QuestionKind,
        ids: &[QuestionId],
    ) -> Result<Vec<Question>, StorageError> {
        let guard = self.questions.lock().map_err(lock_err)?;
        let Some(bank) = guard.get(&kind) else {
            return Ok(Vec::new());
        };
        Ok(bank
            .iter()
            .filter(|q| ids.contains(&q.id()))
            .cloned()
            .collect())
    }

    async fn count_questions(&self, kind: QuestionKind) -> Result<u64, StorageError> {
        let guard = self.questions.lock().map_err(lock_err)?;
        Ok(guard.get(&kind).map_or(0, |bank| bank.len() as u64))
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn insert_user(&self, user: &User) -> Result<UserId, StorageError> {
        let mut guard = self.users.lock().map_err(lock_err)?;
        if guard
            .iter()
            .any(|u| u.username() == user.username() || u.email() == user.email())
        {
            return Err(StorageError::Conflict);
        }
        let id = UserId::new(next_id(guard.len()));
        guard.push(user.clone().with_id(id));
        Ok(id)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        let guard = self.users.lock().map_err(lock_err)?;
        Ok(guard.iter().find(|u| u.username() == username).cloned())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn upsert_progress(&self, progress: &Progress) -> Result<ProgressId, StorageError> {
        let known_user = self
            .users
            .lock()
            .map_err(lock_err)?
            .iter()
            .any(|u| u.id() == Some(progress.user_id));
        if !known_user {
            return Err(StorageError::NotFound);
        }

        let mut guard = self.progress.lock().map_err(lock_err)?;
        let id = match guard.get(&progress.user_id).and_then(|p| p.id) {
            Some(existing) => existing,
            None => ProgressId::new(next_id(guard.len())),
        };
        let mut stored = progress.clone();
        stored.id = Some(id);
        guard.insert(progress.user_id, stored);
        Ok(id)
    }

    async fn progress_for_user(&self, user_id: UserId) -> Result<Option<Progress>, StorageError> {
        let guard = self.progress.lock().map_err(lock_err)?;
        Ok(guard.get(&user_id).cloned())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub vocabulary: Arc<dyn VocabularyRepository>,
    pub questions: Arc<dyn QuestionRepository>,
    pub users: Arc<dyn UserRepository>,
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let vocabulary: Arc<dyn VocabularyRepository> = Arc::new(repo.clone());
        let questions: Arc<dyn QuestionRepository> = Arc::new(repo.clone());
        let users: Arc<dyn UserRepository> = Arc::new(repo.clone());
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo);
        Self {
            vocabulary,
            questions,
            users,
            progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annie_core::model::{QuestionDraft, VocabularyDraft};
    use annie_core::time::fixed_now;

    fn question(kind: QuestionKind, answer: &str) -> NewQuestion {
        QuestionDraft::new(kind, format!("Pick {answer}"), answer, &[answer, "other"])
            .validate()
            .unwrap()
    }

    #[tokio::test]
    async fn question_banks_have_separate_id_spaces() {
        let repo = InMemoryRepository::new();
        repo.insert_questions(&[
            question(QuestionKind::Exercise, "how"),
            question(QuestionKind::Quiz, "cat"),
            question(QuestionKind::Exercise, "are"),
        ])
        .await
        .unwrap();

        let exercises = repo.list_questions(QuestionKind::Exercise).await.unwrap();
        assert_eq!(exercises.len(), 2);
        assert_eq!(exercises[1].id(), QuestionId::new(2));

        let quizzes = repo.list_questions(QuestionKind::Quiz).await.unwrap();
        assert_eq!(quizzes[0].id(), QuestionId::new(1));
        assert_eq!(quizzes[0].answer(), "cat");
    }

    #[tokio::test]
    async fn get_questions_skips_unknown_ids() {
        let repo = InMemoryRepository::new();
        repo.insert_questions(&[question(QuestionKind::Quiz, "cat")])
            .await
            .unwrap();

        let found = repo
            .get_questions(QuestionKind::Quiz, &[QuestionId::new(1), QuestionId::new(7)])
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(repo.count_questions(QuestionKind::Exercise).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn vocabulary_ids_follow_insert_order() {
        let repo = InMemoryRepository::new();
        let entries = vec![
            VocabularyDraft::new("apple", "quả táo").validate().unwrap(),
            VocabularyDraft::new("book", "quyển sách").validate().unwrap(),
        ];
        repo.insert_vocabulary(&entries).await.unwrap();

        let listed = repo.list_vocabulary().await.unwrap();
        assert_eq!(listed[1].id(), VocabularyId::new(2));
        assert_eq!(listed[1].english(), "book");
        assert_eq!(repo.count_vocabulary().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn progress_requires_known_user_and_keeps_id() {
        let repo = InMemoryRepository::new();
        let orphan = Progress::new(UserId::new(5), fixed_now());
        assert!(matches!(
            repo.upsert_progress(&orphan).await,
            Err(StorageError::NotFound)
        ));

        let user = User::new("annie", "annie@example.com", None).unwrap();
        let user_id = repo.insert_user(&user).await.unwrap();
        let mut progress = Progress::new(user_id, fixed_now());
        let first = repo.upsert_progress(&progress).await.unwrap();
        progress.quizzes_completed = 3;
        let second = repo.upsert_progress(&progress).await.unwrap();
        assert_eq!(first, second);

        let stored = repo.progress_for_user(user_id).await.unwrap().unwrap();
        assert_eq!(stored.quizzes_completed, 3);
    }

    #[tokio::test]
    async fn duplicate_username_conflicts() {
        let repo = InMemoryRepository::new();
        let user = User::new("annie", "annie@example.com", None).unwrap();
        repo.insert_user(&user).await.unwrap();
        let again = User::new("annie", "other@example.com", None).unwrap();
        assert!(matches!(
            repo.insert_user(&again).await,
            Err(StorageError::Conflict)
        ));
    }
}
