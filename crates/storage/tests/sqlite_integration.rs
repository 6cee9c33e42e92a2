use annie_core::model::{
    Difficulty, Progress, QuestionDraft, QuestionId, QuestionKind, User, UserId, VocabularyDraft,
};
use annie_core::time::fixed_now;
use storage::repository::{
    ProgressRepository, QuestionRepository, StorageError, UserRepository, VocabularyRepository,
};
use storage::sqlite::SqliteRepository;

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn sqlite_roundtrips_vocabulary_in_id_order() {
    let repo = connect("memdb_vocab").await;
    assert_eq!(repo.count_vocabulary().await.unwrap(), 0);

    let entries = vec![
        VocabularyDraft::new("apple", "quả táo")
            .with_example("I eat an apple every day.")
            .validate()
            .unwrap(),
        VocabularyDraft::new("hello", "xin chào")
            .with_audio_url("https://example.com/hello.mp3")
            .validate()
            .unwrap(),
    ];
    repo.insert_vocabulary(&entries).await.unwrap();

    let listed = repo.list_vocabulary().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].english(), "apple");
    assert_eq!(listed[0].example(), Some("I eat an apple every day."));
    assert_eq!(listed[0].audio_url(), None);
    assert_eq!(listed[1].vietnamese(), "xin chào");
    assert_eq!(listed[1].audio_url(), Some("https://example.com/hello.mp3"));
    assert_eq!(repo.count_vocabulary().await.unwrap(), 2);
}

#[tokio::test]
async fn sqlite_keeps_exercises_and_quizzes_apart() {
    let repo = connect("memdb_questions").await;

    let exercise = QuestionDraft::new(
        QuestionKind::Exercise,
        "Complete: 'Hello, ____ are you?'",
        "how",
        &["how", "what", "where", "why"],
    )
    .with_difficulty(Difficulty::Easy)
    .validate()
    .unwrap();
    let quiz = QuestionDraft::new(
        QuestionKind::Quiz,
        "Which word means 'thức ăn'?",
        "food",
        &["food", "drink", "water", "meal"],
    )
    .validate()
    .unwrap();
    repo.insert_questions(&[exercise, quiz]).await.unwrap();

    assert_eq!(repo.count_questions(QuestionKind::Exercise).await.unwrap(), 1);
    assert_eq!(repo.count_questions(QuestionKind::Quiz).await.unwrap(), 1);

    let exercises = repo.list_questions(QuestionKind::Exercise).await.unwrap();
    assert_eq!(exercises[0].kind(), QuestionKind::Exercise);
    assert_eq!(exercises[0].difficulty(), Some(Difficulty::Easy));
    assert_eq!(
        exercises[0].options().as_slice(),
        ["how", "what", "where", "why"]
    );

    let found = repo
        .get_questions(QuestionKind::Quiz, &[QuestionId::new(1), QuestionId::new(42)])
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].answer(), "food");
    assert_eq!(found[0].difficulty(), None);

    let none = repo.get_questions(QuestionKind::Quiz, &[]).await.unwrap();
    assert!(none.is_empty());
}

async fn seed_quizzes(repo: &SqliteRepository, answers: &[&str]) {
    let drafts: Vec<_> = answers
        .iter()
        .map(|answer| {
            QuestionDraft::new(
                QuestionKind::Quiz,
                format!("Pick {answer}"),
                *answer,
                &[*answer, "other"],
            )
            .validate()
            .unwrap()
        })
        .collect();
    repo.insert_questions(&drafts).await.unwrap();
}

#[tokio::test]
async fn sqlite_lookup_ignores_ids_beyond_i64() {
    let repo = connect("memdb_huge_ids").await;
    seed_quizzes(&repo, &["cat"]).await;

    let found = repo
        .get_questions(
            QuestionKind::Quiz,
            &[
                QuestionId::new(u64::MAX),
                QuestionId::new(1),
                QuestionId::new(i64::MAX as u64 + 1),
            ],
        )
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].answer(), "cat");

    let none = repo
        .get_questions(QuestionKind::Quiz, &[QuestionId::new(u64::MAX)])
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn sqlite_lookup_handles_more_ids_than_sqlite_variables() {
    let repo = connect("memdb_many_ids").await;
    seed_quizzes(&repo, &["cat", "dog", "fish"]).await;

    let ids: Vec<QuestionId> = (1..=40_000).map(QuestionId::new).collect();
    let found = repo.get_questions(QuestionKind::Quiz, &ids).await.unwrap();
    let answers: Vec<&str> = found.iter().map(|q| q.answer()).collect();
    assert_eq!(answers, ["cat", "dog", "fish"]);
}

#[tokio::test]
async fn sqlite_users_and_progress() {
    let repo = connect("memdb_users").await;

    let user = User::new("annie", "annie@example.com", Some("hash".into())).unwrap();
    let user_id = repo.insert_user(&user).await.unwrap();

    let dup = User::new("annie", "second@example.com", None).unwrap();
    assert!(matches!(
        repo.insert_user(&dup).await,
        Err(StorageError::Conflict)
    ));

    let found = repo.find_user_by_username("annie").await.unwrap().unwrap();
    assert_eq!(found.id(), Some(user_id));
    assert_eq!(found.password_hash(), Some("hash"));
    assert!(repo.find_user_by_username("nobody").await.unwrap().is_none());

    let mut progress = Progress::new(user_id, fixed_now());
    progress.exercises_completed = 2;
    let first = repo.upsert_progress(&progress).await.unwrap();
    progress.vocabulary_mastered = 12;
    let second = repo.upsert_progress(&progress).await.unwrap();
    assert_eq!(first, second);

    let stored = repo.progress_for_user(user_id).await.unwrap().unwrap();
    assert_eq!(stored.exercises_completed, 2);
    assert_eq!(stored.vocabulary_mastered, 12);
    assert_eq!(stored.last_activity, fixed_now());

    let orphan = Progress::new(UserId::new(999), fixed_now());
    assert!(matches!(
        repo.upsert_progress(&orphan).await,
        Err(StorageError::NotFound)
    ));
}

#[tokio::test]
async fn sqlite_migrations_are_idempotent() {
    let repo = connect("memdb_migrate_twice").await;
    repo.migrate().await.expect("second migrate");
    assert_eq!(repo.count_vocabulary().await.unwrap(), 0);
}
