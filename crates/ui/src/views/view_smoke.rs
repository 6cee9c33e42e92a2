use annie_core::model::{GradeDetail, GradeResult, QuestionId, QuestionKind};
use annie_core::time::fixed_now;
use services::{AppServices, Clock, PronunciationSet, SessionProgress};
use storage::repository::Storage;

use crate::render::{Page, render_page};
use crate::vm::{
    PracticePageVm, PronunciationVm, VOCABULARY_LOAD_ERROR, VocabularyPageVm, map_progress,
};

async fn seeded_services() -> AppServices {
    AppServices::from_storage(Storage::in_memory(), Clock::fixed(fixed_now()))
        .await
        .expect("seed in-memory storage")
}

#[test]
fn home_page_renders_navigation() {
    let html = render_page(Page::Home);
    assert!(html.starts_with("<!DOCTYPE html>"), "missing doctype in {html}");
    assert!(html.contains("href=\"/vocabulary\""), "missing nav in {html}");
    assert!(html.contains("/static/style.css"), "missing stylesheet in {html}");
    assert!(html.contains("nav-link active"), "missing active nav in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn vocabulary_page_lists_seeded_words() {
    let services = seeded_services().await;
    let words = services.vocabulary().list_vocabulary().await.unwrap();

    let html = render_page(Page::Vocabulary(VocabularyPageVm::loaded(&words)));
    assert!(html.contains("apple"), "missing word in {html}");
    assert!(html.contains("quả táo"), "missing translation in {html}");
    assert!(html.contains("vocabularySearch"), "missing search box in {html}");
    assert!(html.contains("data-word=\"apple\""), "missing audio button in {html}");
}

#[test]
fn vocabulary_page_shows_load_error() {
    let html = render_page(Page::Vocabulary(VocabularyPageVm::unavailable()));
    assert!(html.contains(VOCABULARY_LOAD_ERROR), "missing error in {html}");
    assert!(!html.contains("vocab-item"), "unexpected words in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exercise_page_posts_named_inputs() {
    let services = seeded_services().await;
    let items = services
        .practice()
        .practice_set(QuestionKind::Exercise)
        .await
        .unwrap();
    let vm = PracticePageVm::from_items(QuestionKind::Exercise, &items);
    let first = vm.questions[0].field_name.clone();

    let html = render_page(Page::Exercises(vm));
    assert!(html.contains("action=\"/check_exercise\""), "missing action in {html}");
    assert!(html.contains(&format!("name=\"{first}\"")), "missing {first} in {html}");
    assert_eq!(html.matches("class=\"exercise-question\"").count(), 10);
    assert_eq!(html.matches("class=\"answer hidden\"").count(), 10);
    assert!(html.contains("id=\"showAnswersBtn\""), "missing reveal button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_page_renders_radio_groups() {
    let services = seeded_services().await;
    let items = services
        .practice()
        .practice_set(QuestionKind::Quiz)
        .await
        .unwrap();
    let option_count: usize = items.iter().map(|item| item.options.len()).sum();

    let html = render_page(Page::Quiz(PracticePageVm::from_items(QuestionKind::Quiz, &items)));
    assert!(html.contains("action=\"/check_quiz\""), "missing action in {html}");
    assert!(html.contains("quizForm"), "missing form id in {html}");
    assert_eq!(html.matches("type=\"radio\"").count(), option_count);
    let first_answer = format!("Đáp án: {}", items[0].question.answer());
    assert!(html.contains(&first_answer), "missing {first_answer} in {html}");
    assert!(html.contains("Xem đáp án"), "missing reveal button in {html}");
}

#[test]
fn empty_bank_renders_placeholder() {
    let html = render_page(Page::Quiz(PracticePageVm::from_items(QuestionKind::Quiz, &[])));
    assert!(html.contains("No questions available yet."), "missing placeholder in {html}");
    assert!(!html.contains("<form"), "unexpected form in {html}");
}

#[test]
fn progress_page_shows_scores_and_details() {
    let mut progress = SessionProgress::default();
    progress.record(
        QuestionKind::Exercise,
        GradeResult::from_details(
            vec![GradeDetail {
                id: QuestionId::new(1),
                correct: true,
                answer: "how".to_owned(),
            }],
            Some(fixed_now()),
        ),
    );

    let html = render_page(Page::Progress(map_progress(&progress)));
    assert!(html.contains("100.0%"), "missing percentage in {html}");
    assert!(html.contains("1/1 correct"), "missing tally in {html}");
    assert!(html.contains("Not attempted yet."), "missing quiz placeholder in {html}");
    assert!(html.contains("2023-11-14 22:13 UTC"), "missing timestamp in {html}");
}

#[test]
fn progress_page_without_activity_invites_practice() {
    let html = render_page(Page::Progress(map_progress(&SessionProgress::default())));
    assert!(html.contains("0.0%"), "missing zero score in {html}");
    assert!(html.contains("Try an exercise"), "missing invitation in {html}");
}

#[test]
fn pronunciation_page_falls_back_to_hello() {
    let set = PronunciationSet {
        current_word: "Hello".to_owned(),
        daily_words: Vec::new(),
    };
    let html = render_page(Page::Pronunciation(PronunciationVm::from(&set)));
    assert!(html.contains("Hello"), "missing word in {html}");
}

#[test]
fn resources_and_status_pages_render() {
    let html = render_page(Page::Resources);
    assert!(html.contains("BBC Learning English"), "missing resource in {html}");

    let html = render_page(Page::NotFound {
        path: "/nope".to_owned(),
    });
    assert!(html.contains("404"), "missing status in {html}");
    assert!(html.contains("/nope"), "missing path in {html}");

    let html = render_page(Page::Error {
        status: 500,
        message: "Something went wrong.".to_owned(),
    });
    assert!(html.contains("Something went wrong."), "missing message in {html}");
}
