use axum::extract::{Form, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Redirect};
use tower_cookies::Cookies;
use tracing::{error, info};

use annie_core::model::QuestionKind;
use ui::assets::{SCRIPT_JS, STYLE_CSS};
use ui::vm::{PracticePageVm, PronunciationVm, VocabularyPageVm, map_progress};
use ui::{Page, render_page};

use crate::error::AppError;
use crate::session;
use crate::state::AppState;

/// Raw `application/x-www-form-urlencoded` pairs in submission order.
type AnswerForm = Form<Vec<(String, String)>>;

pub async fn home() -> Html<String> {
    Html(render_page(Page::Home))
}

pub async fn vocabulary(State(state): State<AppState>) -> Html<String> {
    let vm = match state.services().vocabulary().list_vocabulary().await {
        Ok(words) => VocabularyPageVm::loaded(&words),
        Err(err) => {
            error!(error = %err, "failed to load vocabulary");
            VocabularyPageVm::unavailable()
        }
    };
    Html(render_page(Page::Vocabulary(vm)))
}

pub async fn exercises(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let vm = practice_page(&state, QuestionKind::Exercise).await?;
    Ok(Html(render_page(Page::Exercises(vm))))
}

pub async fn quiz(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let vm = practice_page(&state, QuestionKind::Quiz).await?;
    Ok(Html(render_page(Page::Quiz(vm))))
}

async fn practice_page(state: &AppState, kind: QuestionKind) -> Result<PracticePageVm, AppError> {
    let items = state.services().practice().practice_set(kind).await?;
    Ok(PracticePageVm::from_items(kind, &items))
}

pub async fn check_exercise(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(fields): AnswerForm,
) -> Result<Redirect, AppError> {
    check(&state, &cookies, QuestionKind::Exercise, fields).await
}

pub async fn check_quiz(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(fields): AnswerForm,
) -> Result<Redirect, AppError> {
    check(&state, &cookies, QuestionKind::Quiz, fields).await
}

async fn check(
    state: &AppState,
    cookies: &Cookies,
    kind: QuestionKind,
    fields: Vec<(String, String)>,
) -> Result<Redirect, AppError> {
    let result = state
        .services()
        .practice()
        .check_answers(kind, fields)
        .await?;
    info!(
        kind = %kind,
        correct = result.correct,
        total = result.total,
        "recorded result"
    );

    let mut progress = session::load_progress(cookies, state.key());
    progress.record(kind, result);
    session::store_progress(cookies, state.key(), &progress)?;
    Ok(Redirect::to("/progress"))
}

pub async fn exercises_redirect() -> Redirect {
    Redirect::to("/exercises")
}

pub async fn quiz_redirect() -> Redirect {
    Redirect::to("/quiz")
}

pub async fn progress(State(state): State<AppState>, cookies: Cookies) -> Html<String> {
    let progress = session::load_progress(&cookies, state.key());
    Html(render_page(Page::Progress(map_progress(&progress))))
}

pub async fn pronunciation(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let set = state.services().vocabulary().pronunciation_set().await?;
    Ok(Html(render_page(Page::Pronunciation(PronunciationVm::from(&set)))))
}

pub async fn resources() -> Html<String> {
    Html(render_page(Page::Resources))
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}

pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}

pub async fn fallback(uri: Uri) -> (StatusCode, Html<String>) {
    let page = Page::NotFound {
        path: uri.path().to_owned(),
    };
    (StatusCode::NOT_FOUND, Html(render_page(page)))
}
