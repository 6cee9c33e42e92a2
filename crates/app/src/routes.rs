use axum::Router;
use axum::routing::{get, post};
use tower_cookies::CookieManagerLayer;

use crate::handlers;
use crate::state::AppState;

/// All pages, form targets and static assets.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/vocabulary", get(handlers::vocabulary))
        .route("/exercises", get(handlers::exercises))
        .route("/quiz", get(handlers::quiz))
        .route(
            "/check_exercise",
            post(handlers::check_exercise).get(handlers::exercises_redirect),
        )
        .route(
            "/check_quiz",
            post(handlers::check_quiz).get(handlers::quiz_redirect),
        )
        .route("/progress", get(handlers::progress))
        .route("/pronunciation", get(handlers::pronunciation))
        .route("/resources", get(handlers::resources))
        .route("/static/style.css", get(handlers::stylesheet))
        .route("/static/script.js", get(handlers::script))
        .fallback(handlers::fallback)
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
