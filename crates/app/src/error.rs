use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use services::{PracticeServiceError, VocabularyServiceError};
use ui::{Page, render_page};

const GENERIC_MESSAGE: &str = "Đã xảy ra lỗi. Vui lòng thử lại. · Something went wrong. Please try again.";

/// Failures surfaced by request handlers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error(transparent)]
    Practice(#[from] PracticeServiceError),
    #[error(transparent)]
    Vocabulary(#[from] VocabularyServiceError),
    #[error("session encoding failed: {0}")]
    Session(#[from] serde_json::Error),
}

impl AppError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Practice(PracticeServiceError::Grade(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_client_error() {
            self.to_string()
        } else {
            error!(error = %self, "request failed");
            GENERIC_MESSAGE.to_owned()
        };
        let page = Page::Error {
            status: status.as_u16(),
            message,
        };
        (status, Html(render_page(page))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annie_core::model::{GradeError, QuestionKind};
    use storage::repository::StorageError;

    #[test]
    fn malformed_answers_are_client_errors() {
        let err = AppError::from(PracticeServiceError::from(GradeError::MalformedKey {
            kind: QuestionKind::Quiz,
            key: "quiz_x".into(),
        }));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_failures_are_server_errors() {
        let err = AppError::from(VocabularyServiceError::from(StorageError::Connection(
            "down".into(),
        )));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
