//! Per-visitor progress kept in a signed cookie.
//!
//! The cookie value is the JSON form of [`SessionProgress`], base64url
//! encoded so stored answers cannot break the cookie grammar.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies, Key};
use tracing::warn;

use services::SessionProgress;

use crate::error::AppError;

pub const SESSION_COOKIE: &str = "annie_session";

/// Read the visitor's progress.
///
/// A missing cookie is an empty session. So is a cookie with a bad signature
/// or an undecodable payload; those are logged and otherwise ignored.
#[must_use]
pub fn load_progress(cookies: &Cookies, key: &Key) -> SessionProgress {
    let Some(cookie) = cookies.signed(key).get(SESSION_COOKIE) else {
        if cookies.get(SESSION_COOKIE).is_some() {
            warn!("discarding session cookie with invalid signature");
        }
        return SessionProgress::default();
    };

    match decode(cookie.value()) {
        Ok(progress) => progress,
        Err(reason) => {
            warn!(%reason, "discarding undecodable session cookie");
            SessionProgress::default()
        }
    }
}

/// Replace the visitor's progress.
///
/// # Errors
///
/// Returns `AppError::Session` if the progress cannot be serialized.
pub fn store_progress(
    cookies: &Cookies,
    key: &Key,
    progress: &SessionProgress,
) -> Result<(), AppError> {
    let json = serde_json::to_vec(progress)?;
    let mut cookie = Cookie::new(SESSION_COOKIE, URL_SAFE_NO_PAD.encode(json));
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookies.signed(key).add(cookie);
    Ok(())
}

fn decode(value: &str) -> Result<SessionProgress, String> {
    let bytes = URL_SAFE_NO_PAD
        .decode(value)
        .map_err(|e| e.to_string())?;
    serde_json::from_slice(&bytes).map_err(|e| e.to_string())
}
