use services::AppServices;
use tower_cookies::Key;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    services: AppServices,
    key: Key,
}

impl AppState {
    #[must_use]
    pub fn new(services: AppServices, key: Key) -> Self {
        Self { services, key }
    }

    #[must_use]
    pub fn services(&self) -> &AppServices {
        &self.services
    }

    /// Key used to sign the session cookie.
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }
}
