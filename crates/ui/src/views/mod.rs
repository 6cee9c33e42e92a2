mod home;
mod layout;
mod practice;
mod progress;
mod pronunciation;
mod resources;
mod status;
mod vocabulary;

#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use layout::{Layout, NAV_LINKS};
pub use practice::PracticeView;
pub use progress::ProgressView;
pub use pronunciation::PronunciationView;
pub use resources::{RESOURCES, ResourcesView};
pub use status::{ErrorView, NotFoundView};
pub use vocabulary::{AudioButton, VocabularyItem, VocabularyView};
