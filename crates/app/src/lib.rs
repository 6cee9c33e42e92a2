#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod session;
pub mod state;

pub use config::{Cli, Command, ConfigError};
pub use error::AppError;
pub use routes::build_router;
pub use state::AppState;
