//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thiserror::Error;
use tower_cookies::Key;

pub const DEFAULT_DB_URL: &str = "sqlite://annie.db";
pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// Minimum secret length accepted for signing session cookies.
pub const MIN_SECRET_LEN: usize = 64;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid --db value: {raw}")]
    InvalidDbUrl { raw: String },
    #[error("session secret must be at least 64 bytes, got {len}")]
    SecretTooShort { len: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Parser)]
#[command(
    name = "annie",
    version,
    about = "English vocabulary, exercises and quizzes for Vietnamese speakers"
)]
pub struct Cli {
    /// SQLite database URL (falls back to DATABASE_URL)
    #[arg(long = "db", env = "ANNIE_DB_URL", global = true, value_name = "URL")]
    pub db_url: Option<String>,

    /// Address to listen on
    #[arg(long, env = "ANNIE_BIND", global = true, default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Secret used to sign session cookies (at least 64 bytes)
    #[arg(long, env = "SESSION_SECRET", global = true, hide_env_values = true)]
    pub session_secret: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the web server (default)
    #[default]
    Serve,
    /// Create tables and load built-in content, then exit
    Seed,
}

impl Cli {
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.unwrap_or_default()
    }

    /// Resolve the database URL from `--db`, then `fallback`, then the default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDbUrl` if `--db` was given but is blank.
    pub fn database_url(&self, fallback: Option<String>) -> Result<String, ConfigError> {
        match self.db_url.as_deref() {
            Some(raw) if raw.trim().is_empty() => Err(ConfigError::InvalidDbUrl {
                raw: raw.to_owned(),
            }),
            Some(raw) => Ok(normalize_sqlite_url(raw.to_owned())),
            None => Ok(fallback
                .filter(|url| !url.trim().is_empty())
                .map_or_else(|| DEFAULT_DB_URL.to_owned(), normalize_sqlite_url)),
        }
    }

    /// Signing key for session cookies.
    ///
    /// Returns `None` when no secret is configured; callers generate a random
    /// key in that case.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::SecretTooShort` for secrets under 64 bytes.
    pub fn session_key(&self) -> Result<Option<Key>, ConfigError> {
        let Some(secret) = self.session_secret.as_deref() else {
            return Ok(None);
        };
        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::SecretTooShort { len: secret.len() });
        }
        Ok(Some(Key::from(secret.as_bytes())))
    }
}

/// Turn `sqlite:relative.db` or a bare path into an absolute `sqlite://` URL.
#[must_use]
pub fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

/// Create the database file and its parent directories if missing.
///
/// # Errors
///
/// Returns `ConfigError::InvalidDbUrl` for URLs without a file path and
/// `ConfigError::Io` if the file cannot be created.
pub fn prepare_sqlite_file(db_url: &str) -> Result<(), ConfigError> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ConfigError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ConfigError::InvalidDbUrl {
            raw: db_url.to_string(),
        });
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("annie").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = parse(&["--db", "sqlite://x.db"]);
        assert_eq!(cli.command(), Command::Serve);
        assert_eq!(parse(&["seed"]).command(), Command::Seed);
    }

    #[test]
    fn flags_work_after_the_subcommand() {
        let cli = parse(&["serve", "--bind", "127.0.0.1:9000"]);
        assert_eq!(cli.bind, "127.0.0.1:9000".parse().unwrap());
    }

    #[test]
    fn db_flag_wins_over_fallback() {
        let cli = parse(&["--db", "sqlite://flag.db"]);
        let url = cli.database_url(Some("sqlite://env.db".into())).unwrap();
        assert_eq!(url, "sqlite://flag.db");
    }

    #[test]
    fn blank_fallback_uses_default() {
        let cli = Cli {
            db_url: None,
            bind: DEFAULT_BIND.parse().unwrap(),
            session_secret: None,
            command: None,
        };
        assert_eq!(cli.database_url(Some("  ".into())).unwrap(), DEFAULT_DB_URL);
        assert_eq!(cli.database_url(None).unwrap(), DEFAULT_DB_URL);
    }

    #[test]
    fn relative_paths_become_absolute() {
        let url = normalize_sqlite_url("sqlite:data/annie.db".into());
        assert!(url.starts_with("sqlite:///"), "{url}");
        assert!(url.ends_with("data/annie.db"), "{url}");
        assert_eq!(normalize_sqlite_url("sqlite::memory:".into()), "sqlite::memory:");
    }

    #[test]
    fn short_secret_is_rejected() {
        let cli = Cli {
            db_url: None,
            bind: DEFAULT_BIND.parse().unwrap(),
            session_secret: Some("short".into()),
            command: None,
        };
        assert!(matches!(
            cli.session_key(),
            Err(ConfigError::SecretTooShort { len: 5 })
        ));
    }

    #[test]
    fn long_secret_yields_key() {
        let cli = Cli {
            db_url: None,
            bind: DEFAULT_BIND.parse().unwrap(),
            session_secret: Some("k".repeat(MIN_SECRET_LEN)),
            command: None,
        };
        assert!(cli.session_key().unwrap().is_some());
    }

    #[test]
    fn prepare_rejects_urls_without_path() {
        assert!(prepare_sqlite_file("sqlite::memory:").is_ok());
        assert!(matches!(
            prepare_sqlite_file("postgres://nope"),
            Err(ConfigError::InvalidDbUrl { .. })
        ));
        assert!(matches!(
            prepare_sqlite_file("sqlite://"),
            Err(ConfigError::InvalidDbUrl { .. })
        ));
    }
}
