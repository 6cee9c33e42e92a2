use thiserror::Error;

use crate::model::ids::UserId;

pub const MAX_USERNAME_LEN: usize = 64;
pub const MAX_EMAIL_LEN: usize = 120;
pub const MAX_PASSWORD_HASH_LEN: usize = 256;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserError {
    #[error("username cannot be empty")]
    EmptyUsername,

    #[error("email must contain '@'")]
    InvalidEmail,

    #[error("{field} exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// A registered account. No route authenticates against it yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Option<UserId>,
    username: String,
    email: String,
    password_hash: Option<String>,
}

impl User {
    /// Build a user that has not been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `UserError` if the username is blank, the email is not
    /// plausible, or a field is over its column limit.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: Option<String>,
    ) -> Result<Self, UserError> {
        let username = username.into().trim().to_owned();
        if username.is_empty() {
            return Err(UserError::EmptyUsername);
        }
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(UserError::TooLong {
                field: "username",
                max: MAX_USERNAME_LEN,
            });
        }

        let email = email.into().trim().to_owned();
        if !email.contains('@') {
            return Err(UserError::InvalidEmail);
        }
        if email.chars().count() > MAX_EMAIL_LEN {
            return Err(UserError::TooLong {
                field: "email",
                max: MAX_EMAIL_LEN,
            });
        }

        if password_hash
            .as_deref()
            .is_some_and(|h| h.chars().count() > MAX_PASSWORD_HASH_LEN)
        {
            return Err(UserError::TooLong {
                field: "password_hash",
                max: MAX_PASSWORD_HASH_LEN,
            });
        }

        Ok(Self {
            id: None,
            username,
            email,
            password_hash,
        })
    }

    #[must_use]
    pub fn from_persisted(
        id: UserId,
        username: String,
        email: String,
        password_hash: Option<String>,
    ) -> Self {
        Self {
            id: Some(id),
            username,
            email,
            password_hash,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password_hash(&self) -> Option<&str> {
        self.password_hash.as_deref()
    }
}
