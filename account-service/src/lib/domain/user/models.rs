use std::fmt;

use auth::password::MAX_PASSWORD_BYTES;
use chrono::DateTime;
use chrono::Utc;

use crate::user::errors::CredentialsError;

/// User aggregate entity.
///
/// `password_hash` always holds a hash produced by the credential hasher,
/// never the submitted secret.
#[derive(Clone)]
pub struct User {
    pub id: UserId,
    pub login: Login,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("login", &self.login)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// User to be inserted; the repository assigns the identifier.
#[derive(Clone)]
pub struct NewUser {
    pub login: Login,
    pub password_hash: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("login", &self.login)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// User unique identifier, assigned by persistence on creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Login value type
///
/// Any non-empty string. No trimming or case folding is applied, so
/// `" alice"` and `"Alice"` are distinct logins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Login(String);

impl Login {
    /// Create a new login.
    ///
    /// # Errors
    /// * `EmptyField` - Login is empty
    pub fn new(login: String) -> Result<Self, CredentialsError> {
        if login.is_empty() {
            return Err(CredentialsError::EmptyField);
        }
        Ok(Self(login))
    }

    /// Get login as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated login and plaintext password pair.
///
/// Lives only for the duration of one registration or login request.
/// The password is never persisted and is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    login: Login,
    password: String,
}

impl Credentials {
    /// Validate a raw login/password pair.
    ///
    /// Both values are returned unchanged on success.
    ///
    /// # Errors
    /// * `EmptyField` - Login or password is empty
    /// * `PasswordTooLong` - Password is longer than the hasher accepts
    pub fn new(login: String, password: String) -> Result<Self, CredentialsError> {
        if login.is_empty() || password.is_empty() {
            return Err(CredentialsError::EmptyField);
        }

        let length = password.len();
        if length > MAX_PASSWORD_BYTES {
            return Err(CredentialsError::PasswordTooLong {
                max: MAX_PASSWORD_BYTES,
                actual: length,
            });
        }

        Ok(Self {
            login: Login(login),
            password,
        })
    }

    pub fn login(&self) -> &Login {
        &self.login
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Drop the password and keep the login.
    pub fn into_login(self) -> Login {
        self.login
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}
