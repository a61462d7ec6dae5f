use thiserror::Error;

/// Failure while deriving or checking a credential hash.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    /// Cost parameters rejected or input beyond what the algorithm accepts.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored hash could not be parsed.
    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
