use crate::domain::user::ports::CredentialHasher;
use crate::user::errors::PasswordError;

impl CredentialHasher for auth::PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        auth::PasswordHasher::hash(self, password).map_err(PasswordError::from)
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        auth::PasswordHasher::verify(self, password, hash).map_err(PasswordError::from)
    }
}

impl From<auth::PasswordError> for PasswordError {
    fn from(err: auth::PasswordError) -> Self {
        match err {
            auth::PasswordError::HashingFailed(msg) => PasswordError::HashingFailed(msg),
            auth::PasswordError::VerificationFailed(msg) => PasswordError::VerificationFailed(msg),
        }
    }
}
