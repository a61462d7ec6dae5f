use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::ports::CredentialHasher;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for registration and authentication.
///
/// Holds no mutable state; every call works only with the repository and
/// the hasher it was given.
pub struct UserService<UR, CH>
where
    UR: UserRepository,
    CH: CredentialHasher,
{
    repository: Arc<UR>,
    hasher: Arc<CH>,
}

impl<UR, CH> UserService<UR, CH>
where
    UR: UserRepository,
    CH: CredentialHasher,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `hasher` - Password hashing implementation
    pub fn new(repository: Arc<UR>, hasher: Arc<CH>) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl<UR, CH> UserServicePort for UserService<UR, CH>
where
    UR: UserRepository,
    CH: CredentialHasher,
{
    async fn register(&self, credentials: Credentials) -> Result<User, UserError> {
        if self.repository.exists_by_login(credentials.login()).await? {
            tracing::info!(login = %credentials.login(), "Registration rejected: login taken");
            return Err(UserError::LoginAlreadyExists(
                credentials.login().to_string(),
            ));
        }

        let password_hash = self.hasher.hash(credentials.password())?;

        // A concurrent registration can still win the race after the check
        // above; the repository reports that as LoginAlreadyExists too.
        let user = self
            .repository
            .create(NewUser {
                login: credentials.into_login(),
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    async fn authenticate(&self, credentials: Credentials) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_login(credentials.login())
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        match self.hasher.verify(credentials.password(), &user.password_hash) {
            Ok(true) => Ok(user),
            Ok(false) => Err(UserError::InvalidCredentials),
            Err(e) => {
                tracing::error!(user_id = %user.id, error = %e, "Stored password hash is unusable");
                Err(UserError::InvalidCredentials)
            }
        }
    }
}
