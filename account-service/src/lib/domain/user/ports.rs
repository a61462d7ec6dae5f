use async_trait::async_trait;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::Login;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::PasswordError;
use crate::user::errors::TokenError;
use crate::user::errors::UserError;

/// Port for account use cases.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `credentials` - Validated login and plaintext password
    ///
    /// # Returns
    /// Persisted user entity, including the assigned ID
    ///
    /// # Errors
    /// * `LoginAlreadyExists` - Login is already taken
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, credentials: Credentials) -> Result<User, UserError>;

    /// Check a login/password pair against the stored hash.
    ///
    /// # Arguments
    /// * `credentials` - Validated login and plaintext password
    ///
    /// # Returns
    /// Matching user entity
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown login, wrong password or unusable stored hash
    /// * `DatabaseError` - Database operation failed
    async fn authenticate(&self, credentials: Credentials) -> Result<User, UserError>;
}

/// Persistence operations for user aggregate.
///
/// Implementations own uniqueness of `login`; a concurrent duplicate insert
/// must surface as `LoginAlreadyExists` from `create`.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Arguments
    /// * `user` - User to insert
    ///
    /// # Returns
    /// Created user entity with its assigned ID
    ///
    /// # Errors
    /// * `LoginAlreadyExists` - Uniqueness constraint on login violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Check whether a login is taken.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn exists_by_login(&self, login: &Login) -> Result<bool, UserError>;

    /// Retrieve user by login.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_login(&self, login: &Login) -> Result<Option<User>, UserError>;
}

/// Irreversible password hashing.
pub trait CredentialHasher: Send + Sync + 'static {
    /// Derive a salted hash of `password`.
    ///
    /// # Errors
    /// * `HashingFailed` - Internal failure; not caused by a valid request
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Compare `password` with a stored hash.
    ///
    /// # Returns
    /// `false` when the password does not match
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash is malformed
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError>;
}

/// Bearer token issuance and verification.
pub trait TokenIssuer: Send + Sync + 'static {
    /// Sign a token carrying `user_id` and an expiry.
    ///
    /// # Errors
    /// * `EmptySecretKey` - No signing secret configured
    /// * `SigningFailed` - Signing primitive failed
    fn issue(&self, user_id: UserId) -> Result<String, TokenError>;

    /// Check signature and expiry and extract the user identity.
    ///
    /// # Errors
    /// * `Expired` - Token expiry has passed
    /// * `Invalid` - Signature or claims are not valid
    /// * `EmptySecretKey` - No signing secret configured
    fn verify(&self, token: &str) -> Result<UserId, TokenError>;
}
