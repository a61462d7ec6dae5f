use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Lifetime of an issued token.
pub const TOKEN_TTL_HOURS: i64 = 5;

/// Claims carried by an account bearer token.
///
/// Tokens are stateless: the claims are the whole session, and a token is
/// only ever invalidated by reaching `exp`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Identifier of the authenticated user
    pub user_id: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Create claims for a user expiring `TOKEN_TTL_HOURS` from now.
    pub fn for_user(user_id: i64) -> Self {
        Self::for_user_with_ttl(user_id, Duration::hours(TOKEN_TTL_HOURS))
    }

    /// Create claims for a user with an explicit lifetime.
    pub fn for_user_with_ttl(user_id: i64, ttl: Duration) -> Self {
        let now = Utc::now();
        let expiration = now + ttl;

        Self {
            user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        }
    }
}
