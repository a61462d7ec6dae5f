use auth::Claims;
use auth::JwtError;
use auth::JwtHandler;

use crate::domain::user::models::UserId;
use crate::domain::user::ports::TokenIssuer;
use crate::user::errors::TokenError;

/// HS256 bearer tokens carrying the user ID, valid for `auth::jwt::TOKEN_TTL_HOURS`.
pub struct JwtTokenIssuer {
    handler: JwtHandler,
}

impl JwtTokenIssuer {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            handler: JwtHandler::new(secret),
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user_id: UserId) -> Result<String, TokenError> {
        let claims = Claims::for_user(user_id.0);
        let token = self.handler.encode(&claims)?;

        tracing::debug!(user_id = %user_id, exp = claims.exp, "Token issued");

        Ok(token)
    }

    fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        let claims: Claims = self.handler.decode(token)?;
        Ok(UserId(claims.user_id))
    }
}

impl From<JwtError> for TokenError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::EmptySecretKey => TokenError::EmptySecretKey,
            JwtError::EncodingFailed(msg) => TokenError::SigningFailed(msg),
            JwtError::TokenExpired => TokenError::Expired,
            JwtError::InvalidToken(msg) => TokenError::Invalid(msg),
        }
    }
}
