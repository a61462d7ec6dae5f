use std::fmt;

use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::domain::user::models::Credentials;
use crate::user::errors::CredentialsError;
use crate::user::errors::TokenError;
use crate::user::errors::UserError;

pub mod login;
pub mod me;
pub mod register;

const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// Response header carrying a freshly issued token.
pub type BearerHeader = [(HeaderName, String); 1];

pub fn bearer_header(token: &str) -> BearerHeader {
    [(header::AUTHORIZATION, format!("Bearer {}", token))]
}

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Conflict(String),
    Unauthorized(String),
}

impl ApiError {
    fn internal() -> Self {
        ApiError::InternalServerError(INTERNAL_SERVER_ERROR_MESSAGE.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidRequest(_) => ApiError::BadRequest(err.to_string()),
            UserError::LoginAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::Password(_) | UserError::DatabaseError(_) => {
                tracing::error!(error = %err, "Request failed");
                ApiError::internal()
            }
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::EmptySecretKey | TokenError::SigningFailed(_) => {
                tracing::error!(error = %err, "Token issuance failed");
                ApiError::internal()
            }
            TokenError::Expired | TokenError::Invalid(_) => {
                tracing::warn!(error = %err, "Token rejected");
                ApiError::Unauthorized("Invalid or expired token".to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// HTTP request body shared by registration and login (raw JSON)
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialsRequest {
    login: String,
    password: String,
}

impl fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Error)]
enum ParseCredentialsRequestError {
    #[error("Malformed request body: {0}")]
    Malformed(String),

    #[error("Invalid request: {0}")]
    Invalid(#[from] CredentialsError),
}

impl From<ParseCredentialsRequestError> for ApiError {
    fn from(err: ParseCredentialsRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// Decoding failures are reported before any field is validated.
fn parse_credentials(
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Credentials, ParseCredentialsRequestError> {
    let Json(request) =
        body.map_err(|rejection| ParseCredentialsRequestError::Malformed(rejection.body_text()))?;

    Ok(Credentials::new(request.login, request.password)?)
}
