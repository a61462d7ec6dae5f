use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use super::bearer_header;
use super::parse_credentials;
use super::ApiError;
use super::ApiSuccess;
use super::BearerHeader;
use super::CredentialsRequest;
use crate::inbound::http::router::AppState;

/// Create an account and sign the new user in.
///
/// A token issuance failure after a successful registration is still
/// reported as an internal error.
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(BearerHeader, ApiSuccess<RegisterResponseData>), ApiError> {
    let credentials = parse_credentials(body)?;

    let user = state.user_service.register(credentials).await?;
    let token = state.token_issuer.issue(user.id)?;

    Ok((
        bearer_header(&token),
        ApiSuccess::new(
            StatusCode::OK,
            RegisterResponseData {
                user_id: user.id.0,
                token,
            },
        ),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub user_id: i64,
    pub token: String,
}
