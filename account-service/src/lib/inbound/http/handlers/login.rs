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

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(BearerHeader, ApiSuccess<LoginResponseData>), ApiError> {
    let credentials = parse_credentials(body)?;

    let user = state.user_service.authenticate(credentials).await?;
    let token = state.token_issuer.issue(user.id)?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok((
        bearer_header(&token),
        ApiSuccess::new(StatusCode::OK, LoginResponseData { token }),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
