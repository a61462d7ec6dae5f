use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Identity behind the presented bearer token.
pub async fn me(Extension(user): Extension<AuthenticatedUser>) -> ApiSuccess<MeResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        MeResponseData {
            user_id: user.user_id.0,
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeResponseData {
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::models::UserId;

    #[tokio::test]
    async fn test_me_returns_authenticated_user_id() {
        let response = me(Extension(AuthenticatedUser {
            user_id: UserId(7),
        }))
        .await;

        assert_eq!(
            response,
            ApiSuccess::new(StatusCode::OK, MeResponseData { user_id: 7 })
        );
    }
}
