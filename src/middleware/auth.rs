use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    auth::JwtService,
    database::queries::UserQueries,
    handlers::AppState,
};

pub const SESSION_COOKIE: &str = "session";

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: String,
}

/// Pulls the session token from either the `Authorization: Bearer` header
/// (API clients) or the session cookie (browser pages).
fn extract_token(parts: &Parts) -> Option<String> {
    if let Some(auth_header) = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
    {
        if let Some(token) = auth_header.strip_prefix("Bearer ") {
            return Some(token.to_string());
        }
    }

    parts
        .headers
        .get(header::COOKIE)
        .and_then(|header| header.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').find_map(|cookie| {
                let (name, value) = cookie.trim().split_once('=')?;
                (name == SESSION_COOKIE).then(|| value.to_string())
            })
        })
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": message, "status": 401})),
    )
        .into_response()
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> std::result::Result<Self, Self::Rejection> {
        let token = extract_token(parts).ok_or_else(|| unauthorized("Authentication required"))?;

        let jwt_service = JwtService::new(&state.config.secret_key);
        let claims = jwt_service
            .verify_session_token(&token)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        let user_id =
            Uuid::parse_str(&claims.sub).map_err(|_| unauthorized("Invalid token"))?;

        // Verify user still exists
        match UserQueries::find_by_id(state.database.pool(), user_id).await {
            Ok(Some(user)) => Ok(AuthenticatedUser {
                id: user.id,
                email: user.email,
            }),
            Ok(None) => Err(unauthorized("User not found")),
            Err(_) => Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Database error", "status": 500})),
            )
                .into_response()),
        }
    }
}
