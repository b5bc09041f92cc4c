use axum::{
    Json, Router,
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};

use stockroom_auth::{dev_profile, is_dev_credentials, mint_dev_token};

use crate::app::state::AppState;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/token", post(issue_token))
        .route("/users/me", get(current_user))
}

/// Development token endpoint: honors the hardcoded dev credentials only.
pub async fn issue_token(
    Extension(state): Extension<AppState>,
    Json(body): Json<dto::TokenRequest>,
) -> axum::response::Response {
    if !is_dev_credentials(&body.username, &body.password) {
        tracing::warn!(username = %body.username, "rejected token request");
        return errors::json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "invalid username or password",
        );
    }

    let token = mint_dev_token();
    state.remember_token(&token);

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "access_token": token,
            "token_type": "bearer",
        })),
    )
        .into_response()
}

pub async fn current_user(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
) -> axum::response::Response {
    let token = match extract_bearer(&headers) {
        Some(t) => t,
        None => {
            return errors::json_error(
                StatusCode::UNAUTHORIZED,
                "missing_token",
                "missing bearer token",
            );
        }
    };

    if !state.token_is_known(token) {
        return errors::json_error(StatusCode::UNAUTHORIZED, "invalid_token", "unknown token");
    }

    let profile = dev_profile();
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "username": profile.username,
            "full_name": profile.full_name,
            "email": profile.email,
        })),
    )
        .into_response()
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let header = header.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}
