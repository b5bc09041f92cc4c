use axum::{
    Json, Router, extract::Extension, http::StatusCode, response::IntoResponse, routing::get,
};

use crate::app::state::AppState;

pub fn router() -> Router {
    Router::new().route("/dashboard", get(dashboard))
}

pub async fn dashboard(Extension(state): Extension<AppState>) -> axum::response::Response {
    let summary = match state.with_ledger(|ledger| ledger.summary()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    (StatusCode::OK, Json(summary)).into_response()
}
