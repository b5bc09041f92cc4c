use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use stockroom_core::OrderId;

use crate::app::state::AppState;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/:id", axum::routing::put(update_order))
}

pub async fn list_orders(Extension(state): Extension<AppState>) -> axum::response::Response {
    let orders = match state.with_ledger(|ledger| {
        ledger.orders().iter().map(dto::order_to_json).collect::<Vec<_>>()
    }) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    (StatusCode::OK, Json(serde_json::Value::Array(orders))).into_response()
}

pub async fn create_order(
    Extension(state): Extension<AppState>,
    Json(body): Json<dto::OrderRequest>,
) -> axum::response::Response {
    let order = body.into_order();

    let added =
        match state.with_ledger_mut(|ledger| ledger.add_order(order).map(dto::order_to_json)) {
            Ok(r) => r,
            Err(resp) => return resp,
        };

    match added {
        Ok(json) => (StatusCode::CREATED, Json(json)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_order(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    Json(body): Json<dto::OrderRequest>,
) -> axum::response::Response {
    let id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid order id");
        }
    };

    let mut order = body.into_order();
    order.id = id;

    let updated =
        match state.with_ledger_mut(|ledger| ledger.update_order(order).map(dto::order_to_json)) {
            Ok(r) => r,
            Err(resp) => return resp,
        };

    match updated {
        Ok(json) => (StatusCode::OK, Json(json)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
