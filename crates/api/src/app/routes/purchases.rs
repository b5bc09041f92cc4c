use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::app::state::AppState;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route(
        "/purchase-orders",
        get(list_purchase_orders).post(create_purchase_order),
    )
}

pub async fn list_purchase_orders(
    Extension(state): Extension<AppState>,
) -> axum::response::Response {
    let orders = match state.with_ledger(|ledger| {
        ledger
            .purchase_orders()
            .iter()
            .map(dto::purchase_order_to_json)
            .collect::<Vec<_>>()
    }) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    (StatusCode::OK, Json(serde_json::Value::Array(orders))).into_response()
}

pub async fn create_purchase_order(
    Extension(state): Extension<AppState>,
    Json(body): Json<dto::PurchaseOrderRequest>,
) -> axum::response::Response {
    let order = body.into_purchase_order();

    let added = match state
        .with_ledger_mut(|ledger| ledger.add_purchase_order(order).map(dto::purchase_order_to_json))
    {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    match added {
        Ok(json) => (StatusCode::CREATED, Json(json)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
