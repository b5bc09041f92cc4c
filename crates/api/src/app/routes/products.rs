use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use stockroom_core::ProductId;
use stockroom_ledger::{Category, Product, StockAdjustment};

use crate::app::state::AppState;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/products/:id/adjust", post(adjust_stock))
}

fn parse_product_id(id: &str) -> Result<ProductId, axum::response::Response> {
    id.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
    })
}

fn product_from_request(
    id: ProductId,
    body: dto::ProductRequest,
) -> Result<Product, axum::response::Response> {
    let category: Category = match body.category.parse() {
        Ok(c) => c,
        Err(e) => return Err(errors::domain_error_to_response(e)),
    };
    Ok(Product::new(
        id,
        body.name,
        category,
        body.stock,
        body.price,
        body.description,
    ))
}

pub async fn list_products(
    Extension(state): Extension<AppState>,
) -> axum::response::Response {
    let products = match state.with_ledger(|ledger| {
        ledger.products().iter().map(dto::product_to_json).collect::<Vec<_>>()
    }) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    (StatusCode::OK, Json(serde_json::Value::Array(products))).into_response()
}

pub async fn get_product(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_product_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let found = match state.with_ledger(|ledger| ledger.product(id).map(dto::product_to_json)) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    match found {
        Ok(json) => (StatusCode::OK, Json(json)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(state): Extension<AppState>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    let product = match product_from_request(ProductId::new(body.id), body) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    let added =
        match state.with_ledger_mut(|ledger| ledger.add_product(product).map(dto::product_to_json))
        {
            Ok(r) => r,
            Err(resp) => return resp,
        };

    match added {
        Ok(json) => (StatusCode::CREATED, Json(json)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    let id = match parse_product_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    // The path identifier wins over whatever the body carries.
    let product = match product_from_request(id, body) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    let updated = match state
        .with_ledger_mut(|ledger| ledger.update_product(product).map(dto::product_to_json))
    {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    match updated {
        Ok(json) => (StatusCode::OK, Json(json)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_product_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let removed = match state.with_ledger_mut(|ledger| ledger.delete_product(id)) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    if removed {
        (
            StatusCode::OK,
            Json(serde_json::json!({ "id": id.value(), "deleted": true })),
        )
            .into_response()
    } else {
        errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found")
    }
}

pub async fn adjust_stock(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    Json(body): Json<dto::AdjustStockRequest>,
) -> axum::response::Response {
    let id = match parse_product_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let adjustment = StockAdjustment {
        product_id: id,
        kind: body.kind,
        quantity: body.quantity,
        reason: body.reason,
        notes: body.notes,
        occurred_at: Utc::now(),
    };

    let adjusted = match state
        .with_ledger_mut(|ledger| ledger.adjust_stock(adjustment).map(dto::product_to_json))
    {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    match adjusted {
        Ok(json) => (StatusCode::OK, Json(json)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
