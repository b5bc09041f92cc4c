//! Black-box tests against the assembled router, driven in-process.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use stockroom_ledger::InventoryLedger;

fn app() -> Router {
    stockroom_api::app::build_app(InventoryLedger::seeded())
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(&app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn list_products_returns_seeded_catalog() {
    let (status, body) = send(&app(), get("/api/products")).await;
    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 7);
    assert_eq!(products[0]["name"], "Polo");
    assert_eq!(products[0]["status"], "In Stock");
    assert_eq!(products[2]["name"], "Blouse");
    assert_eq!(products[2]["statusClass"], "low-stock");
}

#[tokio::test]
async fn get_unknown_product_is_404() {
    let (status, body) = send(&app(), get("/api/products/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn get_non_numeric_product_id_is_400() {
    let (status, body) = send(&app(), get("/api/products/polo")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_id");
}

#[tokio::test]
async fn create_product_then_duplicate_conflicts() {
    let app = app();
    let draft = json!({
        "id": 8, "name": "Lab Gown", "category": "Uniform",
        "stock": 4, "price": 600, "description": "Chemistry lab gown"
    });

    let (status, body) = send(&app, json_request("POST", "/api/products", draft.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    // 4 on hand is below the uniform threshold of 10.
    assert_eq!(body["status"], "Low Stock");

    let (status, body) = send(&app, json_request("POST", "/api/products", draft)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");
}

#[tokio::test]
async fn create_product_with_unknown_category_is_400() {
    let draft = json!({
        "id": 8, "name": "Ruler", "category": "Stationery",
        "stock": 10, "price": 20, "description": ""
    });
    let (status, body) = send(&app(), json_request("POST", "/api/products", draft)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_category");
}

#[tokio::test]
async fn update_missing_product_is_404() {
    let draft = json!({
        "id": 99, "name": "Ghost", "category": "Other",
        "stock": 1, "price": 1, "description": ""
    });
    let (status, _) = send(&app(), json_request("PUT", "/api/products/99", draft)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn adjust_stock_updates_stock_status_and_history() {
    let app = app();
    let adjustment = json!({ "type": "remove", "quantity": 1, "reason": "sold", "notes": null });

    let (status, body) = send(&app, json_request("POST", "/api/products/3/adjust", adjustment)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stock"], 7);
    assert_eq!(body["status"], "Low Stock");
    let history = body["history"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["type"], "remove");
    assert_eq!(history[0]["quantity"], 1);
    assert_eq!(history[0]["reason"], "sold");
}

#[tokio::test]
async fn adjust_stock_below_zero_is_422_and_changes_nothing() {
    let app = app();
    let adjustment = json!({ "type": "remove", "quantity": 10, "reason": "sold" });

    let (status, body) = send(&app, json_request("POST", "/api/products/3/adjust", adjustment)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "insufficient_stock");

    let (_, body) = send(&app, get("/api/products/3")).await;
    assert_eq!(body["stock"], 8);
    assert!(body["history"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn delete_product_then_lookup_is_404() {
    let app = app();

    let (status, body) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri("/api/products/7")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], true);

    let (status, _) = send(&app, get("/api/products/7")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn orders_create_and_update_round_trip() {
    let app = app();
    let order = json!({
        "id": 4, "customer": "Bob Cruz", "date": "2025-03-13", "status": "pending",
        "items": [
            { "product_id": 1, "name": "Polo", "quantity": 1, "price": 450, "cost": 350 }
        ]
    });

    let (status, body) = send(&app, json_request("POST", "/api/orders", order.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["customer"], "Bob Cruz");

    let mut completed = order;
    completed["status"] = json!("completed");
    let (status, body) = send(&app, json_request("PUT", "/api/orders/4", completed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "completed");

    let (_, body) = send(&app, get("/api/orders")).await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn purchase_orders_list_and_create() {
    let app = app();

    let (status, body) = send(&app, get("/api/purchase-orders")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let po = json!({
        "id": 3, "supplier": "Paper Mill", "date": "2025-03-14", "status": "pending",
        "items": [
            { "product_id": 7, "name": "Scantron", "quantity": 500, "cost": 3 }
        ]
    });
    let (status, _) = send(&app, json_request("POST", "/api/purchase-orders", po)).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn dashboard_reports_seeded_counts() {
    let (status, body) = send(&app(), get("/api/dashboard")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"], 7);
    // Blouse, PE Book, Scantron sit below their thresholds.
    assert_eq!(body["low_stock"], 3);
    assert_eq!(body["out_of_stock"], 0);
    assert_eq!(body["pending_orders"], 2);
}

#[tokio::test]
async fn dev_token_round_trips_through_users_me() {
    let app = app();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/token",
            json!({ "username": "admin", "password": "admin123" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["access_token"].as_str().unwrap().to_string();
    assert!(token.starts_with("mock-jwt-token-"));

    let me = Request::builder()
        .uri("/api/users/me")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, me).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "admin");
    assert_eq!(body["full_name"], "Administrator");
}

#[tokio::test]
async fn token_rejects_wrong_credentials() {
    let (status, body) = send(
        &app(),
        json_request(
            "POST",
            "/api/token",
            json!({ "username": "admin", "password": "nope" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid_credentials");
}

#[tokio::test]
async fn users_me_without_token_is_401() {
    let (status, body) = send(&app(), get("/api/users/me")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "missing_token");
}
