//! HTTP application wiring (axum router + shared state).
//!
//! Layout:
//! - `state.rs`: shared ledger + issued dev tokens behind one lock each
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use axum::{Extension, Router, routing::get};

use stockroom_ledger::InventoryLedger;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod state;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// API tests).
pub fn build_app(ledger: InventoryLedger) -> Router {
    let state = state::AppState::new(ledger);

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(Extension(state))
}
