use axum::Router;

pub mod auth;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod purchases;
pub mod system;

/// All `/api` routes.
pub fn router() -> Router {
    Router::new()
        .merge(products::router())
        .merge(orders::router())
        .merge(purchases::router())
        .merge(dashboard::router())
        .merge(auth::router())
}
