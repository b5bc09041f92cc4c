use stockroom_ledger::InventoryLedger;

#[tokio::main]
async fn main() {
    stockroom_observability::init();

    let addr = std::env::var("STOCKROOM_ADDR").unwrap_or_else(|_| {
        tracing::info!("STOCKROOM_ADDR not set; defaulting to 0.0.0.0:8080");
        "0.0.0.0:8080".to_string()
    });

    let app = stockroom_api::app::build_app(InventoryLedger::seeded());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
