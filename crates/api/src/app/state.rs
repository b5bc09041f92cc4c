use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use axum::http::StatusCode;
use axum::response::Response;

use stockroom_ledger::InventoryLedger;

use crate::app::errors;

/// Shared application state.
///
/// The ledger assumes a single writer at a time, so one lock guards the
/// whole value; handlers never hold it across an await point.
#[derive(Clone)]
pub struct AppState {
    ledger: Arc<RwLock<InventoryLedger>>,
    dev_tokens: Arc<RwLock<HashSet<String>>>,
}

impl AppState {
    pub fn new(ledger: InventoryLedger) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
            dev_tokens: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    pub fn with_ledger<T>(&self, f: impl FnOnce(&InventoryLedger) -> T) -> Result<T, Response> {
        match self.ledger.read() {
            Ok(ledger) => Ok(f(&ledger)),
            Err(_) => Err(poisoned()),
        }
    }

    pub fn with_ledger_mut<T>(
        &self,
        f: impl FnOnce(&mut InventoryLedger) -> T,
    ) -> Result<T, Response> {
        match self.ledger.write() {
            Ok(mut ledger) => Ok(f(&mut ledger)),
            Err(_) => Err(poisoned()),
        }
    }

    /// Record a freshly minted dev token so `/api/users/me` can honor it.
    pub fn remember_token(&self, token: &str) {
        if let Ok(mut tokens) = self.dev_tokens.write() {
            tokens.insert(token.to_string());
        }
    }

    pub fn token_is_known(&self, token: &str) -> bool {
        self.dev_tokens
            .read()
            .map(|tokens| tokens.contains(token))
            .unwrap_or(false)
    }
}

fn poisoned() -> Response {
    errors::json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "state_error",
        "shared state lock poisoned",
    )
}
