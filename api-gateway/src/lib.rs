// api-gateway/src/lib.rs
pub mod api;
pub mod config;
pub mod error;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use ledger_service::LedgerService;

use crate::api::{
    customer::{create_customer, delete_customer, get_customer, list_customers, update_customer},
    operation::{deposit, withdraw},
    statement::{get_statement, get_statement_by_date},
};

/// App state shared across handlers
pub struct AppState {
    /// Ledger service
    pub ledger: Arc<LedgerService>,
}

/// Build the API router over the given state
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Customer routes
        .route("/customers", post(create_customer).get(list_customers))
        .route("/customer", get(get_customer))
        .route(
            "/customer/:cpf",
            put(update_customer).delete(delete_customer),
        )
        // Statement routes
        .route("/statement", get(get_statement))
        .route("/statement/date", get(get_statement_by_date))
        // Operation routes
        .route("/deposit/:cpf", post(deposit))
        .route("/withdraw", post(withdraw))
        .with_state(state)
}
