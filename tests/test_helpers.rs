// File: tests/test_helpers.rs

use common::model::customer::Customer;
use common::model::request::{CreateCustomerRequest, DepositRequest, WithdrawRequest};
use ledger_service::LedgerService;
use serde_json::json;

/// Fresh service backed by an empty in-memory ledger
pub fn new_service() -> LedgerService {
    LedgerService::new()
}

/// Register a customer, panicking on failure
pub async fn register(service: &LedgerService, cpf: u64, name: &str) -> Customer {
    let request: CreateCustomerRequest =
        serde_json::from_value(json!({"cpf": cpf, "name": name})).unwrap();
    service.create_customer(&request).await.unwrap()
}

/// Build a deposit payload for the given amount
pub fn deposit_payload(amount: f64) -> DepositRequest {
    serde_json::from_value(json!({"amount": amount, "type": "credit"})).unwrap()
}

/// Build a withdrawal payload for the given amount
pub fn withdraw_payload(amount: f64) -> WithdrawRequest {
    serde_json::from_value(json!({"amount": amount})).unwrap()
}
