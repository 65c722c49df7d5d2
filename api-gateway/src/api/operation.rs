//! Deposit and withdrawal API handlers
//!
//! The two statement-mutating endpoints. Deposits address their target by
//! path cpf; withdrawals address the caller through the cpf header.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use common::model::operation::Operation;
use common::model::request::{DepositRequest, WithdrawRequest};

use crate::api::{caller_cpf, target_cpf};
use crate::api::response::ApiResponse;
use crate::error::ApiError;
use crate::AppState;

/// Record a deposit against the customer addressed by the path cpf
#[utoipa::path(
    post,
    path = "/deposit/{cpf}",
    params(
        ("cpf" = u64, Path, description = "Target cpf")
    ),
    request_body = DepositRequest,
    responses(
        (status = 200, description = "Deposit recorded successfully"),
        (status = 400, description = "Wrong field type or type not 'credit'"),
        (status = 404, description = "Customer not found"),
        (status = 422, description = "Required field missing")
    ),
    tag = "operation"
)]
pub async fn deposit(
    State(state): State<Arc<AppState>>,
    Path(cpf): Path<String>,
    body: Option<Json<DepositRequest>>,
) -> Result<ApiResponse<Operation>, ApiError> {
    let cpf = target_cpf(&cpf)?;
    let request = body.map(|Json(r)| r).unwrap_or_default();

    let operation = state.ledger.deposit(cpf, &request).await?;

    Ok(ApiResponse::new(operation))
}

/// Record a withdrawal against the caller-identified customer
#[utoipa::path(
    post,
    path = "/withdraw",
    params(
        ("cpf" = u64, Header, description = "Caller cpf")
    ),
    request_body = WithdrawRequest,
    responses(
        (status = 201, description = "Withdrawal recorded successfully"),
        (status = 400, description = "Insufficient funds or amount not numeric"),
        (status = 404, description = "Customer not found"),
        (status = 422, description = "Amount field missing")
    ),
    tag = "operation"
)]
pub async fn withdraw(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Option<Json<WithdrawRequest>>,
) -> Result<(StatusCode, ApiResponse<Operation>), ApiError> {
    let cpf = caller_cpf(&headers)?;
    let request = body.map(|Json(r)| r).unwrap_or_default();

    let operation = state.ledger.withdraw(cpf, &request).await?;

    Ok((StatusCode::CREATED, ApiResponse::new(operation)))
}
