//! Statement API handlers
//!
//! Read-only endpoints over the caller's statement: the full operation list
//! and the list filtered down to one calendar day.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::HeaderMap,
};
use common::model::operation::Operation;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::caller_cpf;
use crate::api::response::ApiListResponse;
use crate::error::ApiError;
use crate::AppState;

/// Query parameters for the statement-by-date endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct StatementDateQuery {
    /// Calendar day, `MM/DD/YYYY` or `YYYY-MM-DD`
    pub date: String,
}

/// Get the full statement of the caller-identified customer
#[utoipa::path(
    get,
    path = "/statement",
    params(
        ("cpf" = u64, Header, description = "Caller cpf")
    ),
    responses(
        (status = 200, description = "Statement retrieved successfully"),
        (status = 404, description = "Customer not found")
    ),
    tag = "statement"
)]
pub async fn get_statement(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<ApiListResponse<Operation>, ApiError> {
    let cpf = caller_cpf(&headers)?;

    let statement = state.ledger.statement(cpf).await?;

    Ok(ApiListResponse::new(statement))
}

/// Get the statement entries recorded on one calendar day
#[utoipa::path(
    get,
    path = "/statement/date",
    params(
        ("cpf" = u64, Header, description = "Caller cpf"),
        StatementDateQuery
    ),
    responses(
        (status = 200, description = "Filtered statement retrieved successfully"),
        (status = 400, description = "Unrecognized date"),
        (status = 404, description = "Customer not found")
    ),
    tag = "statement"
)]
pub async fn get_statement_by_date(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    query: Option<Query<StatementDateQuery>>,
) -> Result<ApiListResponse<Operation>, ApiError> {
    let cpf = caller_cpf(&headers)?;
    let Query(query) = query.ok_or_else(|| {
        ApiError::Ledger(common::Error::InvalidValue(
            "the date query parameter needs to be sent in scope".to_string(),
        ))
    })?;

    let statement = state.ledger.statement_on(cpf, &query.date).await?;

    Ok(ApiListResponse::new(statement))
}
