//! Customer API handlers
//!
//! Handles endpoints related to customer management:
//! - Create customer
//! - List customers
//! - Get the caller-identified customer
//! - Update and delete a customer addressed by path

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use common::model::customer::Customer;
use common::model::request::{CreateCustomerRequest, UpdateCustomerRequest};

use crate::api::response::{ApiListResponse, ApiResponse};
use crate::api::{caller_cpf, target_cpf};
use crate::error::ApiError;
use crate::AppState;

/// Register a new customer
#[utoipa::path(
    post,
    path = "/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer successfully created"),
        (status = 400, description = "Cpf already registered or not numeric"),
        (status = 422, description = "Required field missing")
    ),
    tag = "customer"
)]
pub async fn create_customer(
    State(state): State<Arc<AppState>>,
    body: Option<Json<CreateCustomerRequest>>,
) -> Result<(StatusCode, ApiResponse<Customer>), ApiError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();

    let customer = state.ledger.create_customer(&request).await?;

    Ok((StatusCode::CREATED, ApiResponse::new(customer)))
}

/// List all registered customers
#[utoipa::path(
    get,
    path = "/customers",
    responses(
        (status = 200, description = "Customer list retrieved successfully"),
        (status = 404, description = "No customer registered")
    ),
    tag = "customer"
)]
pub async fn list_customers(
    State(state): State<Arc<AppState>>,
) -> Result<ApiListResponse<Customer>, ApiError> {
    let customers = state.ledger.list_customers().await?;

    Ok(ApiListResponse::new(customers))
}

/// Get the customer identified by the cpf header
#[utoipa::path(
    get,
    path = "/customer",
    params(
        ("cpf" = u64, Header, description = "Caller cpf")
    ),
    responses(
        (status = 200, description = "Customer details retrieved successfully"),
        (status = 404, description = "Customer not found")
    ),
    tag = "customer"
)]
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<ApiResponse<Customer>, ApiError> {
    let cpf = caller_cpf(&headers)?;

    let customer = state.ledger.get_customer(cpf).await?;

    Ok(ApiResponse::new(customer))
}

/// Update the customer addressed by the path cpf
#[utoipa::path(
    put,
    path = "/customer/{cpf}",
    params(
        ("cpf" = u64, Path, description = "Target cpf")
    ),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated successfully"),
        (status = 400, description = "No changes requested or cpf not numeric"),
        (status = 404, description = "Customer not found")
    ),
    tag = "customer"
)]
pub async fn update_customer(
    State(state): State<Arc<AppState>>,
    Path(cpf): Path<String>,
    body: Option<Json<UpdateCustomerRequest>>,
) -> Result<ApiResponse<Customer>, ApiError> {
    let cpf = target_cpf(&cpf)?;
    let request = body.map(|Json(r)| r).unwrap_or_default();

    let customer = state.ledger.update_customer(cpf, &request).await?;

    Ok(ApiResponse::new(customer))
}

/// Delete the customer addressed by the path cpf
#[utoipa::path(
    delete,
    path = "/customer/{cpf}",
    params(
        ("cpf" = u64, Path, description = "Target cpf")
    ),
    responses(
        (status = 200, description = "Customer deleted, remaining list returned"),
        (status = 404, description = "Customer not found")
    ),
    tag = "customer"
)]
pub async fn delete_customer(
    State(state): State<Arc<AppState>>,
    Path(cpf): Path<String>,
) -> Result<ApiListResponse<Customer>, ApiError> {
    let cpf = target_cpf(&cpf)?;
    let remaining = state.ledger.delete_customer(cpf).await?;

    Ok(ApiListResponse::new(remaining))
}
