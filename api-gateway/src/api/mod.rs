//! API handlers
//!
//! This module contains all the API endpoint handlers organized by resource.
//! Each handler follows a consistent pattern:
//! - Resolve the target customer (cpf header, path segment, or body field)
//! - Call the appropriate ledger service methods
//! - Map the result to a standardized response format
//!
//! Identifier precedence is deterministic: routes that read the cpf header
//! never consult the path or body, and vice versa.

pub mod customer;
pub mod operation;
pub mod response;
pub mod statement;

use axum::http::HeaderMap;
use common::model::Cpf;

use crate::error::ApiError;

// Re-export the response module for easy access
pub use response::{ApiListResponse, ApiResponse};

/// Resolve the caller-identified customer cpf from the `cpf` request header.
///
/// A missing or non-numeric header cannot resolve to any customer, so both
/// cases surface as a 404 rather than a type error.
pub fn caller_cpf(headers: &HeaderMap) -> Result<Cpf, ApiError> {
    headers
        .get("cpf")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<Cpf>().ok())
        .ok_or_else(|| ApiError::NotFound("customer not found".to_string()))
}

/// Resolve the target customer cpf from a raw path segment.
///
/// Path segments arrive as strings; like the header variant, a non-numeric
/// segment cannot resolve to any customer and surfaces as a 404 JSON error
/// instead of a router-level parse rejection.
pub fn target_cpf(raw: &str) -> Result<Cpf, ApiError> {
    raw.trim()
        .parse::<Cpf>()
        .map_err(|_| ApiError::NotFound("customer not found".to_string()))
}
