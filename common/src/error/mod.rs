//! Error types for the ledger service
//!
//! This module provides a unified error handling system shared by the ledger
//! core and the HTTP gateway. Every failure a request can hit maps to exactly
//! one variant here, and the gateway translates variants to HTTP statuses.

use std::fmt::Display;
use thiserror::Error;

/// Ledger service error type
#[derive(Debug, Error)]
pub enum Error {
    /// Error when a customer identifier does not resolve
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// Error when a cpf is already registered at creation time
    #[error("Customer already registered: {0}")]
    AlreadyRegistered(String),

    /// Error when a field is present but carries the wrong type
    #[error("Invalid field type: {0}")]
    InvalidFieldType(String),

    /// Error when a required field is absent from the payload
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Error when a field has the right type but an unacceptable value
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Error when a withdrawal exceeds the current balance
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),

    /// Error when an update supplies no fields to change
    #[error("No changes requested: {0}")]
    NoChangesRequested(String),

    /// Error when a listing is requested against an empty ledger
    #[error("No customer found: {0}")]
    EmptyLedger(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Decimal conversion error
    #[error("Decimal conversion error: {0}")]
    DecimalError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            let context = context_fn().to_string();
            match e {
                Error::CustomerNotFound(msg) => {
                    Error::CustomerNotFound(format!("{}: {}", context, msg))
                }
                Error::AlreadyRegistered(msg) => {
                    Error::AlreadyRegistered(format!("{}: {}", context, msg))
                }
                Error::InvalidFieldType(msg) => {
                    Error::InvalidFieldType(format!("{}: {}", context, msg))
                }
                Error::MissingField(msg) => Error::MissingField(format!("{}: {}", context, msg)),
                Error::InvalidValue(msg) => Error::InvalidValue(format!("{}: {}", context, msg)),
                Error::InsufficientFunds(msg) => {
                    Error::InsufficientFunds(format!("{}: {}", context, msg))
                }
                Error::NoChangesRequested(msg) => {
                    Error::NoChangesRequested(format!("{}: {}", context, msg))
                }
                Error::EmptyLedger(msg) => Error::EmptyLedger(format!("{}: {}", context, msg)),
                Error::Internal(msg) => Error::Internal(format!("{}: {}", context, msg)),
                Error::Serialization(e) => Error::Serialization(e),
                Error::DecimalError(msg) => Error::DecimalError(format!("{}: {}", context, msg)),
            }
        })
    }
}

/// Convert string messages into an error
impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Internal(message)
    }
}

/// From rust_decimal::Error
impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::DecimalError(err.to_string())
    }
}
