//! Common types and utilities for the ledger service
//!
//! This library contains the shared domain models, request payloads, and the
//! unified error type used by the ledger core and the HTTP gateway. It keeps
//! the two service crates free of duplicated type definitions.

pub mod error;
pub mod model;
pub mod decimal;

/// Re-export important types
pub use error::{Error, Result, ErrorExt};
pub use decimal::*;

// Re-export utoipa for use in model ToSchema derives
#[cfg(feature = "utoipa")]
pub use utoipa;
