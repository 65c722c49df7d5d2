//! Request payloads accepted by the HTTP surface
//!
//! Fields whose presence and JSON type must be told apart (missing vs. wrong
//! type vs. wrong value) are kept as raw [`serde_json::Value`]s and checked by
//! the validation layer, so each failing rule can surface its own error. That
//! covers every field: a strictly-typed field would make the whole body fail
//! to deserialize and misreport a wrong type as an absent payload.

use serde::Deserialize;
use serde_json::Value;

#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Payload for customer creation
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct CreateCustomerRequest {
    /// Numeric customer identifier
    #[cfg_attr(feature = "utoipa", schema(value_type = Option<u64>))]
    pub cpf: Option<Value>,
    /// Display name
    #[cfg_attr(feature = "utoipa", schema(value_type = Option<String>))]
    pub name: Option<Value>,
}

/// Payload for customer update; both fields optional, at least one required
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct UpdateCustomerRequest {
    /// New display name
    #[cfg_attr(feature = "utoipa", schema(value_type = Option<String>))]
    pub name: Option<Value>,
    /// New numeric identifier
    #[cfg_attr(feature = "utoipa", schema(value_type = Option<u64>))]
    pub cpf: Option<Value>,
}

/// Payload for a deposit
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct DepositRequest {
    /// Free-text description recorded with the credit entry
    #[cfg_attr(feature = "utoipa", schema(value_type = Option<String>))]
    pub description: Option<Value>,
    /// Deposit amount
    #[cfg_attr(feature = "utoipa", schema(value_type = Option<f64>))]
    pub amount: Option<Value>,
    /// Operation type, must be the literal `"credit"`
    #[serde(rename = "type")]
    #[cfg_attr(feature = "utoipa", schema(value_type = Option<String>))]
    pub kind: Option<Value>,
}

/// Payload for a withdrawal
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct WithdrawRequest {
    /// Withdrawal amount
    #[cfg_attr(feature = "utoipa", schema(value_type = Option<f64>))]
    pub amount: Option<Value>,
}
