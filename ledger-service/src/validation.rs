//! Payload validation for incoming requests
//!
//! Each function applies its rules in a fixed order and returns on the first
//! failure, before any store mutation can happen. Fields arrive as raw JSON
//! values so that a missing field, a wrong type, and a wrong value each
//! surface their own error.

use chrono::NaiveDate;
use common::decimal::{amount_from_f64, Amount};
use common::error::{Error, Result};
use common::model::request::{
    CreateCustomerRequest, DepositRequest, UpdateCustomerRequest, WithdrawRequest,
};
use common::model::Cpf;
use serde_json::Value;

/// Date formats accepted by the statement-by-date query
const DATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

fn numeric_cpf(value: &Value) -> Result<Cpf> {
    value
        .as_u64()
        .ok_or_else(|| Error::InvalidFieldType("the cpf field must be a number".to_string()))
}

fn numeric_amount(value: &Value) -> Result<Amount> {
    let raw = value
        .as_f64()
        .ok_or_else(|| Error::InvalidFieldType("the amount field must be a number".to_string()))?;
    amount_from_f64(raw)
        .ok_or_else(|| Error::InvalidFieldType("the amount field must be a number".to_string()))
}

fn textual(value: &Value, field: &str) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidFieldType(format!("the {} field must be a string", field)))
}

/// Validate a customer-creation payload, yielding the cpf and name
pub fn validate_new_customer(request: &CreateCustomerRequest) -> Result<(Cpf, String)> {
    let cpf = request
        .cpf
        .as_ref()
        .ok_or_else(|| Error::MissingField("the cpf field needs to be sent in scope".to_string()))?;
    let cpf = numeric_cpf(cpf)?;

    let name = request.name.as_ref().ok_or_else(|| {
        Error::MissingField("the name field needs to be sent in scope".to_string())
    })?;
    let name = textual(name, "name")?;

    Ok((cpf, name))
}

/// Validate a deposit payload, yielding the amount and description
///
/// Rule order is load-bearing: amount present, type present, type textual,
/// type equals `credit`, amount numeric. The first failing rule wins.
pub fn validate_deposit(request: &DepositRequest) -> Result<(Amount, Option<String>)> {
    let amount = request.amount.as_ref().ok_or_else(|| {
        Error::MissingField("the amount field needs to be sent in scope".to_string())
    })?;

    let kind = request.kind.as_ref().ok_or_else(|| {
        Error::MissingField("the type field needs to be sent in scope".to_string())
    })?;

    let kind = kind
        .as_str()
        .ok_or_else(|| Error::InvalidFieldType("the type field must be a string".to_string()))?;

    if kind != "credit" {
        return Err(Error::InvalidValue(
            "the type field must be 'credit'".to_string(),
        ));
    }

    let amount = numeric_amount(amount)?;

    let description = match &request.description {
        Some(value) => Some(textual(value, "description")?),
        None => None,
    };

    Ok((amount, description))
}

/// Validate a withdrawal payload, yielding the amount
///
/// The balance ceiling is not checked here; the store enforces it atomically
/// when the debit entry is appended.
pub fn validate_withdraw(request: &WithdrawRequest) -> Result<Amount> {
    let amount = request.amount.as_ref().ok_or_else(|| {
        Error::MissingField("the amount field needs to be sent in scope".to_string())
    })?;

    numeric_amount(amount)
}

/// Validate an update payload, yielding the fields to change
pub fn validate_update(request: &UpdateCustomerRequest) -> Result<(Option<String>, Option<Cpf>)> {
    if request.name.is_none() && request.cpf.is_none() {
        return Err(Error::NoChangesRequested(
            "there was no data to change".to_string(),
        ));
    }

    let name = match &request.name {
        Some(value) => Some(textual(value, "name")?),
        None => None,
    };

    let cpf = match &request.cpf {
        Some(value) => Some(numeric_cpf(value)?),
        None => None,
    };

    Ok((name, cpf))
}

/// Parse the `date` query of the statement-by-date endpoint
pub fn parse_statement_date(raw: &str) -> Result<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .ok_or_else(|| Error::InvalidValue(format!("unrecognized date '{}'", raw)))
}
