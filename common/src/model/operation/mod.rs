//! Statement operations and balance computation

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Amount;
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Kind of a statement operation
///
/// A closed enum: unknown kinds are rejected at insertion time instead of
/// silently contributing nothing to the balance fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub enum OperationKind {
    /// Increases the balance
    Credit,
    /// Decreases the balance
    Debit,
}

/// A single credit or debit entry in a customer's statement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct Operation {
    /// Operation kind
    #[serde(rename = "type")]
    pub kind: OperationKind,
    /// Operation amount
    pub amount: Amount,
    /// Free-text description, present only on deposits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Timestamp captured at insertion time, immutable
    pub created_at: DateTime<Utc>,
}

impl Operation {
    /// Create a credit entry timestamped now
    pub fn credit(amount: Amount, description: Option<String>) -> Self {
        Self {
            kind: OperationKind::Credit,
            amount,
            description,
            created_at: Utc::now(),
        }
    }

    /// Create a debit entry timestamped now
    pub fn debit(amount: Amount) -> Self {
        Self {
            kind: OperationKind::Debit,
            amount,
            description: None,
            created_at: Utc::now(),
        }
    }

    /// Whether this operation was recorded on the given calendar day
    pub fn occurred_on(&self, day: NaiveDate) -> bool {
        self.created_at.date_naive() == day
    }
}

/// Fold a statement into its balance: sum of credits minus sum of debits
pub fn balance(statement: &[Operation]) -> Amount {
    statement
        .iter()
        .fold(Amount::ZERO, |acc, operation| match operation.kind {
            OperationKind::Credit => acc + operation.amount,
            OperationKind::Debit => acc - operation.amount,
        })
}
