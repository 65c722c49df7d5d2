//! Customer model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Amount;
use crate::model::operation::{balance, Operation};
use crate::model::Cpf;
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Customer record owning an ordered, append-only statement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct Customer {
    /// Unique customer ID, generated at creation, immutable
    pub id: Uuid,
    /// Numeric customer identifier, mutable via update
    pub cpf: Cpf,
    /// Display name, mutable via update
    pub name: String,
    /// Ordered sequence of operations, insertion order = chronological order
    pub statement: Vec<Operation>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new customer with an empty statement
    pub fn new(cpf: Cpf, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            cpf,
            name,
            statement: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Current balance, recomputed on demand from the statement
    pub fn balance(&self) -> Amount {
        balance(&self.statement)
    }
}
