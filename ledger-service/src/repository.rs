//! Repository for customer and statement data

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use common::decimal::Amount;
use common::error::{Error, Result};
use common::model::customer::Customer;
use common::model::operation::Operation;
use common::model::Cpf;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Ledger repository trait defining the interface for customer data storage
///
/// Mutations are keyed by the immutable customer id, never by the mutable
/// cpf, so a concurrent cpf update cannot redirect a delete or an append.
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Find a customer by cpf
    async fn find_by_cpf(&self, cpf: Cpf) -> Result<Option<Customer>>;

    /// Whether a cpf is currently registered
    async fn exists_by_cpf(&self, cpf: Cpf) -> Result<bool>;

    /// Create a new customer with an empty statement
    ///
    /// The duplicate-cpf check and the insert run inside the same critical
    /// section, so two concurrent creations cannot both succeed.
    async fn create_customer(&self, cpf: Cpf, name: String) -> Result<Customer>;

    /// Update a customer's name and/or cpf in place
    async fn update_customer(
        &self,
        id: Uuid,
        name: Option<String>,
        cpf: Option<Cpf>,
    ) -> Result<Customer>;

    /// Remove a customer by id, returning the remaining collection
    async fn delete_customer(&self, id: Uuid) -> Result<Vec<Customer>>;

    /// List all customers in insertion order
    async fn list_customers(&self) -> Result<Vec<Customer>>;

    /// Append a credit entry to a customer's statement
    async fn credit(&self, id: Uuid, amount: Amount, description: Option<String>)
        -> Result<Operation>;

    /// Append a debit entry to a customer's statement
    ///
    /// The balance check and the append run inside the same critical section,
    /// so two concurrent withdrawals cannot jointly overdraw the account.
    async fn debit(&self, id: Uuid, amount: Amount) -> Result<Operation>;

    /// Current balance of a customer
    async fn balance(&self, id: Uuid) -> Result<Amount>;

    /// Full statement of a customer, in insertion order
    async fn statement(&self, id: Uuid) -> Result<Vec<Operation>>;

    /// Operations recorded on the given calendar day, in insertion order
    async fn statement_on_day(&self, id: Uuid, day: NaiveDate) -> Result<Vec<Operation>>;
}

/// In-memory repository for customer data
///
/// One coarse lock over the whole collection. The working set is small and
/// every lookup is a linear scan, so a single `RwLock` keeps all
/// check-then-act sequences atomic without finer-grained machinery.
pub struct InMemoryLedgerRepository {
    customers: RwLock<Vec<Customer>>,
}

impl InMemoryLedgerRepository {
    /// Create a new, empty in-memory ledger repository
    pub fn new() -> Self {
        Self {
            customers: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryLedgerRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(id: Uuid) -> Error {
    Error::CustomerNotFound(format!("no customer with id {}", id))
}

#[async_trait]
impl LedgerRepository for InMemoryLedgerRepository {
    async fn find_by_cpf(&self, cpf: Cpf) -> Result<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.iter().find(|c| c.cpf == cpf).cloned())
    }

    async fn exists_by_cpf(&self, cpf: Cpf) -> Result<bool> {
        let customers = self.customers.read().await;
        Ok(customers.iter().any(|c| c.cpf == cpf))
    }

    async fn create_customer(&self, cpf: Cpf, name: String) -> Result<Customer> {
        let mut customers = self.customers.write().await;

        if customers.iter().any(|c| c.cpf == cpf) {
            return Err(Error::AlreadyRegistered(format!(
                "cpf {} is already in use",
                cpf
            )));
        }

        let customer = Customer::new(cpf, name);
        debug!("Created customer {} with cpf {}", customer.id, customer.cpf);
        customers.push(customer.clone());
        Ok(customer)
    }

    async fn update_customer(
        &self,
        id: Uuid,
        name: Option<String>,
        cpf: Option<Cpf>,
    ) -> Result<Customer> {
        if name.is_none() && cpf.is_none() {
            return Err(Error::NoChangesRequested(
                "there was no data to change".to_string(),
            ));
        }

        let mut customers = self.customers.write().await;
        let customer = customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found(id))?;

        if let Some(name) = name {
            customer.name = name;
        }
        if let Some(cpf) = cpf {
            customer.cpf = cpf;
        }
        customer.updated_at = Utc::now();

        Ok(customer.clone())
    }

    async fn delete_customer(&self, id: Uuid) -> Result<Vec<Customer>> {
        let mut customers = self.customers.write().await;
        let position = customers
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| not_found(id))?;

        customers.remove(position);
        debug!("Deleted customer {}", id);
        Ok(customers.clone())
    }

    async fn list_customers(&self) -> Result<Vec<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.clone())
    }

    async fn credit(
        &self,
        id: Uuid,
        amount: Amount,
        description: Option<String>,
    ) -> Result<Operation> {
        let mut customers = self.customers.write().await;
        let customer = customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found(id))?;

        let operation = Operation::credit(amount, description);
        customer.statement.push(operation.clone());
        customer.updated_at = operation.created_at;

        Ok(operation)
    }

    async fn debit(&self, id: Uuid, amount: Amount) -> Result<Operation> {
        let mut customers = self.customers.write().await;
        let customer = customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found(id))?;

        let balance = customer.balance();
        if amount > balance {
            return Err(Error::InsufficientFunds(format!(
                "cannot withdraw {} from a balance of {}",
                amount, balance
            )));
        }

        let operation = Operation::debit(amount);
        customer.statement.push(operation.clone());
        customer.updated_at = operation.created_at;

        Ok(operation)
    }

    async fn balance(&self, id: Uuid) -> Result<Amount> {
        let customers = self.customers.read().await;
        let customer = customers
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found(id))?;

        Ok(customer.balance())
    }

    async fn statement(&self, id: Uuid) -> Result<Vec<Operation>> {
        let customers = self.customers.read().await;
        let customer = customers
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found(id))?;

        Ok(customer.statement.clone())
    }

    async fn statement_on_day(&self, id: Uuid, day: NaiveDate) -> Result<Vec<Operation>> {
        let customers = self.customers.read().await;
        let customer = customers
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found(id))?;

        Ok(customer
            .statement
            .iter()
            .filter(|operation| operation.occurred_on(day))
            .cloned()
            .collect())
    }
}
