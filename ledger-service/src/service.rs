//! Ledger service implementation

use std::sync::Arc;

use common::decimal::Amount;
use common::error::{Error, ErrorExt, Result};
use common::model::customer::Customer;
use common::model::operation::Operation;
use common::model::request::{
    CreateCustomerRequest, DepositRequest, UpdateCustomerRequest, WithdrawRequest,
};
use common::model::Cpf;
use tracing::{debug, info};

use crate::repository::{InMemoryLedgerRepository, LedgerRepository};
use crate::validation;

/// Ledger service for managing customers and their statements
///
/// Every operation follows the same pipeline: resolve the target customer,
/// validate the payload, then read or mutate the store. Resolution always
/// runs first, so an unknown identifier is reported before any payload error.
pub struct LedgerService {
    /// Repository for customer data
    repo: Arc<dyn LedgerRepository>,
}

impl LedgerService {
    /// Create a new ledger service backed by the in-memory repository
    pub fn new() -> Self {
        Self {
            repo: Arc::new(InMemoryLedgerRepository::new()),
        }
    }

    /// Create a new ledger service with a specific repository
    pub fn with_repository(repo: Arc<dyn LedgerRepository>) -> Self {
        Self { repo }
    }

    /// Resolve a cpf to its customer, failing when it is not registered
    async fn resolve(&self, cpf: Cpf) -> Result<Customer> {
        self.repo
            .find_by_cpf(cpf)
            .await?
            .ok_or_else(|| Error::CustomerNotFound(format!("no customer with cpf {}", cpf)))
    }

    /// Register a new customer
    pub async fn create_customer(&self, request: &CreateCustomerRequest) -> Result<Customer> {
        let (cpf, name) = validation::validate_new_customer(request)?;

        info!("Creating customer with cpf {}", cpf);
        self.repo
            .create_customer(cpf, name)
            .await
            .with_context(|| format!("Failed to create customer with cpf {}", cpf))
    }

    /// List all customers, failing when the ledger is empty
    pub async fn list_customers(&self) -> Result<Vec<Customer>> {
        let customers = self.repo.list_customers().await?;

        if customers.is_empty() {
            return Err(Error::EmptyLedger("no customer found".to_string()));
        }

        Ok(customers)
    }

    /// Get a customer by cpf
    pub async fn get_customer(&self, cpf: Cpf) -> Result<Customer> {
        debug!("Looking up customer with cpf {}", cpf);
        self.resolve(cpf).await
    }

    /// Update a customer's name and/or cpf
    pub async fn update_customer(
        &self,
        cpf: Cpf,
        request: &UpdateCustomerRequest,
    ) -> Result<Customer> {
        let customer = self.resolve(cpf).await?;
        let (name, new_cpf) = validation::validate_update(request)?;

        info!("Updating customer {}", customer.id);
        self.repo
            .update_customer(customer.id, name, new_cpf)
            .await
            .with_context(|| format!("Failed to update customer {}", customer.id))
    }

    /// Delete a customer, returning the remaining collection
    pub async fn delete_customer(&self, cpf: Cpf) -> Result<Vec<Customer>> {
        let customer = self.resolve(cpf).await?;

        info!("Deleting customer {}", customer.id);
        self.repo
            .delete_customer(customer.id)
            .await
            .with_context(|| format!("Failed to delete customer {}", customer.id))
    }

    /// Full statement of a customer
    pub async fn statement(&self, cpf: Cpf) -> Result<Vec<Operation>> {
        let customer = self.resolve(cpf).await?;
        self.repo.statement(customer.id).await
    }

    /// Statement entries recorded on a calendar day, given as a query string
    pub async fn statement_on(&self, cpf: Cpf, date: &str) -> Result<Vec<Operation>> {
        let customer = self.resolve(cpf).await?;
        let day = validation::parse_statement_date(date)?;

        self.repo.statement_on_day(customer.id, day).await
    }

    /// Record a deposit against a customer's statement
    pub async fn deposit(&self, cpf: Cpf, request: &DepositRequest) -> Result<Operation> {
        let customer = self.resolve(cpf).await?;
        let (amount, description) = validation::validate_deposit(request)?;

        info!("Depositing {} to customer {}", amount, customer.id);
        self.repo
            .credit(customer.id, amount, description)
            .await
            .with_context(|| format!("Failed to record deposit for customer {}", customer.id))
    }

    /// Record a withdrawal against a customer's statement
    pub async fn withdraw(&self, cpf: Cpf, request: &WithdrawRequest) -> Result<Operation> {
        let customer = self.resolve(cpf).await?;
        let amount = validation::validate_withdraw(request)?;

        info!("Withdrawing {} from customer {}", amount, customer.id);
        self.repo.debit(customer.id, amount).await
    }

    /// Current balance of a customer
    pub async fn balance(&self, cpf: Cpf) -> Result<Amount> {
        let customer = self.resolve(cpf).await?;
        self.repo.balance(customer.id).await
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
