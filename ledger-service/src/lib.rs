//! Ledger service for managing customers and their statements

pub mod repository;
pub mod service;
pub mod validation;

pub use repository::{InMemoryLedgerRepository, LedgerRepository};
pub use service::LedgerService;
