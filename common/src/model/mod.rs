//! Domain models for the ledger service

pub mod customer;
pub mod operation;
pub mod request;

/// Numeric customer identifier carried in headers, paths, and bodies.
/// Modeled as a plain number, not tied to real-world taxpayer-ID semantics.
pub type Cpf = u64;
