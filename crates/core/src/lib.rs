//! Plata Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Plata, a personal
//! finance tracker: financial records (incomes, expenses, savings),
//! the alert feed derived from record mutations, pure summary
//! aggregation, and user profiles. It is database-agnostic and defines
//! traits that are implemented by the `storage-sqlite` crate.

pub mod alerts;
pub mod auth;
pub mod constants;
pub mod errors;
pub mod money;
pub mod profiles;
pub mod records;
pub mod summary;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
