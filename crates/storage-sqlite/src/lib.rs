//! SQLite storage implementation for Plata.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in `plata-core`
//! and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for records, alerts, and profiles
//! - Database-specific model types (with Diesel derives)
//!
//! This is the only crate in the workspace where Diesel dependencies
//! exist; `plata-core` is database-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod alerts;
pub mod profiles;
pub mod records;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from plata-core for convenience
pub use plata_core::errors::{DatabaseError, Error, Result};
