//! PostgreSQL persistence adapter implementing the repository port.
//!
//! Adapters are thin translators between domain types and rows; they contain
//! no business logic.

mod diesel_application_repository;
mod diesel_error_mapping;
mod migrations;
mod models;
mod pool;
pub mod schema;

pub use diesel_application_repository::DieselApplicationRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
