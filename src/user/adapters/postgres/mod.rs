//! `PostgreSQL` adapters for user account ports.

pub mod models;
pub mod repository;
pub mod schema;

pub use repository::{PostgresUserRepository, UserPgPool};
