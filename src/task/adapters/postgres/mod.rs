//! `PostgreSQL` adapters for task lifecycle ports.

pub mod models;
pub mod repository;
pub mod schema;

pub use repository::{PostgresTaskRepository, TaskPgPool};
