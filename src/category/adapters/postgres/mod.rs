//! `PostgreSQL` adapters for category ports.

pub mod models;
pub mod repository;
pub mod schema;

pub use repository::{CategoryPgPool, PostgresCategoryRepository};
