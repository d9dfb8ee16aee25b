//! Port contracts for category management.
//!
//! Ports define infrastructure-agnostic interfaces used by category
//! services.

pub mod repository;
pub mod task_counter;

pub use repository::{CategoryRepository, CategoryRepositoryError, CategoryRepositoryResult};
pub use task_counter::{TaskCountError, TaskCountResult, TaskCounter};
