//! Port contracts for task lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod references;
pub mod repository;

pub use references::{CategoryLookup, ReferenceLookupError, ReferenceLookupResult, UserLookup};
pub use repository::{TaskFilter, TaskRepository, TaskRepositoryError, TaskRepositoryResult};
