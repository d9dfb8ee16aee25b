//! Task lifecycle management for Taskboard.
//!
//! This module implements task records with validated titles, priorities,
//! references to an assignee and a category, and a closed status state
//! machine: tasks start in `Pending`, may only advance to `InProgress`, and
//! from there finish as `Completed` or `Cancelled`. Every status change goes
//! through the domain transition guard before it is persisted. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
