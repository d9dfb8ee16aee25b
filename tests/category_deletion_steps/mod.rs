//! Step definitions for category deletion scenarios.

pub mod given;
pub mod when;
pub mod world;
