//! Domain model for tasks and their lifecycle.
//!
//! The task domain models task creation, field updates, and validated status
//! transitions while keeping all infrastructure concerns outside of the
//! domain boundary.

mod error;
mod ids;
mod priority;
mod status;
mod task;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use priority::TaskPriority;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task, TaskTitle};
