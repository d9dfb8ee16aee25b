//! Application services for user account management.

mod directory;

pub use directory::{
    CreateUserRequest, UpdateUserRequest, UserDirectoryError, UserDirectoryResult,
    UserDirectoryService,
};
