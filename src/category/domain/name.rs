//! Validated category name with a normalized uniqueness key.

use super::CategoryDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a category name, matching the `VARCHAR(100)` column.
const MAX_NAME_LENGTH: usize = 100;

/// Validated category display name.
///
/// The display form keeps the caller's casing with surrounding whitespace
/// trimmed and inner runs collapsed to single spaces. Uniqueness is decided
/// on the lowercase [`normalized`](Self::normalized) form, so `"Work"` and
/// `" work "` name the same category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    /// Creates a validated category name.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryDomainError::EmptyCategoryName`] when the value is
    /// empty after whitespace cleanup, or
    /// [`CategoryDomainError::CategoryNameTooLong`] when it exceeds the
    /// persisted column width.
    pub fn new(value: impl Into<String>) -> Result<Self, CategoryDomainError> {
        let cleaned = value
            .into()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if cleaned.is_empty() {
            return Err(CategoryDomainError::EmptyCategoryName);
        }
        if cleaned.len() > MAX_NAME_LENGTH {
            return Err(CategoryDomainError::CategoryNameTooLong {
                limit: MAX_NAME_LENGTH,
            });
        }
        Ok(Self(cleaned))
    }

    /// Returns the display name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the lowercase key used for uniqueness comparisons.
    #[must_use]
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
