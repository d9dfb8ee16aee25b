//! Diesel row models for category persistence.

use super::schema::categories;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for category records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CategoryRow {
    /// Category identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Lowercase uniqueness key.
    pub name_key: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for category records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = categories)]
pub struct NewCategoryRow {
    /// Category identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Lowercase uniqueness key.
    pub name_key: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Update model for category records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = categories)]
pub struct CategoryChangeset {
    /// Replacement display name.
    pub name: String,
    /// Replacement uniqueness key.
    pub name_key: String,
    /// Replacement description. `None` clears the column because the
    /// changeset always writes every field.
    #[diesel(treat_none_as_null = true)]
    pub description: Option<String>,
    /// Update timestamp.
    pub updated_at: DateTime<Utc>,
}
