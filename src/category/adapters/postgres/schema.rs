//! Diesel schema for category persistence.

diesel::table! {
    /// Category records.
    categories (id) {
        /// Category identifier.
        id -> Uuid,
        /// Display name with original casing.
        #[max_length = 100]
        name -> Varchar,
        /// Lowercase uniqueness key derived from the name.
        #[max_length = 100]
        name_key -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
