//! Diesel schema for shared task persistence.

diesel::table! {
    /// Shared task rows, one per task across both owners.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// User-visible task text.
        text -> Varchar,
        /// Completion flag.
        completed -> Bool,
        /// Owner name, `matheus` or `ana`.
        #[max_length = 50]
        owner -> Varchar,
        /// Importance flag; `NULL` reads as not important.
        important -> Nullable<Bool>,
        /// Optional deadline.
        due_date -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
