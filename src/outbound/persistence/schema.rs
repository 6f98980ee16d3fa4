//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the deployed schema exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// User records table.
    ///
    /// The `id` column is the primary key (UUID v4), assigned by the
    /// repository at insert time.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Given name; non-blank by application invariant.
        first_name -> Varchar,
        /// Family name; non-blank by application invariant.
        last_name -> Varchar,
    }
}
