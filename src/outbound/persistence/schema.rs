//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; regenerate with
//! `diesel print-schema` when the schema changes.

diesel::table! {
    /// Insurance application intake records.
    ///
    /// The `vehicles` column holds the JSON-encoded vehicle list verbatim;
    /// it is validated at write time and never re-verified on read.
    applications (id) {
        /// Primary key assigned by the database sequence.
        id -> Int4,
        first_name -> Varchar,
        last_name -> Varchar,
        /// ISO 8601 date of birth, stored as entered.
        dob -> Varchar,
        street -> Varchar,
        city -> Varchar,
        state -> Varchar,
        zip_code -> Varchar,
        vehicles -> Text,
    }
}
