//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Scheduled webinars.
    ///
    /// `revision` is the optimistic-concurrency stamp; every successful
    /// update increments it by one.
    webinars (id) {
        /// Primary key: opaque webinar identifier.
        id -> Text,
        title -> Text,
        /// Seat capacity, constrained to 1..=1000 by a CHECK.
        seats -> Int4,
        start_date -> Timestamptz,
        end_date -> Timestamptz,
        /// Identifier of the organizing user.
        organizer_id -> Text,
        revision -> Int4,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}
