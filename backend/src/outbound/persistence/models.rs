//! Internal Diesel row models. Never exposed outside the persistence adapter.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::webinars;

/// Row struct for reading from the webinars table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = webinars)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct WebinarRow {
    pub id: String,
    pub title: String,
    pub seats: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub organizer_id: String,
    pub revision: i32,
}

/// Insertable struct for creating webinar records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = webinars)]
pub(crate) struct NewWebinarRow<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub seats: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub organizer_id: &'a str,
    pub revision: i32,
}
