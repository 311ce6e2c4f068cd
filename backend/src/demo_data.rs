//! Demo webinar seeded for local runs.
//!
//! Enabled with `WEBINARS_SEED_DEMO_WEBINAR=true`. The webinar matches the
//! one exercised by the HTTP scenarios: `test-webinar`, organised by
//! `test-user`, with ten seats.

use chrono::{DateTime, Duration, TimeZone, Utc};
use thiserror::Error;

use crate::domain::{
    IdentifierValidationError, UserId, Webinar, WebinarDraft, WebinarId, WebinarValidationError,
};

/// Identifier of the demo webinar.
pub const DEMO_WEBINAR_ID: &str = "test-webinar";
/// Organizer of the demo webinar.
pub const DEMO_ORGANIZER_ID: &str = "test-user";
/// Initial capacity of the demo webinar.
pub const DEMO_WEBINAR_SEATS: u32 = 10;

/// Errors raised while building the demo webinar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DemoDataError {
    #[error("demo identifier rejected: {0}")]
    Identifier(#[from] IdentifierValidationError),
    #[error("demo webinar rejected: {0}")]
    Webinar(#[from] WebinarValidationError),
    #[error("demo start date is not representable")]
    StartDate,
}

fn demo_start() -> Result<DateTime<Utc>, DemoDataError> {
    Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0)
        .single()
        .ok_or(DemoDataError::StartDate)
}

/// Build the demo webinar at its initial revision.
///
/// # Errors
///
/// Returns [`DemoDataError`] if any demo constant violates a domain rule.
pub fn demo_webinar() -> Result<Webinar, DemoDataError> {
    let start_date = demo_start()?;
    Ok(Webinar::new(WebinarDraft {
        id: WebinarId::new(DEMO_WEBINAR_ID)?,
        organizer_id: UserId::new(DEMO_ORGANIZER_ID)?,
        title: "Test webinar".to_owned(),
        start_date,
        end_date: start_date + Duration::hours(1),
        seats: DEMO_WEBINAR_SEATS,
    })?)
}
