//! Webinar aggregate and its seat capacity rules.
//!
//! A [`Webinar`] is immutable apart from its seat count, which only
//! [`Webinar::update_seats`] may change. Seat counts may grow but never shrink,
//! and never exceed [`MAX_WEBINAR_SEATS`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::{IdentifierValidationError, validate_identifier};
use super::UserId;

/// Upper bound on the seats a single webinar may offer.
pub const MAX_WEBINAR_SEATS: u32 = 1000;

/// Lower bound on the seats a webinar may offer.
pub const MIN_WEBINAR_SEATS: u32 = 1;

/// Revision assigned to a webinar that has never been updated.
pub const INITIAL_REVISION: u32 = 1;

/// Stable webinar identifier.
///
/// # Examples
/// ```
/// use webinars_backend::domain::WebinarId;
///
/// let id = WebinarId::new("webinar-id").expect("valid id");
/// assert_eq!(id.as_ref(), "webinar-id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WebinarId(String);

impl WebinarId {
    /// Validate and construct a [`WebinarId`].
    pub fn new(id: impl Into<String>) -> Result<Self, IdentifierValidationError> {
        let id = id.into();
        validate_identifier(&id, "webinar")?;
        Ok(Self(id))
    }
}

impl AsRef<str> for WebinarId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for WebinarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<WebinarId> for String {
    fn from(value: WebinarId) -> Self {
        value.0
    }
}

impl TryFrom<String> for WebinarId {
    type Error = IdentifierValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Errors raised when a webinar fails construction-time validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebinarValidationError {
    #[error("webinar title must not be empty")]
    EmptyTitle,
    #[error("webinar seats must be between {min} and {max}")]
    SeatsOutOfRange { min: u32, max: u32 },
    #[error("webinar must not end before it starts")]
    EndsBeforeStart,
}

/// Seat changes rejected by [`Webinar::update_seats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WebinarSeatsError {
    /// The requested count is below the current count.
    #[error("Webinar seats cannot be reduced")]
    ReduceSeats { current: u32, requested: u32 },
    /// The requested count exceeds [`MAX_WEBINAR_SEATS`].
    #[error("Webinar cannot have more than {max} seats")]
    TooManySeats { max: u32, requested: u32 },
}

/// Input for [`Webinar::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebinarDraft {
    pub id: WebinarId,
    pub organizer_id: UserId,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: u32,
}

/// A scheduled webinar.
///
/// ## Invariants
/// - `title` is non-empty once trimmed.
/// - `MIN_WEBINAR_SEATS <= seats <= MAX_WEBINAR_SEATS`.
/// - `end_date` does not precede `start_date`.
///
/// `revision` is an optimistic-concurrency stamp owned by the repository. The
/// aggregate carries it but never changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Webinar {
    id: WebinarId,
    organizer_id: UserId,
    title: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    seats: u32,
    revision: u32,
}

impl Webinar {
    /// Validate a draft into a webinar at [`INITIAL_REVISION`].
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use webinars_backend::domain::{UserId, Webinar, WebinarDraft, WebinarId};
    ///
    /// let webinar = Webinar::new(WebinarDraft {
    ///     id: WebinarId::new("webinar-id").expect("valid id"),
    ///     organizer_id: UserId::new("alice").expect("valid id"),
    ///     title: "Rust ownership in practice".to_owned(),
    ///     start_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ///     end_date: Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap(),
    ///     seats: 100,
    /// })
    /// .expect("valid webinar");
    /// assert_eq!(webinar.seats(), 100);
    /// assert_eq!(webinar.revision(), 1);
    /// ```
    pub fn new(draft: WebinarDraft) -> Result<Self, WebinarValidationError> {
        let WebinarDraft {
            id,
            organizer_id,
            title,
            start_date,
            end_date,
            seats,
        } = draft;

        if title.trim().is_empty() {
            return Err(WebinarValidationError::EmptyTitle);
        }
        if !(MIN_WEBINAR_SEATS..=MAX_WEBINAR_SEATS).contains(&seats) {
            return Err(WebinarValidationError::SeatsOutOfRange {
                min: MIN_WEBINAR_SEATS,
                max: MAX_WEBINAR_SEATS,
            });
        }
        if end_date < start_date {
            return Err(WebinarValidationError::EndsBeforeStart);
        }

        Ok(Self {
            id,
            organizer_id,
            title,
            start_date,
            end_date,
            seats,
            revision: INITIAL_REVISION,
        })
    }

    /// Replace the revision stamp, typically with the one read from storage.
    #[must_use]
    pub fn with_revision(mut self, revision: u32) -> Self {
        self.revision = revision;
        self
    }

    /// Change the number of seats.
    ///
    /// Succeeds iff `self.seats() <= new_seats <= MAX_WEBINAR_SEATS`. The
    /// decrease check runs first. On error the webinar is unchanged.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use webinars_backend::domain::{
    ///     UserId, Webinar, WebinarDraft, WebinarId, WebinarSeatsError,
    /// };
    ///
    /// let now = Utc::now();
    /// let mut webinar = Webinar::new(WebinarDraft {
    ///     id: WebinarId::new("webinar-id").expect("valid id"),
    ///     organizer_id: UserId::new("alice").expect("valid id"),
    ///     title: "Async Rust".to_owned(),
    ///     start_date: now,
    ///     end_date: now,
    ///     seats: 100,
    /// })
    /// .expect("valid webinar");
    ///
    /// assert!(matches!(
    ///     webinar.update_seats(50),
    ///     Err(WebinarSeatsError::ReduceSeats { current: 100, requested: 50 })
    /// ));
    /// webinar.update_seats(200).expect("growth is allowed");
    /// assert_eq!(webinar.seats(), 200);
    /// ```
    pub fn update_seats(&mut self, new_seats: u32) -> Result<(), WebinarSeatsError> {
        if new_seats < self.seats {
            return Err(WebinarSeatsError::ReduceSeats {
                current: self.seats,
                requested: new_seats,
            });
        }
        if new_seats > MAX_WEBINAR_SEATS {
            return Err(WebinarSeatsError::TooManySeats {
                max: MAX_WEBINAR_SEATS,
                requested: new_seats,
            });
        }
        self.seats = new_seats;
        Ok(())
    }

    /// Whether `user_id` organises this webinar.
    pub fn is_organized_by(&self, user_id: &UserId) -> bool {
        &self.organizer_id == user_id
    }

    pub fn id(&self) -> &WebinarId {
        &self.id
    }

    pub fn organizer_id(&self) -> &UserId {
        &self.organizer_id
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    pub fn seats(&self) -> u32 {
        self.seats
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }
}

#[cfg(test)]
#[path = "webinar_tests.rs"]
mod tests;
