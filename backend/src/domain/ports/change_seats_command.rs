//! Driving port for changing the seat capacity of a webinar.
//!
//! Only the organizer may change seats, seats may only grow, and the cap is
//! [`MAX_WEBINAR_SEATS`](crate::domain::MAX_WEBINAR_SEATS). Failures are
//! returned as [`ChangeSeatsError`] so callers can match on each outcome;
//! adapters that need a transport error convert it into [`Error`].

use async_trait::async_trait;
use serde_json::json;

use crate::domain::{Error, User, UserId, WebinarId, WebinarSeatsError};

use super::WebinarRepositoryError;

/// Request to change the seats of one webinar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSeatsRequest {
    pub user: User,
    pub webinar_id: WebinarId,
    pub seats: u32,
}

/// Outcome of a successful seat change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSeatsResponse {
    pub webinar_id: WebinarId,
    pub seats: u32,
    /// Revision the caller's write was checked against.
    pub revision: u32,
}

/// Reasons a seat change is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangeSeatsError {
    #[error("Webinar not found")]
    WebinarNotFound { id: WebinarId },
    #[error("User is not allowed to update this webinar")]
    NotOrganizer { user_id: UserId, webinar_id: WebinarId },
    #[error(transparent)]
    Seats(#[from] WebinarSeatsError),
    #[error("Webinar was modified concurrently")]
    Conflict { expected: u32, actual: u32 },
    #[error(transparent)]
    Repository(WebinarRepositoryError),
}

impl From<ChangeSeatsError> for Error {
    fn from(value: ChangeSeatsError) -> Self {
        let message = value.to_string();
        match value {
            ChangeSeatsError::WebinarNotFound { .. } => Error::not_found(message),
            ChangeSeatsError::NotOrganizer { .. } => Error::forbidden(message),
            ChangeSeatsError::Seats(WebinarSeatsError::ReduceSeats { current, requested }) => {
                Error::invalid_request(message).with_details(json!({
                    "code": "reduce_seats",
                    "currentSeats": current,
                    "requestedSeats": requested,
                }))
            }
            ChangeSeatsError::Seats(WebinarSeatsError::TooManySeats { max, requested }) => {
                Error::invalid_request(message).with_details(json!({
                    "code": "too_many_seats",
                    "maxSeats": max,
                    "requestedSeats": requested,
                }))
            }
            ChangeSeatsError::Conflict { expected, actual } => {
                Error::conflict(message).with_details(json!({
                    "code": "revision_mismatch",
                    "expectedRevision": expected,
                    "actualRevision": actual,
                }))
            }
            ChangeSeatsError::Repository(WebinarRepositoryError::Connection { message: cause }) => {
                Error::service_unavailable(format!("webinar repository unavailable: {cause}"))
            }
            ChangeSeatsError::Repository(error) => {
                Error::internal(format!("webinar repository error: {error}"))
            }
        }
    }
}

/// Driving port for webinar seat changes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChangeSeatsCommand: Send + Sync {
    /// Change the seats of `request.webinar_id` on behalf of `request.user`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use webinars_backend::domain::{User, UserId, WebinarId};
    /// # use webinars_backend::domain::ports::{
    /// #     ChangeSeatsCommand, ChangeSeatsError, ChangeSeatsRequest, FixtureChangeSeatsCommand,
    /// # };
    /// # async fn example() -> Result<(), ChangeSeatsError> {
    /// let command = FixtureChangeSeatsCommand;
    /// let response = command
    ///     .change_seats(ChangeSeatsRequest {
    ///         user: User::new(UserId::new("alice").expect("valid id")),
    ///         webinar_id: WebinarId::new("webinar-id").expect("valid id"),
    ///         seats: 200,
    ///     })
    ///     .await?;
    /// assert_eq!(response.seats, 200);
    /// # Ok(())
    /// # }
    /// ```
    async fn change_seats(
        &self,
        request: ChangeSeatsRequest,
    ) -> Result<ChangeSeatsResponse, ChangeSeatsError>;
}

/// Fixture command that accepts every request without persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureChangeSeatsCommand;

#[async_trait]
impl ChangeSeatsCommand for FixtureChangeSeatsCommand {
    async fn change_seats(
        &self,
        request: ChangeSeatsRequest,
    ) -> Result<ChangeSeatsResponse, ChangeSeatsError> {
        Ok(ChangeSeatsResponse {
            webinar_id: request.webinar_id,
            seats: request.seats,
            revision: crate::domain::INITIAL_REVISION,
        })
    }
}
