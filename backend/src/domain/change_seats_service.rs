//! Seat change domain service.
//!
//! Implements the [`ChangeSeatsCommand`] driving port on top of a
//! [`WebinarRepository`]: load, authorise, apply the seat rule, then write
//! back under the webinar's revision stamp.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{
    ChangeSeatsCommand, ChangeSeatsError, ChangeSeatsRequest, ChangeSeatsResponse,
    WebinarRepository, WebinarRepositoryError,
};

fn map_repository_error(error: WebinarRepositoryError) -> ChangeSeatsError {
    match error {
        WebinarRepositoryError::RevisionMismatch { expected, actual } => {
            ChangeSeatsError::Conflict { expected, actual }
        }
        other => ChangeSeatsError::Repository(other),
    }
}

/// Webinar service implementing the seat change driving port.
#[derive(Clone)]
pub struct ChangeSeatsService<R> {
    webinar_repo: Arc<R>,
}

impl<R> ChangeSeatsService<R> {
    /// Create a new service with the webinar repository.
    pub fn new(webinar_repo: Arc<R>) -> Self {
        Self { webinar_repo }
    }
}

#[async_trait]
impl<R> ChangeSeatsCommand for ChangeSeatsService<R>
where
    R: WebinarRepository,
{
    async fn change_seats(
        &self,
        request: ChangeSeatsRequest,
    ) -> Result<ChangeSeatsResponse, ChangeSeatsError> {
        let ChangeSeatsRequest {
            user,
            webinar_id,
            seats,
        } = request;

        let Some(mut webinar) = self
            .webinar_repo
            .find_by_id(&webinar_id)
            .await
            .map_err(map_repository_error)?
        else {
            warn!(webinar_id = %webinar_id, "seat change rejected: webinar not found");
            return Err(ChangeSeatsError::WebinarNotFound { id: webinar_id });
        };

        if !webinar.is_organized_by(&user.id) {
            warn!(
                webinar_id = %webinar_id,
                user_id = %user.id,
                "seat change rejected: caller is not the organizer"
            );
            return Err(ChangeSeatsError::NotOrganizer {
                user_id: user.id,
                webinar_id,
            });
        }

        if let Err(error) = webinar.update_seats(seats) {
            warn!(webinar_id = %webinar_id, %error, "seat change rejected");
            return Err(error.into());
        }

        if let Err(error) = self.webinar_repo.update(&webinar).await {
            warn!(webinar_id = %webinar_id, %error, "seat change write failed");
            return Err(match error {
                WebinarRepositoryError::Missing { .. } => {
                    ChangeSeatsError::WebinarNotFound { id: webinar_id }
                }
                other => map_repository_error(other),
            });
        }

        info!(webinar_id = %webinar_id, seats, "webinar seats updated");
        Ok(ChangeSeatsResponse {
            webinar_id,
            seats: webinar.seats(),
            revision: webinar.revision(),
        })
    }
}

#[cfg(test)]
#[path = "change_seats_service_tests.rs"]
mod tests;
