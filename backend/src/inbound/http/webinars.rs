//! Webinar HTTP handlers.
//!
//! ```text
//! POST /webinars/{id}/seats
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::ChangeSeatsRequest;
use crate::domain::{Error, IdentifierValidationError, User, UserId, WebinarId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Success message returned after a seat change.
pub const SEATS_UPDATED_MESSAGE: &str = "Seats updated";

/// Request payload for changing a webinar's seat count.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSeatsBody {
    /// Requested total number of seats.
    #[schema(example = 30, minimum = 1, maximum = 1000)]
    pub seats: u32,
    /// Identifier of the user performing the change.
    #[schema(example = "test-user")]
    pub user_id: String,
}

/// Response payload for a successful seat change.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SeatsUpdatedResponse {
    #[schema(example = "Seats updated")]
    pub message: String,
}

fn invalid_identifier(field: &str, err: &IdentifierValidationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": field,
        "code": "invalid_identifier",
    }))
}

fn parse_request(webinar_id: String, body: ChangeSeatsBody) -> Result<ChangeSeatsRequest, Error> {
    let webinar_id = WebinarId::new(webinar_id).map_err(|err| invalid_identifier("id", &err))?;
    let user_id = UserId::new(body.user_id).map_err(|err| invalid_identifier("userId", &err))?;
    Ok(ChangeSeatsRequest {
        user: User::new(user_id),
        webinar_id,
        seats: body.seats,
    })
}

/// Change the number of seats of a webinar.
///
/// Only the organizer may change seats. The count may grow up to 1000 but
/// never shrink.
#[utoipa::path(
    post,
    path = "/webinars/{id}/seats",
    request_body = ChangeSeatsBody,
    params(("id" = String, Path, description = "Webinar identifier")),
    responses(
        (status = 200, description = "Seats updated", body = SeatsUpdatedResponse),
        (status = 400, description = "Invalid request or seat rule violated", body = ErrorBody),
        (status = 403, description = "User is not the organizer", body = ErrorBody),
        (status = 404, description = "Webinar not found", body = ErrorBody),
        (status = 409, description = "Webinar was modified concurrently", body = ErrorBody),
        (status = 503, description = "Webinar store unavailable", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["webinars"],
    operation_id = "changeWebinarSeats"
)]
#[post("/webinars/{id}/seats")]
pub async fn change_seats(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ChangeSeatsBody>,
) -> ApiResult<web::Json<SeatsUpdatedResponse>> {
    let request = parse_request(path.into_inner(), payload.into_inner())?;
    state
        .change_seats
        .change_seats(request)
        .await
        .map_err(Error::from)?;

    Ok(web::Json(SeatsUpdatedResponse {
        message: SEATS_UPDATED_MESSAGE.to_owned(),
    }))
}

#[cfg(test)]
#[path = "webinars_tests.rs"]
mod tests;
