//! Handler for the check-in endpoint.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::check_in::CheckInResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Checks an attendee in.
///
/// # Endpoint
///
/// `POST /attendees/{attendee_id}/check-in`
///
/// # Errors
///
/// - 404 if the attendee does not exist
/// - 409 if the attendee already checked in
pub async fn check_in_handler(
    State(state): State<AppState>,
    Path(attendee_id): Path<String>,
) -> Result<(StatusCode, Json<CheckInResponse>), AppError> {
    let check_in = state
        .check_in_service
        .make_event_check_in(&attendee_id)
        .await?;

    Ok((StatusCode::CREATED, Json(CheckInResponse { check_in })))
}
