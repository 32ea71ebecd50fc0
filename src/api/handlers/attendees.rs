//! Handlers for attendee endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::dto::attendee::{AttendeeListResponse, AttendeeResponse, RegisterAttendeeRequest};
use crate::api::dto::badge::{BadgeDto, BadgeResponse};
use crate::api::dto::pagination::PageParams;
use crate::application::dto::AttendeeRegistration;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::badge_url::check_in_url;

/// Registers an attendee in an event.
///
/// # Endpoint
///
/// `POST /events/{event_id}/attendees`
///
/// # Request Body
///
/// ```json
/// { "name": "Ana Silva", "email": "ana@example.com" }
/// ```
///
/// # Errors
///
/// - 422 if the name or email is invalid
/// - 404 if the event does not exist
/// - 409 if the email is already registered or the event is sold out
pub async fn register_attendee_handler(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(payload): Json<RegisterAttendeeRequest>,
) -> Result<(StatusCode, Json<AttendeeResponse>), AppError> {
    let registration = AttendeeRegistration::new(payload.name, payload.email, event_id)?;
    let attendee = state
        .attendee_service
        .register_attendee_in_event(registration)
        .await?;

    Ok((StatusCode::CREATED, Json(AttendeeResponse { attendee })))
}

/// Lists an event's attendees, ten per page, with the filtered total.
///
/// # Endpoint
///
/// `GET /events/{event_id}/attendees?page_offset=0&query=ana`
///
/// # Errors
///
/// Returns 404 if the event does not exist.
pub async fn event_attendees_handler(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<Json<AttendeeListResponse>, AppError> {
    let (attendees, total) = tokio::try_join!(
        state
            .attendee_service
            .get_event_attendees(&event_id, params.query(), params.page()),
        state
            .attendee_service
            .get_total_attendees_in_event(&event_id, params.query())
    )?;

    Ok(Json(AttendeeListResponse {
        attendees,
        total,
        page_offset: params.page(),
    }))
}

/// Returns the badge of an attendee.
///
/// # Endpoint
///
/// `GET /attendees/{attendee_id}/badge`
///
/// `check_in_url` is only set when a public base URL is configured.
pub async fn attendee_badge_handler(
    State(state): State<AppState>,
    Path(attendee_id): Path<String>,
) -> Result<Json<BadgeResponse>, AppError> {
    let credential = state
        .attendee_service
        .get_attendee_event_credential(&attendee_id)
        .await?;

    let check_in_url = match state.public_base_url.as_ref() {
        Some(base) => Some(
            check_in_url(base, &attendee_id)
                .map_err(|e| {
                    AppError::internal(
                        "Failed to build check-in URL",
                        serde_json::json!({"reason": e.to_string()}),
                    )
                })?
                .to_string(),
        ),
        None => None,
    };

    Ok(Json(BadgeResponse {
        badge: BadgeDto::new(credential, check_in_url),
    }))
}
