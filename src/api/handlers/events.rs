//! Handlers for event endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::dto::event::{CreateEventRequest, EventListResponse, EventResponse};
use crate::api::dto::pagination::PageParams;
use crate::application::dto::EventRegistration;
use crate::error::AppError;
use crate::state::AppState;

/// Creates an event.
///
/// # Endpoint
///
/// `POST /events`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Tech Summit",
///   "slug": "tech-summit",
///   "details": "Yearly summit",   // optional
///   "maximum_attendees": 2        // optional, unlimited when absent
/// }
/// ```
///
/// # Errors
///
/// - 422 if the title or slug is shorter than 3 characters
/// - 409 if the slug is already taken
pub async fn create_event_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventResponse>), AppError> {
    let registration = EventRegistration::try_from(payload)?;
    let event = state.event_service.create_event(registration).await?;

    Ok((StatusCode::CREATED, Json(EventResponse { event })))
}

/// Lists events newest first, ten per page.
///
/// # Endpoint
///
/// `GET /events?page_offset=0&query=summit`
pub async fn event_list_handler(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<EventListResponse>, AppError> {
    let events = state
        .event_service
        .list_events(params.page(), params.query())
        .await?;

    Ok(Json(EventListResponse {
        quantity: events.len(),
        events,
        page_offset: params.page(),
    }))
}

/// Returns an event with its attendee count.
///
/// # Endpoint
///
/// `GET /events/{event_id}`
///
/// # Errors
///
/// Returns 404 if the event does not exist.
pub async fn event_detail_handler(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<EventResponse>, AppError> {
    let event = state
        .event_service
        .get_event_data(&event_id)
        .await?
        .ok_or(AppError::EventNotFound { event_id })?;

    Ok(Json(EventResponse { event }))
}
