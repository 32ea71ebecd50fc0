//! API route configuration.

use crate::api::handlers::{
    attendee_badge_handler, check_in_handler, create_event_handler, event_attendees_handler,
    event_detail_handler, event_list_handler, register_attendee_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Registration API routes.
///
/// # Endpoints
///
/// - `POST /events`                          - Create an event
/// - `GET  /events`                          - List events (paginated, searchable)
/// - `GET  /events/{event_id}`               - Event with attendee count
/// - `POST /events/{event_id}/attendees`     - Register an attendee
/// - `GET  /events/{event_id}/attendees`     - List attendees (paginated, searchable)
/// - `GET  /attendees/{attendee_id}/badge`   - Attendee badge
/// - `POST /attendees/{attendee_id}/check-in` - Check an attendee in
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(event_list_handler).post(create_event_handler))
        .route("/events/{event_id}", get(event_detail_handler))
        .route(
            "/events/{event_id}/attendees",
            get(event_attendees_handler).post(register_attendee_handler),
        )
        .route("/attendees/{attendee_id}/badge", get(attendee_badge_handler))
        .route("/attendees/{attendee_id}/check-in", post(check_in_handler))
}
