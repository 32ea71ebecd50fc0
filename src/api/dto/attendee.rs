//! DTOs for attendee endpoints.

use serde::{Deserialize, Serialize};

use crate::application::dto::AttendeeDto;

/// Request body of `POST /events/{event_id}/attendees`.
#[derive(Debug, Deserialize)]
pub struct RegisterAttendeeRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct AttendeeResponse {
    pub attendee: AttendeeDto,
}

/// Response of `GET /events/{event_id}/attendees`.
#[derive(Debug, Serialize)]
pub struct AttendeeListResponse {
    pub attendees: Vec<AttendeeDto>,
    /// Attendees matching the filter across all pages.
    pub total: i64,
    pub page_offset: u32,
}
