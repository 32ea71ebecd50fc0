//! DTOs for event endpoints.

use serde::{Deserialize, Serialize};

use crate::application::dto::{EventDto, EventRegistration};
use crate::error::AppError;

/// Request body of `POST /events`.
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub slug: String,

    pub details: Option<String>,

    pub maximum_attendees: Option<i32>,
}

impl TryFrom<CreateEventRequest> for EventRegistration {
    type Error = AppError;

    fn try_from(req: CreateEventRequest) -> Result<Self, Self::Error> {
        EventRegistration::new(req.title, req.slug, req.details, req.maximum_attendees)
    }
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub event: EventDto,
}

/// Response of `GET /events`.
#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub events: Vec<EventDto>,
    pub page_offset: u32,
    /// Number of events on this page.
    pub quantity: usize,
}
