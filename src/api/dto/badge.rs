//! DTOs for the badge endpoint.

use serde::Serialize;

use crate::application::dto::EventCredentialDto;

/// Badge printed for an attendee.
#[derive(Debug, Serialize)]
pub struct BadgeDto {
    pub name: String,
    pub email: String,
    pub event_title: String,
    /// Link the organizers open to check the attendee in.
    pub check_in_url: Option<String>,
}

impl BadgeDto {
    pub fn new(credential: EventCredentialDto, check_in_url: Option<String>) -> Self {
        Self {
            name: credential.name,
            email: credential.email,
            event_title: credential.event_title,
            check_in_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BadgeResponse {
    pub badge: BadgeDto,
}
