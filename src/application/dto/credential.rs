//! Badge data derived from an attendee and its event.

use serde::Serialize;

/// Read-only credential composed at request time. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventCredentialDto {
    pub event_title: String,
    pub name: String,
    pub email: String,
}
