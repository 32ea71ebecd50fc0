//! Event entity.

use chrono::{DateTime, Utc};

use crate::domain::identity::IdGenerator;

/// An event attendees can register for.
///
/// `maximum_attendees = None` means the event has unlimited capacity.
/// Events are immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub details: Option<String>,
    pub maximum_attendees: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Rebuilds an event from stored data.
    pub fn new(
        id: String,
        title: String,
        slug: String,
        details: Option<String>,
        maximum_attendees: Option<i32>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            slug,
            details,
            maximum_attendees,
            created_at,
        }
    }

    /// Builds a brand new event with a fresh identity.
    pub fn register(
        ids: &dyn IdGenerator,
        title: String,
        slug: String,
        details: Option<String>,
        maximum_attendees: Option<i32>,
        now: DateTime<Utc>,
    ) -> Self {
        Self::new(ids.next_id(), title, slug, details, maximum_attendees, now)
    }

    /// Returns true if another attendee fits, given the current registered count.
    pub fn has_capacity_for(&self, registered: i64) -> bool {
        self.maximum_attendees
            .is_none_or(|max| registered < i64::from(max))
    }
}

/// An event together with its current number of registered attendees.
#[derive(Debug, Clone, PartialEq)]
pub struct EventWithAttendeeCount {
    pub event: Event,
    pub attendee_count: i64,
}
