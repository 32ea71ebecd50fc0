//! Attendee entity.

use chrono::{DateTime, Utc};

use crate::domain::identity::IdGenerator;

/// A person registered in an event.
///
/// `(email, event_id)` is unique. `checked_in_at` is the only field that
/// changes after registration and it is set at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct Attendee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub event_id: String,
    pub created_at: DateTime<Utc>,
    pub checked_in_at: Option<DateTime<Utc>>,
}

impl Attendee {
    /// Rebuilds an attendee from stored data.
    pub fn new(
        id: String,
        name: String,
        email: String,
        event_id: String,
        created_at: DateTime<Utc>,
        checked_in_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            event_id,
            created_at,
            checked_in_at,
        }
    }

    /// Builds a newly registered attendee: fresh identity, not checked in.
    pub fn register(
        ids: &dyn IdGenerator,
        name: String,
        email: String,
        event_id: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self::new(ids.next_id(), name, email, event_id, now, None)
    }

    pub fn is_checked_in(&self) -> bool {
        self.checked_in_at.is_some()
    }
}
