//! Check-in entity.

use chrono::{DateTime, Utc};

/// The check-in record of an attendee. Its id is assigned by storage.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckIn {
    pub id: i64,
    pub attendee_id: String,
    pub created_at: DateTime<Utc>,
}

impl CheckIn {
    pub fn new(id: i64, attendee_id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            attendee_id,
            created_at,
        }
    }
}
