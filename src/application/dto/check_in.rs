//! Check-in public representation.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::CheckIn;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckInDto {
    pub check_in_id: i64,
    pub attendee_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<CheckIn> for CheckInDto {
    fn from(check_in: CheckIn) -> Self {
        Self {
            check_in_id: check_in.id,
            attendee_id: check_in.attendee_id,
            created_at: check_in.created_at,
        }
    }
}
