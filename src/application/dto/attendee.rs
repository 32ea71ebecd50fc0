//! Attendee registration input and public representation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

use crate::domain::entities::Attendee;
use crate::error::AppError;
use crate::utils::validators::{EMAIL_REGEX, NAME_REGEX};

/// Validated data for registering an attendee in an event.
#[derive(Debug, Clone, Validate)]
pub struct AttendeeRegistration {
    #[validate(regex(path = *NAME_REGEX, message = "The name is invalid."))]
    pub name: String,

    #[validate(regex(path = *EMAIL_REGEX, message = "The email is invalid."))]
    pub email: String,

    #[validate(length(min = 1, message = "The event id is missing."))]
    pub event_id: String,
}

impl AttendeeRegistration {
    /// Builds and validates registration data.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is not at least 4 letters
    /// or spaces, the email is malformed, or the event id is empty.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        event_id: impl Into<String>,
    ) -> Result<Self, AppError> {
        let registration = Self {
            name: name.into(),
            email: email.into(),
            event_id: event_id.into(),
        };
        registration.validate()?;
        Ok(registration)
    }
}

/// Public representation of an attendee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendeeDto {
    pub attendee_id: String,
    pub name: String,
    pub email: String,
    pub event_id: String,
    pub created_at: DateTime<Utc>,
    pub checked_in_at: Option<DateTime<Utc>>,
}

impl From<Attendee> for AttendeeDto {
    fn from(attendee: Attendee) -> Self {
        Self {
            attendee_id: attendee.id,
            name: attendee.name,
            email: attendee.email,
            event_id: attendee.event_id,
            created_at: attendee.created_at,
            checked_in_at: attendee.checked_in_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_registration() {
        let registration = AttendeeRegistration::new("Ana Silva", "ana@example.com", "evt-1");
        assert!(registration.is_ok());
    }

    #[test]
    fn test_invalid_email() {
        let err = AttendeeRegistration::new("Ana Silva", "ana-at-example", "evt-1").unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "The email is invalid.");
    }

    #[test]
    fn test_invalid_name() {
        let err = AttendeeRegistration::new("Al", "al@example.com", "evt-1").unwrap_err();
        assert_eq!(err.to_string(), "The name is invalid.");

        assert!(AttendeeRegistration::new("Ana 99", "ana@example.com", "evt-1").is_err());
    }

    #[test]
    fn test_missing_event_id() {
        let err = AttendeeRegistration::new("Ana Silva", "ana@example.com", "").unwrap_err();
        assert_eq!(err.to_string(), "The event id is missing.");
    }

    #[test]
    fn test_all_invalid_fields_reported() {
        let err = AttendeeRegistration::new("A", "x", "").unwrap_err();

        let AppError::Validation { details, .. } = err else {
            panic!("expected validation error");
        };
        assert!(details.get("name").is_some());
        assert!(details.get("email").is_some());
        assert!(details.get("event_id").is_some());
    }
}
