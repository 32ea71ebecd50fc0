//! Event registration input and public representation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

use crate::domain::entities::{Event, EventWithAttendeeCount};
use crate::error::AppError;

/// Validated data for creating an event.
#[derive(Debug, Clone, Validate)]
pub struct EventRegistration {
    #[validate(length(min = 3, message = "The event title should have at least 3 characters."))]
    pub title: String,

    #[validate(length(min = 3, message = "The event slug should have at least 3 characters."))]
    pub slug: String,

    pub details: Option<String>,

    #[validate(range(min = 1, message = "'maximum attendees' should be a positive integer."))]
    pub maximum_attendees: Option<i32>,
}

impl EventRegistration {
    /// Builds and validates registration data.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title or slug is shorter than
    /// 3 characters, or `maximum_attendees` is not positive.
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        details: Option<String>,
        maximum_attendees: Option<i32>,
    ) -> Result<Self, AppError> {
        let registration = Self {
            title: title.into(),
            slug: slug.into(),
            details,
            maximum_attendees,
        };
        registration.validate()?;
        Ok(registration)
    }
}

/// Public representation of an event.
///
/// `attendee_amount` is only present when the event was loaded with its count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDto {
    pub event_id: String,
    pub title: String,
    pub slug: String,
    pub details: Option<String>,
    pub maximum_attendees: Option<i32>,
    pub created_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendee_amount: Option<i64>,
}

impl From<Event> for EventDto {
    fn from(event: Event) -> Self {
        Self {
            event_id: event.id,
            title: event.title,
            slug: event.slug,
            details: event.details,
            maximum_attendees: event.maximum_attendees,
            created_at: event.created_at,
            attendee_amount: None,
        }
    }
}

impl From<EventWithAttendeeCount> for EventDto {
    fn from(value: EventWithAttendeeCount) -> Self {
        Self {
            attendee_amount: Some(value.attendee_count),
            ..Self::from(value.event)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_registration() {
        let registration =
            EventRegistration::new("Tech Summit", "tech-summit", None, Some(2)).unwrap();

        assert_eq!(registration.title, "Tech Summit");
        assert_eq!(registration.maximum_attendees, Some(2));
    }

    #[test]
    fn test_unlimited_registration() {
        assert!(EventRegistration::new("Meetup", "meetup", Some("Monthly".into()), None).is_ok());
    }

    #[test]
    fn test_short_title_rejected() {
        let err = EventRegistration::new("TS", "tech-summit", None, None).unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(
            err.to_string(),
            "The event title should have at least 3 characters."
        );
    }

    #[test]
    fn test_missing_slug_rejected() {
        let err = EventRegistration::new("Tech Summit", "", None, None).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_non_positive_maximum_rejected() {
        assert!(EventRegistration::new("Tech Summit", "tech-summit", None, Some(0)).is_err());
        assert!(EventRegistration::new("Tech Summit", "tech-summit", None, Some(-5)).is_err());
    }

    #[test]
    fn test_dto_with_count() {
        let event = Event::new(
            "evt-1".to_string(),
            "Tech Summit".to_string(),
            "tech-summit".to_string(),
            None,
            Some(2),
            Utc::now(),
        );
        let dto = EventDto::from(EventWithAttendeeCount {
            event,
            attendee_count: 0,
        });

        assert_eq!(dto.event_id, "evt-1");
        assert_eq!(dto.attendee_amount, Some(0));

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["attendee_amount"], 0);
    }

    #[test]
    fn test_dto_without_count_omits_amount() {
        let event = Event::new(
            "evt-1".to_string(),
            "Tech Summit".to_string(),
            "tech-summit".to_string(),
            None,
            None,
            Utc::now(),
        );
        let json = serde_json::to_value(EventDto::from(event)).unwrap();

        assert!(json.get("attendee_amount").is_none());
        assert!(json["maximum_attendees"].is_null());
    }
}
