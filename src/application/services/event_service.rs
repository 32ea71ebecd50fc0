//! Event management service.

use chrono::Utc;
use std::sync::Arc;

use crate::application::dto::{EventDto, EventRegistration};
use crate::domain::entities::Event;
use crate::domain::identity::IdGenerator;
use crate::domain::repositories::EventRepository;
use crate::error::AppError;

/// Service owning event creation and event-scoped queries.
///
/// The queries (`check_event_existence`, `check_attendee_in_event`,
/// `evaluate_event_capacity`) are the building blocks of the registration
/// gate in [`super::AttendeeService`].
pub struct EventService<R: EventRepository + ?Sized = dyn EventRepository> {
    repository: Arc<R>,
    ids: Arc<dyn IdGenerator>,
}

impl<R: EventRepository + ?Sized> EventService<R> {
    /// Creates a new event service.
    pub fn new(repository: Arc<R>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repository, ids }
    }

    /// Creates an event from validated registration data.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EventAlreadyExists`] if the generated id, or the
    /// slug, is already taken.
    /// Returns [`AppError::EventNotCreated`] if storage returned no record.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_event(&self, data: EventRegistration) -> Result<EventDto, AppError> {
        let event = Event::register(
            self.ids.as_ref(),
            data.title,
            data.slug,
            data.details,
            data.maximum_attendees,
            Utc::now(),
        );

        if self.repository.exists(&event.id).await? {
            return Err(AppError::EventAlreadyExists {
                field: "id",
                value: event.id,
            });
        }

        let slug = event.slug.clone();
        let created = self
            .repository
            .create(event)
            .await?
            .ok_or(AppError::EventNotCreated { slug })?;

        tracing::info!(event_id = %created.id, slug = %created.slug, "Event created");
        metrics::counter!("pass_in_events_created_total").increment(1);

        Ok(created.into())
    }

    /// Fetches an event together with its attendee count.
    ///
    /// Returns `Ok(None)` if the event does not exist; the caller decides
    /// whether that is an error.
    pub async fn get_event_data(&self, event_id: &str) -> Result<Option<EventDto>, AppError> {
        Ok(self.repository.get_by_id(event_id).await?.map(EventDto::from))
    }

    pub async fn check_event_existence(&self, event_id: &str) -> Result<bool, AppError> {
        self.repository.exists(event_id).await
    }

    pub async fn check_attendee_in_event(
        &self,
        attendee_email: &str,
        event_id: &str,
    ) -> Result<bool, AppError> {
        self.repository.attendee_exists(attendee_email, event_id).await
    }

    /// Returns true if the event is unlimited or below its maximum.
    pub async fn evaluate_event_capacity(&self, event_id: &str) -> Result<bool, AppError> {
        self.repository.has_capacity(event_id).await
    }

    /// Lists one page of events, newest first, filtered by title.
    ///
    /// # Arguments
    ///
    /// - `page` - Page index (0-based); pages hold
    ///   [`crate::domain::repositories::PAGE_SIZE`] events
    /// - `query` - Case-insensitive title substring, empty for all events
    pub async fn list_events(&self, page: u32, query: &str) -> Result<Vec<EventDto>, AppError> {
        let events = self.repository.list(page, query).await?;
        Ok(events.into_iter().map(EventDto::from).collect())
    }
}
