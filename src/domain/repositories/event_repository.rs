//! Repository trait for event data access.

use crate::domain::entities::{Event, EventWithAttendeeCount};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for events and event-scoped queries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgEventRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Persists a new event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EventAlreadyExists`] if the id or the slug is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, event: Event) -> Result<Option<Event>, AppError>;

    /// Finds an event by id together with its attendee count.
    ///
    /// An event without attendees is returned with `attendee_count = 0`.
    async fn get_by_id(&self, event_id: &str) -> Result<Option<EventWithAttendeeCount>, AppError>;

    async fn exists(&self, event_id: &str) -> Result<bool, AppError>;

    /// Returns true if the event has no maximum, or fewer attendees than its maximum.
    ///
    /// Returns `false` for an unknown event.
    async fn has_capacity(&self, event_id: &str) -> Result<bool, AppError>;

    /// Returns true if an attendee with this email is registered in the event.
    async fn attendee_exists(&self, email: &str, event_id: &str) -> Result<bool, AppError>;

    /// Lists events newest first, filtered by a case-insensitive title substring.
    ///
    /// # Arguments
    ///
    /// - `page` - Page index (0-based), multiplied by [`super::PAGE_SIZE`]
    /// - `query` - Title substring, empty for no filter
    async fn list(&self, page: u32, query: &str) -> Result<Vec<Event>, AppError>;
}
