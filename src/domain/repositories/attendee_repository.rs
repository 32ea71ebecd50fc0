//! Repository trait for attendee data access.

use crate::domain::entities::Attendee;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for attendees.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAttendeeRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttendeeRepository: Send + Sync {
    /// Persists a newly registered attendee.
    ///
    /// Implementations re-check capacity atomically with the insert, so two
    /// concurrent registrations cannot both take the last seat.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AttendeeAlreadyExists`] if the email is already
    /// registered in the event.
    /// Returns [`AppError::EventSoldOut`] if the event filled up meanwhile.
    /// Returns [`AppError::EventNotFound`] if the event does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, attendee: Attendee) -> Result<Option<Attendee>, AppError>;

    /// Finds an attendee by id, including its check-in time if any.
    async fn get_by_id(&self, attendee_id: &str) -> Result<Option<Attendee>, AppError>;

    /// Lists attendees of an event ordered by name descending,
    /// filtered by a case-insensitive name substring.
    async fn list_by_event(
        &self,
        event_id: &str,
        query: &str,
        page: u32,
    ) -> Result<Vec<Attendee>, AppError>;

    /// Counts attendees of an event matching the name filter.
    async fn count_by_event(&self, event_id: &str, query: &str) -> Result<i64, AppError>;
}
