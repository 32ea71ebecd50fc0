//! Repository trait for check-in data access.

use crate::domain::entities::CheckIn;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for check-ins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckInRepository: Send + Sync {
    /// Records the check-in of an attendee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AlreadyCheckedIn`] if the attendee already has a check-in.
    /// Returns [`AppError::AttendeeNotFound`] if the attendee does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, attendee_id: &str) -> Result<Option<CheckIn>, AppError>;
}
