//! Check-in service.

use std::sync::Arc;

use super::attendee_service::AttendeeService;
use crate::application::dto::CheckInDto;
use crate::domain::repositories::{AttendeeRepository, CheckInRepository, EventRepository};
use crate::error::AppError;

/// Service owning the check-in gate.
///
/// An attendee can check in once. The attendee's `checked_in_at` is consulted
/// first; the unique check-in per attendee in storage catches the race where
/// two check-ins pass that test together.
pub struct CheckInService<
    C: CheckInRepository + ?Sized = dyn CheckInRepository,
    A: AttendeeRepository + ?Sized = dyn AttendeeRepository,
    E: EventRepository + ?Sized = dyn EventRepository,
> {
    repository: Arc<C>,
    attendee_service: Arc<AttendeeService<A, E>>,
}

impl<C, A, E> CheckInService<C, A, E>
where
    C: CheckInRepository + ?Sized,
    A: AttendeeRepository + ?Sized,
    E: EventRepository + ?Sized,
{
    pub fn new(repository: Arc<C>, attendee_service: Arc<AttendeeService<A, E>>) -> Self {
        Self {
            repository,
            attendee_service,
        }
    }

    /// Checks an attendee in.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AttendeeNotFound`] if the attendee does not exist.
    /// Returns [`AppError::AlreadyCheckedIn`] if the attendee already checked in.
    /// Returns [`AppError::CheckInNotRegistered`] if storage returned no record.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn make_event_check_in(&self, attendee_id: &str) -> Result<CheckInDto, AppError> {
        let attendee = self.attendee_service.get_attendee_data(attendee_id).await?;

        if attendee.checked_in_at.is_some() {
            tracing::info!(attendee_id, "Attendee already checked in");
            return Err(AppError::AlreadyCheckedIn {
                attendee_id: attendee.attendee_id,
            });
        }

        let check_in = self
            .repository
            .create(&attendee.attendee_id)
            .await?
            .ok_or_else(|| AppError::CheckInNotRegistered {
                attendee_id: attendee.attendee_id.clone(),
            })?;

        tracing::info!(
            attendee_id = %check_in.attendee_id,
            event_id = %attendee.event_id,
            "Attendee checked in"
        );
        metrics::counter!("pass_in_check_ins_total").increment(1);

        Ok(check_in.into())
    }
}
