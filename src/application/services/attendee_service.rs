//! Attendee registration service.

use chrono::Utc;
use std::sync::Arc;

use super::event_service::EventService;
use crate::application::dto::{AttendeeDto, AttendeeRegistration, EventCredentialDto};
use crate::domain::entities::Attendee;
use crate::domain::identity::IdGenerator;
use crate::domain::repositories::{AttendeeRepository, EventRepository};
use crate::error::{AppError, ErrorKind};

/// Service owning the registration gate and attendee queries.
///
/// # Registration Gate
///
/// [`AttendeeService::register_attendee_in_event`] runs its checks in a fixed
/// order and stops at the first failure:
///
/// 1. The event exists ([`AppError::EventNotFound`])
/// 2. The email is not yet registered in it ([`AppError::AttendeeAlreadyExists`])
/// 3. The event has a free seat ([`AppError::EventSoldOut`])
/// 4. The attendee is stored ([`AppError::AttendeeNotCreated`])
///
/// Storage enforces the same uniqueness and capacity rules again on insert,
/// so concurrent registrations that pass the gate together still cannot
/// overbook an event or register an email twice.
pub struct AttendeeService<
    A: AttendeeRepository + ?Sized = dyn AttendeeRepository,
    E: EventRepository + ?Sized = dyn EventRepository,
> {
    repository: Arc<A>,
    event_service: Arc<EventService<E>>,
    ids: Arc<dyn IdGenerator>,
}

impl<A, E> AttendeeService<A, E>
where
    A: AttendeeRepository + ?Sized,
    E: EventRepository + ?Sized,
{
    /// Creates a new attendee service.
    pub fn new(
        repository: Arc<A>,
        event_service: Arc<EventService<E>>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            repository,
            event_service,
            ids,
        }
    }

    /// Registers an attendee in an event through the registration gate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EventNotFound`] if the event does not exist.
    /// Returns [`AppError::AttendeeAlreadyExists`] if the email is already registered.
    /// Returns [`AppError::EventSoldOut`] if the event is full.
    /// Returns [`AppError::AttendeeNotCreated`] if storage returned no record.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn register_attendee_in_event(
        &self,
        data: AttendeeRegistration,
    ) -> Result<AttendeeDto, AppError> {
        if !self
            .event_service
            .check_event_existence(&data.event_id)
            .await?
        {
            return Err(rejected(AppError::EventNotFound {
                event_id: data.event_id,
            }));
        }

        if self
            .event_service
            .check_attendee_in_event(&data.email, &data.event_id)
            .await?
        {
            return Err(rejected(AppError::AttendeeAlreadyExists {
                email: data.email,
                event_id: data.event_id,
            }));
        }

        if !self
            .event_service
            .evaluate_event_capacity(&data.event_id)
            .await?
        {
            return Err(rejected(AppError::EventSoldOut {
                event_id: data.event_id,
            }));
        }

        let attendee = Attendee::register(
            self.ids.as_ref(),
            data.name,
            data.email.clone(),
            data.event_id.clone(),
            Utc::now(),
        );

        let created = match self.repository.create(attendee).await {
            Ok(Some(created)) => created,
            Ok(None) => {
                return Err(AppError::AttendeeNotCreated {
                    email: data.email,
                    event_id: data.event_id,
                });
            }
            // Lost a race against a concurrent registration.
            Err(e) if e.kind() != ErrorKind::Internal => return Err(rejected(e)),
            Err(e) => return Err(e),
        };

        tracing::info!(
            attendee_id = %created.id,
            event_id = %created.event_id,
            "Attendee registered"
        );
        metrics::counter!("pass_in_attendees_registered_total").increment(1);

        Ok(created.into())
    }

    /// Lists one page of an event's attendees, ordered by name descending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EventNotFound`] if the event does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_event_attendees(
        &self,
        event_id: &str,
        query: &str,
        page: u32,
    ) -> Result<Vec<AttendeeDto>, AppError> {
        if !self.event_service.check_event_existence(event_id).await? {
            return Err(AppError::EventNotFound {
                event_id: event_id.to_string(),
            });
        }

        let attendees = self
            .repository
            .list_by_event(event_id, query, page)
            .await?;

        Ok(attendees.into_iter().map(AttendeeDto::from).collect())
    }

    /// Counts an event's attendees matching the name filter.
    pub async fn get_total_attendees_in_event(
        &self,
        event_id: &str,
        query: &str,
    ) -> Result<i64, AppError> {
        self.repository.count_by_event(event_id, query).await
    }

    /// Fetches an attendee by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AttendeeNotFound`] if the attendee does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_attendee_data(&self, attendee_id: &str) -> Result<AttendeeDto, AppError> {
        self.repository
            .get_by_id(attendee_id)
            .await?
            .map(AttendeeDto::from)
            .ok_or_else(|| AppError::AttendeeNotFound {
                attendee_id: attendee_id.to_string(),
            })
    }

    /// Composes the badge credential of an attendee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AttendeeNotFound`] if the attendee does not exist.
    /// Returns [`AppError::EventNotFound`] if the attendee's event is gone.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_attendee_event_credential(
        &self,
        attendee_id: &str,
    ) -> Result<EventCredentialDto, AppError> {
        let attendee = self.get_attendee_data(attendee_id).await?;

        let event = self
            .event_service
            .get_event_data(&attendee.event_id)
            .await?
            .ok_or_else(|| AppError::EventNotFound {
                event_id: attendee.event_id.clone(),
            })?;

        Ok(EventCredentialDto {
            event_title: event.title,
            name: attendee.name,
            email: attendee.email,
        })
    }
}

/// Records a rejected registration and hands the error back.
fn rejected(err: AppError) -> AppError {
    tracing::info!(reason = err.code(), error = %err, "Registration rejected");
    metrics::counter!("pass_in_registrations_rejected_total", "reason" => err.code())
        .increment(1);
    err
}
