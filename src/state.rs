//! Shared application state injected into every handler.

use std::sync::Arc;
use url::Url;

use crate::application::services::{AttendeeService, CheckInService, EventService};
use crate::domain::identity::IdGenerator;
use crate::infrastructure::Repositories;

/// Services wired over one storage backend.
///
/// Cloned per request by axum; all fields are reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub event_service: Arc<EventService>,
    pub attendee_service: Arc<AttendeeService>,
    pub check_in_service: Arc<CheckInService>,
    /// Name of the storage backend, reported by the health check.
    pub storage_backend: &'static str,
    /// Base URL for badge check-in links.
    pub public_base_url: Option<Url>,
}

impl AppState {
    /// Builds the service graph: check-ins depend on attendees, attendees on events.
    pub fn new(
        repositories: Repositories,
        ids: Arc<dyn IdGenerator>,
        public_base_url: Option<Url>,
    ) -> Self {
        let event_service = Arc::new(EventService::new(repositories.events, ids.clone()));
        let attendee_service = Arc::new(AttendeeService::new(
            repositories.attendees,
            event_service.clone(),
            ids,
        ));
        let check_in_service = Arc::new(CheckInService::new(
            repositories.check_ins,
            attendee_service.clone(),
        ));

        Self {
            event_service,
            attendee_service,
            check_in_service,
            storage_backend: repositories.backend,
            public_base_url,
        }
    }
}
