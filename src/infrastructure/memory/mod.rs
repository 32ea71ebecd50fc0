//! In-process storage backend.
//!
//! [`InMemoryStore`] implements all three repository traits over one shared
//! state. Every operation runs under a single lock, so the uniqueness and
//! capacity rules PostgreSQL enforces with constraints and row locks hold here
//! as well. Used for local development (`STORAGE_BACKEND=memory`) and tests.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{Attendee, CheckIn, Event, EventWithAttendeeCount};
use crate::domain::repositories::{
    AttendeeRepository, CheckInRepository, EventRepository, PAGE_SIZE, page_to_offset,
};
use crate::error::AppError;
use crate::utils::search::matches_filter;

#[derive(Debug, Default)]
struct StoreState {
    events: Vec<Event>,
    attendees: Vec<Attendee>,
    check_ins: Vec<CheckIn>,
    last_check_in_id: i64,
}

impl StoreState {
    fn event(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == event_id)
    }

    fn attendee_count(&self, event_id: &str, query: &str) -> i64 {
        self.attendees
            .iter()
            .filter(|a| a.event_id == event_id && matches_filter(&a.name, query))
            .count() as i64
    }
}

/// Storage backend holding all data in process memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, AppError> {
        self.state
            .lock()
            .map_err(|_| AppError::internal("In-memory store is unavailable", json!({})))
    }
}

/// Returns one page of already ordered `items`.
fn page_of<T: Clone>(items: Vec<&T>, page: u32) -> Vec<T> {
    let offset = usize::try_from(page_to_offset(page)).unwrap_or(usize::MAX);
    items
        .into_iter()
        .skip(offset)
        .take(PAGE_SIZE as usize)
        .cloned()
        .collect()
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn create(&self, event: Event) -> Result<Option<Event>, AppError> {
        let mut state = self.lock()?;

        if state.event(&event.id).is_some() {
            return Err(AppError::EventAlreadyExists {
                field: "id",
                value: event.id,
            });
        }
        if state.events.iter().any(|e| e.slug == event.slug) {
            return Err(AppError::EventAlreadyExists {
                field: "slug",
                value: event.slug,
            });
        }

        state.events.push(event.clone());
        Ok(Some(event))
    }

    async fn get_by_id(&self, event_id: &str) -> Result<Option<EventWithAttendeeCount>, AppError> {
        let state = self.lock()?;

        Ok(state.event(event_id).map(|event| EventWithAttendeeCount {
            event: event.clone(),
            attendee_count: state.attendee_count(event_id, ""),
        }))
    }

    async fn exists(&self, event_id: &str) -> Result<bool, AppError> {
        Ok(self.lock()?.event(event_id).is_some())
    }

    async fn has_capacity(&self, event_id: &str) -> Result<bool, AppError> {
        let state = self.lock()?;

        Ok(state
            .event(event_id)
            .is_some_and(|event| event.has_capacity_for(state.attendee_count(event_id, ""))))
    }

    async fn attendee_exists(&self, email: &str, event_id: &str) -> Result<bool, AppError> {
        Ok(self
            .lock()?
            .attendees
            .iter()
            .any(|a| a.email == email && a.event_id == event_id))
    }

    async fn list(&self, page: u32, query: &str) -> Result<Vec<Event>, AppError> {
        let state = self.lock()?;

        let mut events: Vec<&Event> = state
            .events
            .iter()
            .rev()
            .filter(|e| matches_filter(&e.title, query))
            .collect();
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(page_of(events, page))
    }
}

#[async_trait]
impl AttendeeRepository for InMemoryStore {
    async fn create(&self, attendee: Attendee) -> Result<Option<Attendee>, AppError> {
        let mut state = self.lock()?;

        let Some(event) = state.event(&attendee.event_id) else {
            return Err(AppError::EventNotFound {
                event_id: attendee.event_id,
            });
        };

        let duplicate = state.attendees.iter().any(|a| {
            a.id == attendee.id || (a.email == attendee.email && a.event_id == attendee.event_id)
        });
        if duplicate {
            return Err(AppError::AttendeeAlreadyExists {
                email: attendee.email,
                event_id: attendee.event_id,
            });
        }

        if !event.has_capacity_for(state.attendee_count(&attendee.event_id, "")) {
            return Err(AppError::EventSoldOut {
                event_id: attendee.event_id,
            });
        }

        state.attendees.push(attendee.clone());
        Ok(Some(attendee))
    }

    async fn get_by_id(&self, attendee_id: &str) -> Result<Option<Attendee>, AppError> {
        Ok(self
            .lock()?
            .attendees
            .iter()
            .find(|a| a.id == attendee_id)
            .cloned())
    }

    async fn list_by_event(
        &self,
        event_id: &str,
        query: &str,
        page: u32,
    ) -> Result<Vec<Attendee>, AppError> {
        let state = self.lock()?;

        let mut attendees: Vec<&Attendee> = state
            .attendees
            .iter()
            .filter(|a| a.event_id == event_id && matches_filter(&a.name, query))
            .collect();
        attendees.sort_by(|a, b| b.name.cmp(&a.name));

        Ok(page_of(attendees, page))
    }

    async fn count_by_event(&self, event_id: &str, query: &str) -> Result<i64, AppError> {
        Ok(self.lock()?.attendee_count(event_id, query))
    }
}

#[async_trait]
impl CheckInRepository for InMemoryStore {
    async fn create(&self, attendee_id: &str) -> Result<Option<CheckIn>, AppError> {
        let mut state = self.lock()?;

        if state.check_ins.iter().any(|c| c.attendee_id == attendee_id) {
            return Err(AppError::AlreadyCheckedIn {
                attendee_id: attendee_id.to_string(),
            });
        }

        let now = Utc::now();
        let Some(attendee) = state.attendees.iter_mut().find(|a| a.id == attendee_id) else {
            return Err(AppError::AttendeeNotFound {
                attendee_id: attendee_id.to_string(),
            });
        };
        attendee.checked_in_at = Some(now);

        state.last_check_in_id += 1;
        let check_in = CheckIn::new(state.last_check_in_id, attendee_id.to_string(), now);
        state.check_ins.push(check_in.clone());

        Ok(Some(check_in))
    }
}
