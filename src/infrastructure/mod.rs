//! Infrastructure layer: storage backends for the domain repositories.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`memory`] - In-process store implementing every repository trait

pub mod memory;
pub mod persistence;

use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::{AttendeeRepository, CheckInRepository, EventRepository};
use memory::InMemoryStore;
use persistence::{PgAttendeeRepository, PgCheckInRepository, PgEventRepository};

/// The repositories of one storage backend, ready to be handed to the services.
#[derive(Clone)]
pub struct Repositories {
    pub events: Arc<dyn EventRepository>,
    pub attendees: Arc<dyn AttendeeRepository>,
    pub check_ins: Arc<dyn CheckInRepository>,
    pub backend: &'static str,
}

impl Repositories {
    /// PostgreSQL repositories sharing one connection pool.
    pub fn postgres(pool: PgPool) -> Self {
        let pool = Arc::new(pool);
        Self {
            events: Arc::new(PgEventRepository::new(pool.clone())),
            attendees: Arc::new(PgAttendeeRepository::new(pool.clone())),
            check_ins: Arc::new(PgCheckInRepository::new(pool)),
            backend: "postgres",
        }
    }

    /// A fresh, empty in-memory store behind all three repositories.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            events: store.clone(),
            attendees: store.clone(),
            check_ins: store,
            backend: "memory",
        }
    }
}
