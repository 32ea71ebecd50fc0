//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Queries are checked at runtime (`query_as` over `FromRow` rows), so the
//! crate builds without a live database.
//!
//! # Repositories
//!
//! - [`PgEventRepository`] - Events, attendee counts and capacity queries
//! - [`PgAttendeeRepository`] - Attendee registration and listing
//! - [`PgCheckInRepository`] - Check-in records

pub mod pg_attendee_repository;
pub mod pg_check_in_repository;
pub mod pg_event_repository;

pub use pg_attendee_repository::PgAttendeeRepository;
pub use pg_check_in_repository::PgCheckInRepository;
pub use pg_event_repository::PgEventRepository;
