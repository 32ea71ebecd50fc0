//! Core domain entities representing the registration data model.
//!
//! Entities are plain data structures. New entities are built through
//! factory functions that take an [`crate::domain::identity::IdGenerator`]
//! and a timestamp; `new` constructors rebuild entities loaded from storage.
//!
//! # Entity Types
//!
//! - [`Event`] - An event attendees can register for
//! - [`Attendee`] - A person registered in exactly one event
//! - [`CheckIn`] - The single check-in record of an attendee

pub mod attendee;
pub mod check_in;
pub mod event;

pub use attendee::Attendee;
pub use check_in::CheckIn;
pub use event::{Event, EventWithAttendeeCount};
