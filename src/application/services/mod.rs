//! Business logic services for the application layer.
//!
//! Services compose each other: [`AttendeeService`] asks [`EventService`]
//! about events, [`CheckInService`] asks [`AttendeeService`] about attendees.

pub mod attendee_service;
pub mod check_in_service;
pub mod event_service;

pub use attendee_service::AttendeeService;
pub use check_in_service::CheckInService;
pub use event_service::EventService;
