//! Input and output data of the services.
//!
//! Registration DTOs validate their fields at construction time with
//! `validator`, so malformed input never reaches a service. Output DTOs are
//! the public representation of entities and serialize directly to JSON.

pub mod attendee;
pub mod check_in;
pub mod credential;
pub mod event;

pub use attendee::{AttendeeDto, AttendeeRegistration};
pub use check_in::CheckInDto;
pub use credential::EventCredentialDto;
pub use event::{EventDto, EventRegistration};
