//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod attendees;
pub mod check_ins;
pub mod events;
pub mod health;

pub use attendees::{attendee_badge_handler, event_attendees_handler, register_attendee_handler};
pub use check_ins::check_in_handler;
pub use events::{create_event_handler, event_detail_handler, event_list_handler};
pub use health::health_handler;
