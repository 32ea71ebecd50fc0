//! Application layer: validated inputs, public representations and services.
//!
//! Services coordinate repository calls and enforce the registration rules.
//! They consume repository traits and hand [`dto`] values to the HTTP layer.
//!
//! # Available Services
//!
//! - [`services::event_service::EventService`] - Event creation, lookup and capacity
//! - [`services::attendee_service::AttendeeService`] - The registration gate and badges
//! - [`services::check_in_service::CheckInService`] - The check-in gate

pub mod dto;
pub mod services;
