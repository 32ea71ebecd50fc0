//! Domain layer containing the registration entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Event, attendee and check-in data structures
//! - [`identity`] - Identifier generation for new entities
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business rules (the registration and check-in gates) live in
//!   [`crate::application::services`]
//!
//! # Lifecycle
//!
//! 1. An [`entities::Event`] is created once and never modified
//! 2. [`entities::Attendee`]s are registered into an event through the registration gate
//! 3. Each attendee may check in exactly once, producing a [`entities::CheckIn`]
//!    and setting the attendee's `checked_in_at`

pub mod entities;
pub mod identity;
pub mod repositories;
