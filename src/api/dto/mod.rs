//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies deserialize leniently (missing strings become empty) so
//! that field checks happen in the application DTOs and fail with the
//! service's validation error format.

pub mod attendee;
pub mod badge;
pub mod check_in;
pub mod event;
pub mod health;
pub mod pagination;
