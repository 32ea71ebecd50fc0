//! Repository trait definitions for the domain layer.
//!
//! These traits are the storage contract the services depend on. Implementations
//! live in `crate::infrastructure` (PostgreSQL and in-memory); mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Contract
//!
//! - `create` methods return `Ok(None)` when storage accepted the call but
//!   produced no record; services turn that into a `*NotCreated` error.
//! - Integrity violations are translated into domain errors at this boundary
//!   (duplicate attendee email, duplicate slug, second check-in) and are never
//!   surfaced as raw storage errors.
//! - Listing is paginated by page index with a fixed [`PAGE_SIZE`].

pub mod attendee_repository;
pub mod check_in_repository;
pub mod event_repository;

pub use attendee_repository::AttendeeRepository;
pub use check_in_repository::CheckInRepository;
pub use event_repository::EventRepository;

#[cfg(test)]
pub use attendee_repository::MockAttendeeRepository;
#[cfg(test)]
pub use check_in_repository::MockCheckInRepository;
#[cfg(test)]
pub use event_repository::MockEventRepository;

/// Number of items per listing page.
pub const PAGE_SIZE: i64 = 10;

/// Converts a page index into a row offset.
pub fn page_to_offset(page: u32) -> i64 {
    i64::from(page) * PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_to_offset() {
        assert_eq!(page_to_offset(0), 0);
        assert_eq!(page_to_offset(1), 10);
        assert_eq!(page_to_offset(7), 70);
    }
}
