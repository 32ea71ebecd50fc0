//! Helper functions shared by the storage and API layers.
//!
//! - [`db_error`] - Classification of PostgreSQL integrity violations
//! - [`search`] - Case-insensitive substring filters for listings
//! - [`validators`] - Input patterns for registration fields
//! - [`badge_url`] - Check-in links printed on badges

pub mod badge_url;
pub mod db_error;
pub mod search;
pub mod validators;
