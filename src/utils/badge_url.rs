//! Check-in links printed on attendee badges.

use url::Url;

/// Builds `{base}/attendees/{attendee_id}/check-in`.
///
/// A base URL with a path prefix keeps it, with or without a trailing slash.
pub fn check_in_url(base: &Url, attendee_id: &str) -> Result<Url, url::ParseError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(&format!("attendees/{attendee_id}/check-in"))
}
