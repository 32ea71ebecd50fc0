//! Pagination and search query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// `?page_offset=&query=` parameters of the listing endpoints.
///
/// Uses `serde_with` to parse the page index from the query string as an
/// integer; a non-numeric value is rejected with `400 Bad Request`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_offset: Option<u32>,

    #[serde(default)]
    pub query: Option<String>,
}

impl PageParams {
    /// Page index, 0 when absent.
    pub fn page(&self) -> u32 {
        self.page_offset.unwrap_or(0)
    }

    /// Search filter, empty when absent.
    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PageParams::default();
        assert_eq!(params.page(), 0);
        assert_eq!(params.query(), "");
    }

    #[test]
    fn test_parses_page_offset_as_integer() {
        let params: PageParams = serde_json::from_str(r#"{"page_offset": "3", "query": "summit"}"#).unwrap();

        assert_eq!(params.page(), 3);
        assert_eq!(params.query(), "summit");
    }

    #[test]
    fn test_non_numeric_page_offset_is_error() {
        assert!(serde_json::from_str::<PageParams>(r#"{"page_offset": "two"}"#).is_err());
        assert!(serde_json::from_str::<PageParams>(r#"{"page_offset": "-1"}"#).is_err());
    }
}
