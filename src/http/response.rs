//! HTTP response building module
//!
//! Provides builders for the response records handed back to the platform,
//! decoupled from rule evaluation logic.

use crate::event::{EdgeResponse, HeaderEntry, Headers};

const REDIRECT_STATUS: &str = "301";
const REDIRECT_DESCRIPTION: &str = "Moved Permanently";

/// Build a permanent redirect pointing at `location`
///
/// The location is emitted verbatim, empty strings included. Status is a
/// string because that is how the platform encodes it.
pub fn build_redirect(location: &str) -> EdgeResponse {
    let mut headers = Headers::new();
    headers.insert(
        "location".to_string(),
        vec![HeaderEntry::new("Location", location)],
    );

    EdgeResponse {
        status: REDIRECT_STATUS.to_string(),
        status_description: REDIRECT_DESCRIPTION.to_string(),
        headers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_redirect() {
        let response = build_redirect("/moved-here");
        assert_eq!(response.status, "301");
        assert_eq!(response.status_description, "Moved Permanently");

        let location = &response.headers["location"];
        assert_eq!(location.len(), 1);
        assert_eq!(location[0].key.as_deref(), Some("Location"));
        assert_eq!(location[0].value, "/moved-here");
    }

    #[test]
    fn test_build_redirect_empty_location() {
        let response = build_redirect("");
        assert_eq!(response.headers["location"][0].value, "");
    }
}
