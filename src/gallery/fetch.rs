//! Request building and reply classification for the image-search API.
//!
//! The plugin never talks HTTP itself: it hands a [`FetchRequest`] to the host
//! and later receives a reply event. This module owns both ends of that
//! exchange: the URL and context map that go out, and the mapping from the
//! host's reply to a [`FetchOutcome`].

use crate::domain::error::{GalleryError, Result};
use crate::domain::{Category, FetchError, ImageRecord, Page};
use crate::gallery::cache::ResultSet;
use serde_json::Value;
use std::collections::BTreeMap;

/// Context key carrying the requested category.
const CONTEXT_CATEGORY: &str = "category";

/// Context key carrying the requested page.
const CONTEXT_PAGE: &str = "page";

/// Status the host uses when no HTTP response was received.
const HOST_TRANSPORT_FAILURE_STATUS: u16 = 400;

/// Result of one page fetch after classification.
pub type FetchOutcome = std::result::Result<ResultSet, FetchError>;

/// Address of one cached page.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageKey {
    /// Requested category.
    pub category: Category,
    /// Requested page.
    pub page: Page,
}

impl PageKey {
    /// Creates a key.
    #[must_use]
    pub const fn new(category: Category, page: Page) -> Self {
        Self { category, page }
    }

    /// Encodes the key as the context map echoed back with the reply.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (CONTEXT_CATEGORY.to_string(), self.category.as_str().to_string()),
            (CONTEXT_PAGE.to_string(), self.page.get().to_string()),
        ])
    }

    /// Recovers the key from a reply's context map.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        let category = Category::new(context.get(CONTEXT_CATEGORY)?).ok()?;
        let page = Page::new(context.get(CONTEXT_PAGE)?.parse().ok()?)?;
        Some(Self { category, page })
    }
}

/// Validated API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    base_url: String,
}

impl ApiEndpoint {
    /// Validates a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Config`] unless the URL starts with `http://` or
    /// `https://` and has a host part.
    ///
    /// # Examples
    ///
    /// ```
    /// use zgallery::gallery::ApiEndpoint;
    ///
    /// assert!(ApiEndpoint::parse("https://api.example.com/").is_ok());
    /// assert!(ApiEndpoint::parse("api.example.com").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim().trim_end_matches('/');
        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .ok_or_else(|| {
                GalleryError::Config(format!("api_url must start with http:// or https://: {raw}"))
            })?;
        if rest.is_empty() {
            return Err(GalleryError::Config(format!("api_url has no host: {raw}")));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the request for one page.
    #[must_use]
    pub fn request(&self, key: PageKey) -> FetchRequest {
        let url = format!(
            "{}/images?category={}&page={}",
            self.base_url,
            percent_encode(key.category.as_str()),
            key.page
        );
        FetchRequest { key, url }
    }
}

/// An outbound GET for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Slot the reply belongs to.
    pub key: PageKey,
    /// Fully built request URL.
    pub url: String,
}

/// Raw reply as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostReply {
    /// HTTP status code.
    pub status: u16,
    /// Response headers. Empty when the host synthesized the reply.
    pub headers: BTreeMap<String, String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl HostReply {
    /// Whether this reply stands for "no response received".
    ///
    /// The Zellij host reports transport failures as status 400 with no
    /// headers and the error text as body; real HTTP responses always carry
    /// headers.
    #[must_use]
    pub fn is_transport_failure(&self) -> bool {
        self.status == HOST_TRANSPORT_FAILURE_STATUS && self.headers.is_empty()
    }

    /// Classifies the reply into records or a [`FetchError`].
    #[must_use]
    pub fn classify(&self) -> FetchOutcome {
        if self.is_transport_failure() {
            return Err(FetchError::Network {
                reason: String::from_utf8_lossy(&self.body).trim().to_string(),
            });
        }

        match self.status {
            200..=299 => decode_result_set(&self.body).map_err(|e| {
                tracing::warn!(error = %e, "response body is not a record array");
                FetchError::Server {
                    status: self.status,
                }
            }),
            404 => Err(FetchError::NotFound {
                message: error_message(&self.body)
                    .unwrap_or_else(|| "No images found for this category".to_string()),
            }),
            status => Err(FetchError::Server { status }),
        }
    }
}

/// Decodes a JSON array of records, skipping elements that break the record
/// contract.
///
/// # Errors
///
/// Returns [`GalleryError::Decode`] if the body is not JSON or is not an
/// array.
pub fn decode_result_set(body: &[u8]) -> Result<ResultSet> {
    let value: Value = serde_json::from_slice(body)?;
    let Value::Array(items) = value else {
        return Err(GalleryError::Decode(serde::de::Error::custom(
            "expected a JSON array of images",
        )));
    };

    let records = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match ImageRecord::from_json(item) {
            Ok(record) => Some(record),
            Err(reason) => {
                tracing::warn!(index = index, reason = ?reason, "skipping malformed image record");
                None
            }
        })
        .collect();
    Ok(records)
}

/// Extracts the `error` field from a JSON error body.
fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<Value>(body)
        .ok()?
        .get("error")?
        .as_str()
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Percent-encodes a query parameter value (RFC 3986 unreserved set kept).
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(char::from(b));
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: u16, body: &str) -> HostReply {
        HostReply {
            status,
            headers: BTreeMap::from([("content-type".to_string(), "application/json".to_string())]),
            body: body.as_bytes().to_vec(),
        }
    }

    fn key(category: &str, page: u32) -> PageKey {
        PageKey::new(Category::new(category).unwrap(), Page::new(page).unwrap())
    }

    #[test]
    fn request_url_encodes_category() {
        let endpoint = ApiEndpoint::parse("https://api.example.com/").unwrap();
        let request = endpoint.request(key("street art", 3));
        assert_eq!(
            request.url,
            "https://api.example.com/images?category=street%20art&page=3"
        );
    }

    #[test]
    fn endpoint_rejects_missing_scheme_or_host() {
        assert!(matches!(ApiEndpoint::parse("ftp://x"), Err(GalleryError::Config(_))));
        assert!(matches!(ApiEndpoint::parse("https://"), Err(GalleryError::Config(_))));
    }

    #[test]
    fn context_round_trips_the_key() {
        let original = key("sport", 2);
        assert_eq!(PageKey::from_context(&original.to_context()), Some(original));
        assert_eq!(PageKey::from_context(&BTreeMap::new()), None);
    }

    #[test]
    fn success_body_decodes_records_and_skips_bad_ones() {
        let outcome = reply(200, r#"[{"id":1},{"views":3},{"id":2}]"#).classify();
        let records = outcome.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn not_found_carries_body_message() {
        let outcome = reply(404, r#"{"error":"category not found"}"#).classify();
        assert_eq!(
            outcome,
            Err(FetchError::NotFound {
                message: "category not found".to_string()
            })
        );
    }

    #[test]
    fn not_found_without_body_uses_default_message() {
        let outcome = reply(404, "").classify();
        assert!(matches!(outcome, Err(FetchError::NotFound { message }) if !message.is_empty()));
    }

    #[test]
    fn other_statuses_and_bad_bodies_are_server_errors() {
        assert_eq!(reply(500, "oops").classify(), Err(FetchError::Server { status: 500 }));
        assert_eq!(reply(400, "bad").classify(), Err(FetchError::Server { status: 400 }));
        assert_eq!(
            reply(200, r#"{"id":1}"#).classify(),
            Err(FetchError::Server { status: 200 })
        );
    }

    #[test]
    fn headerless_400_is_a_network_error() {
        let host = HostReply {
            status: 400,
            headers: BTreeMap::new(),
            body: b"connection refused".to_vec(),
        };
        assert_eq!(
            host.classify(),
            Err(FetchError::Network {
                reason: "connection refused".to_string()
            })
        );
    }

    #[test]
    fn percent_encode_keeps_unreserved_bytes() {
        assert_eq!(percent_encode("abc-_.~"), "abc-_.~");
        assert_eq!(percent_encode("a&b=c"), "a%26b%3Dc");
        assert_eq!(percent_encode("é"), "%C3%A9");
    }
}
