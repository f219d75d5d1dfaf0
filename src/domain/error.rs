//! Error types for the zgallery plugin.
//!
//! Two families live here. [`GalleryError`] covers setup and local failures
//! (configuration, themes, decoding) and flows through the crate as the error
//! half of [`Result`]. [`FetchError`] is the taxonomy of remote-fetch failures;
//! it never escapes the fetch orchestrator and is turned into a user-facing
//! notification instead.

use std::time::Duration;
use thiserror::Error;

/// How long a "not found" toast stays on screen.
pub const NOT_FOUND_TOAST: Duration = Duration::from_millis(700);

/// How long every other error toast stays on screen.
pub const DEFAULT_TOAST: Duration = Duration::from_secs(5);

/// The main error type for zgallery operations.
///
/// # Examples
///
/// ```
/// use zgallery::GalleryError;
///
/// fn validate() -> Result<(), GalleryError> {
///     Err(GalleryError::Config("api_url is not set".to_string()))
/// }
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Plugin configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON payload could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A category token was empty after trimming.
    #[error("Category must not be empty")]
    InvalidCategory,

    /// A host reply carried no recognizable page key in its context.
    #[error("Reply context does not name a page: {0:?}")]
    ReplyContext(std::collections::BTreeMap<String, String>),
}

/// A specialized `Result` type for zgallery operations.
pub type Result<T> = std::result::Result<T, GalleryError>;

/// Classified failure of a single page fetch.
///
/// Every variant leaves the session in the exhausted state; the variants
/// differ only in what the user is told and for how long.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The API answered 404: the category has no results.
    #[error("{message}")]
    NotFound {
        /// Message taken from the response body's `error` field.
        message: String,
    },

    /// The API answered with any other non-success status, or with a body
    /// that is not a JSON array of records.
    #[error("server error (status {status})")]
    Server {
        /// HTTP status code reported by the host.
        status: u16,
    },

    /// No response was received at all.
    #[error("network error: {reason}")]
    Network {
        /// Transport-level description from the host.
        reason: String,
    },
}

impl FetchError {
    /// Text shown to the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { message } => message.clone(),
            Self::Server { .. } => "An error occurred while fetching data.".to_string(),
            Self::Network { .. } => "Network error. Please try again later.".to_string(),
        }
    }

    /// How long the notification for this failure stays visible.
    #[must_use]
    pub const fn toast_duration(&self) -> Duration {
        match self {
            Self::NotFound { .. } => NOT_FOUND_TOAST,
            Self::Server { .. } | Self::Network { .. } => DEFAULT_TOAST,
        }
    }
}

/// The detail dialog was asked to open without a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("An error occurred while loading the image.")]
pub struct MissingDetailRecord;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_uses_server_message_and_short_toast() {
        let err = FetchError::NotFound {
            message: "category not found".to_string(),
        };
        assert_eq!(err.user_message(), "category not found");
        assert_eq!(err.toast_duration(), Duration::from_millis(700));
    }

    #[test]
    fn server_and_network_errors_use_generic_text() {
        let server = FetchError::Server { status: 500 };
        let network = FetchError::Network {
            reason: "connection refused".to_string(),
        };
        assert_eq!(server.user_message(), "An error occurred while fetching data.");
        assert_eq!(network.user_message(), "Network error. Please try again later.");
        assert_eq!(server.toast_duration(), DEFAULT_TOAST);
    }

    #[test]
    fn missing_detail_record_message() {
        assert_eq!(
            MissingDetailRecord.to_string(),
            "An error occurred while loading the image."
        );
    }
}
