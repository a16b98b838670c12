//! Error types for the Marquee plugin.
//!
//! Two layers of errors live here. [`DirectoryError`] describes why a request
//! to the movie directory did not produce a usable answer; the UI turns it into
//! a message for the detail modal. [`MarqueeError`] is the crate-wide error for
//! storage, configuration and theme problems, and wraps directory errors when
//! they need to travel further.

use thiserror::Error;

/// Message shown in the detail modal for every failure that did not come
/// with an upstream explanation.
pub const GENERIC_DETAILS_FAILURE: &str = "Failed to fetch details";

/// Message shown when the directory refuses a lookup without saying why.
pub const DETAILS_NOT_AVAILABLE: &str = "Details not available";

/// Failure of a single directory request.
///
/// # Examples
///
/// ```
/// use marquee::domain::DirectoryError;
///
/// let err = DirectoryError::DetailsUnavailable("Incorrect IMDb ID.".to_string());
/// assert_eq!(err.user_message(), "Incorrect IMDb ID.");
///
/// let err = DirectoryError::FetchFailed("status 502".to_string());
/// assert_eq!(err.user_message(), "Failed to fetch details");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// The request never produced a successful HTTP answer.
    ///
    /// The host reports network, DNS and timeout failures as non-2xx results,
    /// so all of them land here.
    #[error("fetch failed: {0}")]
    FetchFailed(String),

    /// The body was not the JSON shape the directory documents.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The directory answered but signalled failure (`"Response": "False"`).
    ///
    /// Carries the upstream `Error` text, or [`DETAILS_NOT_AVAILABLE`].
    #[error("details unavailable: {0}")]
    DetailsUnavailable(String),
}

impl DirectoryError {
    /// Text to show the user for this failure.
    ///
    /// Upstream refusals are surfaced verbatim; everything else collapses to
    /// [`GENERIC_DETAILS_FAILURE`].
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::DetailsUnavailable(message) => message.clone(),
            Self::FetchFailed(_) | Self::Malformed(_) => GENERIC_DETAILS_FAILURE.to_string(),
        }
    }
}

/// The main error type for Marquee operations.
#[derive(Debug, Error)]
pub enum MarqueeError {
    /// Reading, parsing or writing durable storage failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A directory request failed.
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),
}

/// A specialized `Result` type for Marquee operations.
pub type Result<T> = std::result::Result<T, MarqueeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_refusal_is_shown_verbatim() {
        let err = DirectoryError::DetailsUnavailable("Error getting data.".to_string());
        assert_eq!(err.user_message(), "Error getting data.");
    }

    #[test]
    fn transport_and_parse_failures_use_generic_message() {
        assert_eq!(
            DirectoryError::FetchFailed("timeout".into()).user_message(),
            GENERIC_DETAILS_FAILURE
        );
        assert_eq!(
            DirectoryError::Malformed("expected value".into()).user_message(),
            GENERIC_DETAILS_FAILURE
        );
    }

    #[test]
    fn directory_error_converts_into_crate_error() {
        let err: MarqueeError = DirectoryError::FetchFailed("dns".into()).into();
        assert_eq!(err.to_string(), "Directory error: fetch failed: dns");
    }
}
