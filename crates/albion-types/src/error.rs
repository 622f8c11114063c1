//! Error types for albion.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for albion operations.
pub type Result<T> = std::result::Result<T, AlbionError>;

/// Boxed underlying cause of a transport failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while talking to the gameinfo API.
#[derive(Error, Debug)]
pub enum AlbionError {
    /// The region or server selector is not one of the known endpoints.
    #[error("Invalid region '{0}', expected one of: Americas, Asia, Europe")]
    InvalidRegion(String),

    /// The upstream server answered with a non-2xx status.
    #[error("Albion Online API returned a status code of {status_code} ({status_text}) for {url}")]
    Http {
        /// HTTP status code.
        status_code: u16,
        /// Canonical reason phrase for the status code.
        status_text: String,
        /// The resolved request URL.
        url: String,
        /// Response body, when it could be read and was not empty.
        body: Option<String>,
    },

    /// The request timed out or was cancelled by the caller.
    #[error("Request to {url} was aborted: {reason}")]
    Aborted {
        /// The resolved request URL.
        url: String,
        /// Which cancellation source fired first.
        reason: AbortReason,
    },

    /// DNS, connection, body or JSON decoding failure.
    #[error("Request to {url} failed: {message}")]
    Transport {
        /// The resolved request URL.
        url: String,
        /// Short description of the failure.
        message: String,
        /// The underlying error.
        #[source]
        source: BoxError,
    },
}

/// Why an in-flight request was aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// The per-call deadline elapsed.
    TimedOut(Duration),
    /// The caller's cancellation token fired.
    Cancelled,
}

impl std::fmt::Display for AbortReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TimedOut(after) => write!(f, "timed out after {}ms", after.as_millis()),
            Self::Cancelled => write!(f, "cancelled by caller"),
        }
    }
}

impl AlbionError {
    /// Wraps a lower-level failure as a transport error for `url`.
    pub fn transport(
        url: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.into(),
            source: source.into(),
        }
    }

    /// Creates an abort error for `url`.
    pub fn aborted(url: impl Into<String>, reason: AbortReason) -> Self {
        Self::Aborted {
            url: url.into(),
            reason,
        }
    }

    /// Returns the HTTP status code, if the server answered.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Returns the status reason phrase, if the server answered.
    #[must_use]
    pub fn status_text(&self) -> Option<&str> {
        match self {
            Self::Http { status_text, .. } => Some(status_text),
            _ => None,
        }
    }

    /// Returns the URL of the failed request.
    #[must_use]
    pub fn request_url(&self) -> Option<&str> {
        match self {
            Self::Http { url, .. } | Self::Aborted { url, .. } | Self::Transport { url, .. } => {
                Some(url)
            }
            Self::InvalidRegion(_) => None,
        }
    }

    /// Returns the response body captured alongside an HTTP error.
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Http { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    /// Returns true if the request was aborted by a timeout or cancellation.
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }

    /// Returns true if the request was aborted because its deadline elapsed.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::Aborted {
                reason: AbortReason::TimedOut(_),
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_http_error_accessors() {
        let err = AlbionError::Http {
            status_code: 404,
            status_text: "Not Found".to_string(),
            url: "https://example.test/players/x".to_string(),
            body: Some("nope".to_string()),
        };

        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.status_text(), Some("Not Found"));
        assert_eq!(err.request_url(), Some("https://example.test/players/x"));
        assert_eq!(err.response_body(), Some("nope"));
        assert!(!err.is_aborted());
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_abort_classification() {
        let timeout = AlbionError::aborted("u", AbortReason::TimedOut(Duration::from_millis(50)));
        let cancel = AlbionError::aborted("u", AbortReason::Cancelled);

        assert!(timeout.is_aborted() && timeout.is_timeout());
        assert!(cancel.is_aborted() && !cancel.is_timeout());
        assert!(timeout.to_string().contains("50ms"));
        assert_eq!(cancel.status_code(), None);
    }

    #[test]
    fn test_transport_keeps_source() {
        let cause = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = AlbionError::transport("u", "invalid JSON body", cause);

        let source = err.source().expect("source is kept");
        assert!(source.downcast_ref::<serde_json::Error>().is_some());
    }

    #[test]
    fn test_invalid_region_has_no_url() {
        let err = AlbionError::InvalidRegion("Atlantis".to_string());
        assert_eq!(err.request_url(), None);
        assert!(err.to_string().contains("Atlantis"));
    }
}
