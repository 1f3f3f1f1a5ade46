use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Every failure terminates the iterator it belongs to; use [`YqError::kind`]
/// to tell caller mistakes apart from provider and connectivity problems.
#[derive(Debug, Error)]
pub enum YqError {
    /// An error occurred while executing an HTTP request (DNS, TLS,
    /// connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided or derived URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The session cookie/crumb exchange failed, so no authenticated request
    /// could be issued.
    #[error("Auth/crumb error: {0}")]
    Auth(String),

    /// The server answered with an error status code (>= 400).
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The provider returned an error object inside the response envelope.
    #[error("API error {code}: {description}")]
    Api {
        /// The provider's error code, e.g. `Not Found`.
        code: String,
        /// The provider's human-readable description.
        description: String,
    },

    /// The response body decoded, but not into the expected shape, or a
    /// required substructure was missing.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A required identifying argument (symbol or symbol list) was empty.
    #[error("missing function argument: {0}")]
    MissingArgument(&'static str),

    /// An invalid time range was provided (start must not be after end).
    #[error("invalid time range: start is after end")]
    InvalidTimeRange,
}

/// Coarse classification of a [`YqError`], mirroring where the failure
/// happened relative to the provider's application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller-supplied input was rejected before any network activity.
    Argument,
    /// The provider was reached but answered with an error status, an error
    /// envelope, or an undecodable/incomplete body.
    Upstream,
    /// The request never produced a usable response: connectivity, URL
    /// construction, or session-refresh failure below the application layer.
    Transport,
}

impl YqError {
    /// Returns the coarse [`ErrorKind`] for this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument(_) | Self::InvalidTimeRange => ErrorKind::Argument,
            Self::Status { .. } | Self::Api { .. } | Self::Data(_) => ErrorKind::Upstream,
            Self::Http(_) | Self::Url(_) | Self::Auth(_) => ErrorKind::Transport,
        }
    }
}
