//! Unified error type for the cutlist service.
//!
//! Every failure funnels into [`Error`], which carries enough context for
//! API handlers to derive an HTTP status code via [`Error::http_status`].

/// Unified error type covering all failure modes in cutlist.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration is missing or invalid. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Client input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The upstream request could not be completed (connect, timeout, ...).
    #[error("Upstream request failed [{resource}]: {message}")]
    Upstream {
        /// Upstream resource that was requested (e.g. "discover/movie").
        resource: String,
        /// Human-readable error description.
        message: String,
    },

    /// The upstream answered with a non-success status.
    #[error("Upstream {resource} returned {status}")]
    UpstreamStatus {
        /// Upstream resource that was requested.
        resource: String,
        /// HTTP status code returned by the upstream.
        status: u16,
    },

    /// The upstream answered, but the body did not have the expected shape.
    #[error("Malformed upstream response [{resource}]: {message}")]
    Decode {
        /// Upstream resource that was requested.
        resource: String,
        /// Parser error description.
        message: String,
    },

    /// Catch-all for unexpected internal errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Map this error to an appropriate HTTP status code.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            Error::Config(_)
            | Error::Upstream { .. }
            | Error::UpstreamStatus { .. }
            | Error::Decode { .. }
            | Error::Internal(_) => 500,
        }
    }

    /// Short machine-readable code used in JSON error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Config(_) => "config_error",
            Error::Validation(_) => "validation_error",
            Error::Upstream { .. } => "upstream_error",
            Error::UpstreamStatus { .. } => "upstream_status",
            Error::Decode { .. } => "upstream_decode_error",
            Error::Internal(_) => "internal_error",
        }
    }

    /// Convenience constructor for [`Error::Upstream`].
    pub fn upstream(resource: impl Into<String>, message: impl ToString) -> Self {
        Error::Upstream {
            resource: resource.into(),
            message: message.to_string(),
        }
    }

    /// Convenience constructor for [`Error::Decode`].
    pub fn decode(resource: impl Into<String>, message: impl ToString) -> Self {
        Error::Decode {
            resource: resource.into(),
            message: message.to_string(),
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
