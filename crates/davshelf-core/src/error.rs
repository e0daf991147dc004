//! Unified error type for davshelf.
//!
//! Every network-calling function returns [`Result`] so callers can decide
//! when to substitute fallback data. The variants mirror the failure kinds a
//! listing or lookup can hit; "no match" and "unknown player" are not errors.

/// Unified error type covering all failure modes in davshelf.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required configuration value is absent or empty.
    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    /// The request never produced a response (DNS, connect, timeout, TLS).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The upstream answered with a non-success status.
    #[error("Upstream {service} returned {status}")]
    UpstreamStatus {
        /// Which upstream answered (e.g. "webdav", "tmdb").
        service: String,
        /// HTTP status code.
        status: u16,
    },

    /// The upstream body could not be decoded.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Configuration file could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Catch-all for unexpected internal errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Short, stable identifier for structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            Error::MissingConfig(_) => "missing_config",
            Error::Transport(_) => "transport",
            Error::UpstreamStatus { .. } => "upstream_status",
            Error::MalformedResponse(_) => "malformed_response",
            Error::Config(_) => "config",
            Error::Io { .. } => "io",
            Error::Internal(_) => "internal",
        }
    }

    /// Convenience constructor for [`Error::UpstreamStatus`].
    pub fn upstream(service: impl Into<String>, status: u16) -> Self {
        Error::UpstreamStatus {
            service: service.into(),
            status,
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
