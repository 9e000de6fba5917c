//! Crate-wide error type
//!
//! Everything that can fail here is either bad rule data supplied by the
//! operator or a malformed event payload. No variant is retryable.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RewriteError {
    /// A rule's regex pattern does not compile
    #[error("invalid regex pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A rule's origin is not a valid absolute URL
    #[error("invalid origin url '{url}': {source}")]
    InvalidOrigin {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A rule's origin URL parses but carries no host to forward to
    #[error("origin url '{0}' has no host")]
    OriginMissingHost(String),

    /// Rule file could not be read or deserialized
    #[error("failed to load rule configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// Event payload is not valid JSON for the expected envelope
    #[error("malformed event payload: {0}")]
    Envelope(#[from] serde_json::Error),

    /// Event envelope contains no records to evaluate
    #[error("event contains no records")]
    EmptyEvent,
}
