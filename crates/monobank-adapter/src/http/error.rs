/*
[INPUT]:  Error sources (validation, transport, body handling, remote envelope, decode)
[OUTPUT]: Structured error types with stable display prefixes
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing wire-visible messages
*/

use std::io;

use thiserror::Error;

use crate::http::transport::BoxError;

/// Main error type for the Monobank adapter.
///
/// Display prefixes are part of the contract: callers pattern-match on them,
/// and `Remote` carries the bank's own description verbatim.
#[derive(Error, Debug)]
pub enum MonoError {
    /// Caller input rejected before any network call
    #[error("{0}")]
    Validation(&'static str),

    /// Method/URL could not be turned into a request
    #[error("failed to create request: {0}")]
    RequestConstruction(#[from] url::ParseError),

    /// Network-level failure, wraps the underlying cause
    #[error("failed to make request: {0}")]
    Transport(#[source] BoxError),

    /// Response body stream errored mid-read
    #[error("failed to read body: {0}")]
    BodyRead(#[source] io::Error),

    /// Response body stream failed to close
    #[error("failed to close the body: {0}")]
    BodyClose(#[source] io::Error),

    /// The bank reported a business-level failure
    #[error("mono error: {0}")]
    Remote(String),

    /// Payload did not match the expected shape
    #[error("failed to unmarshal body: {0}")]
    Decode(#[source] serde_json::Error),

    /// Client could not be constructed
    #[error("configuration error: {0}")]
    Config(String),
}

impl MonoError {
    /// Check if the error was raised before any request left the process.
    pub fn is_validation(&self) -> bool {
        matches!(self, MonoError::Validation(_))
    }

    /// Check if the bank itself rejected the call.
    pub fn is_remote(&self) -> bool {
        matches!(self, MonoError::Remote(_))
    }
}

/// Result type alias for Monobank operations
pub type Result<T> = std::result::Result<T, MonoError>;
