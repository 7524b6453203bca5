//! Session error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur anywhere in the streaming-session lifecycle.
///
/// Every variant is fatal to its session: nothing here is retried or
/// recovered internally, and there is no checkpointing of partial progress
/// beyond the delivered count carried by [`SessionError::Stream`].
#[derive(Debug, Error)]
pub enum SessionError {
    /// The credential environment variable is unset or empty.
    #[error("missing credential: environment variable {var} is not set or empty")]
    MissingToken { var: String },

    /// A credential was empty or never supplied.
    #[error("credential is empty or missing")]
    EmptyCredential,

    /// The credential cannot be carried as an `authorization` header value.
    #[error("credential is not a valid header value: {source}")]
    MalformedToken {
        #[source]
        source: tonic::metadata::errors::InvalidMetadataValue,
    },

    /// The endpoint was rejected while preparing the channel, before any
    /// connection attempt.
    #[error("invalid endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: tonic::transport::Error,
    },

    /// The package file could not be opened or read.
    #[error("failed to read package {}: {source}", .path.display())]
    PackageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The package file's bytes are not a valid serialized package.
    #[error("failed to decode package {}: {source}", .path.display())]
    PackageDecode {
        path: PathBuf,
        #[source]
        source: prost::DecodeError,
    },

    /// Request assembly rejected its inputs before anything was sent.
    #[error("invalid stream request: {reason}")]
    InvalidRequest { reason: String },

    /// Opening the server-streaming call failed. With a lazy channel this is
    /// where DNS, TLS, and connection failures surface.
    #[error("failed to open block stream: {source}")]
    Connect {
        #[source]
        source: tonic::Status,
    },

    /// The server or transport failed mid-stream. `delivered` counts the
    /// responses already handed to the sink before the failure.
    #[error("stream failed after {delivered} delivered responses: {source}")]
    Stream {
        delivered: u64,
        #[source]
        source: tonic::Status,
    },

    /// The output sink refused a delivery.
    #[error("output sink failed: {reason}")]
    Sink { reason: String },
}

/// Coarse error classification, one value per user-visible failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Io,
    Decode,
    InvalidRequest,
    Transport,
    Stream,
    Sink,
}

impl ErrorKind {
    /// Stable lowercase name, used in logs and error summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Io => "io",
            Self::Decode => "decode",
            Self::InvalidRequest => "invalid-request",
            Self::Transport => "transport",
            Self::Stream => "stream",
            Self::Sink => "sink",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SessionError {
    /// Which user-visible failure kind this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingToken { .. } | Self::EmptyCredential | Self::MalformedToken { .. } => {
                ErrorKind::Configuration
            }
            Self::InvalidEndpoint { .. } => ErrorKind::Configuration,
            Self::PackageRead { .. } => ErrorKind::Io,
            Self::PackageDecode { .. } => ErrorKind::Decode,
            Self::InvalidRequest { .. } => ErrorKind::InvalidRequest,
            Self::Connect { .. } => ErrorKind::Transport,
            Self::Stream { .. } => ErrorKind::Stream,
            Self::Sink { .. } => ErrorKind::Sink,
        }
    }
}
