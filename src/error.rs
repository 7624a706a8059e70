//! Error types for the Feast client.

use std::io;

/// Result type for Feast client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using the Feast client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A feature reference string could not be parsed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The remote call failed. Code and message are exactly what the server returned.
    #[error("remote call failed: {0}")]
    Status(#[from] tonic::Status),

    /// The endpoint could not be built or the channel could not connect.
    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// A credential could not be encoded as gRPC metadata.
    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    /// I/O error while reading a certificate or starting a runtime.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// The remote status, if this error came from the server.
    pub fn status(&self) -> Option<&tonic::Status> {
        match self {
            Error::Status(status) => Some(status),
            _ => None,
        }
    }
}
