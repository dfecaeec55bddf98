//! Error types for docdb-keys
//!
//! Codec operations fail with a [`Status`]; the inspection tool wraps those
//! together with its own input errors in [`KeyToolError`].

use thiserror::Error;

use crate::status::Status;

/// Result type alias used by every fallible codec operation
pub type Result<T> = std::result::Result<T, Status>;

/// Errors surfaced by the `docdb-keytool` binary
#[derive(Debug, Error)]
pub enum KeyToolError {
    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("{0}")]
    Status(#[from] Status),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
