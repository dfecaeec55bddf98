//! Status codes
//!
//! The closed set of error kinds a `Status` can carry.

use std::fmt;

/// Error kind carried by a [`Status`](super::Status)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StatusCode {
    Ok = 0,
    NotFound = 1,
    Corruption = 2,
    NotSupported = 3,
    InvalidArgument = 4,
    IoError = 5,
    AlreadyPresent = 6,
    RuntimeError = 7,
    NetworkError = 8,
    IllegalState = 9,
    NotAuthorized = 10,
    Aborted = 11,
    RemoteError = 12,
    ServiceUnavailable = 13,
    TimedOut = 14,
    Uninitialized = 15,
    ConfigurationError = 16,
    Incomplete = 17,
    EndOfFile = 18,
    InvalidCommand = 19,
    /// Query-language error raised by layers above the codec
    SqlError = 20,
}

impl StatusCode {
    /// Every code, in numeric order
    pub const ALL: [StatusCode; 21] = [
        StatusCode::Ok,
        StatusCode::NotFound,
        StatusCode::Corruption,
        StatusCode::NotSupported,
        StatusCode::InvalidArgument,
        StatusCode::IoError,
        StatusCode::AlreadyPresent,
        StatusCode::RuntimeError,
        StatusCode::NetworkError,
        StatusCode::IllegalState,
        StatusCode::NotAuthorized,
        StatusCode::Aborted,
        StatusCode::RemoteError,
        StatusCode::ServiceUnavailable,
        StatusCode::TimedOut,
        StatusCode::Uninitialized,
        StatusCode::ConfigurationError,
        StatusCode::Incomplete,
        StatusCode::EndOfFile,
        StatusCode::InvalidCommand,
        StatusCode::SqlError,
    ];

    /// Human-readable label used as the first word(s) of a rendered status
    pub fn as_str(self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not found",
            StatusCode::Corruption => "Corruption",
            StatusCode::NotSupported => "Not implemented",
            StatusCode::InvalidArgument => "Invalid argument",
            StatusCode::IoError => "IO error",
            StatusCode::AlreadyPresent => "Already present",
            StatusCode::RuntimeError => "Runtime error",
            StatusCode::NetworkError => "Network error",
            StatusCode::IllegalState => "Illegal state",
            StatusCode::NotAuthorized => "Not authorized",
            StatusCode::Aborted => "Aborted",
            StatusCode::RemoteError => "Remote error",
            StatusCode::ServiceUnavailable => "Service unavailable",
            StatusCode::TimedOut => "Timed out",
            StatusCode::Uninitialized => "Uninitialized",
            StatusCode::ConfigurationError => "Configuration error",
            StatusCode::Incomplete => "Incomplete",
            StatusCode::EndOfFile => "End of file",
            StatusCode::InvalidCommand => "Invalid command",
            StatusCode::SqlError => "SQL error",
        }
    }

    /// Look up a code by its numeric value
    pub fn from_u8(raw: u8) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }

    /// Label for a raw code, including codes this build does not know about
    pub fn label_for_raw(raw: u8) -> String {
        match Self::from_u8(raw) {
            Some(code) => code.as_str().to_string(),
            None => format!("Incorrect status code {}", raw),
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
