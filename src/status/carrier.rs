//! Status carrier
//!
//! `Status` is either OK (no payload) or a failure holding a shared,
//! immutable payload.

use std::fmt;
use std::io;
use std::panic::Location;
use std::sync::Arc;

use super::StatusCode;

/// Separator between joined message parts
const MESSAGE_SEPARATOR: &str = ": ";

/// Result-or-error value used throughout the codec
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Status {
    state: Option<Arc<State>>,
}

#[derive(Clone, PartialEq, Eq)]
struct State {
    code: StatusCode,
    message: String,
    error_code: Option<i32>,
    location: Option<&'static Location<'static>>,
}

impl Status {
    /// The success status
    pub const fn ok() -> Self {
        Self { state: None }
    }

    /// Create a failure of the given kind
    ///
    /// Panics if `code` is [`StatusCode::Ok`]: a failure with the success
    /// kind is a programming error.
    #[track_caller]
    pub fn new(code: StatusCode, msg: impl AsRef<str>) -> Self {
        Self::build(code, msg.as_ref(), "", None, Some(Location::caller()))
    }

    /// Create a failure with a primary and a secondary message joined by `": "`
    #[track_caller]
    pub fn with_detail(code: StatusCode, msg: impl AsRef<str>, detail: impl AsRef<str>) -> Self {
        Self::build(
            code,
            msg.as_ref(),
            detail.as_ref(),
            None,
            Some(Location::caller()),
        )
    }

    fn build(
        code: StatusCode,
        msg: &str,
        msg2: &str,
        error_code: Option<i32>,
        location: Option<&'static Location<'static>>,
    ) -> Self {
        assert!(
            code != StatusCode::Ok,
            "Check failed: a failed Status cannot carry the OK code"
        );

        let mut message = String::with_capacity(msg.len() + MESSAGE_SEPARATOR.len() + msg2.len());
        message.push_str(msg);
        if !msg2.is_empty() {
            message.push_str(MESSAGE_SEPARATOR);
            message.push_str(msg2);
        }

        Self {
            state: Some(Arc::new(State {
                code,
                message,
                error_code,
                location,
            })),
        }
    }

    /// Attach a platform error code (rendered as ` (error N)`)
    ///
    /// OK stays OK.
    pub fn with_error_code(mut self, error_code: i32) -> Self {
        if let Some(state) = self.state.as_mut() {
            Arc::make_mut(state).error_code = Some(error_code);
        }
        self
    }

    /// Drop the recorded source location
    pub fn without_location(mut self) -> Self {
        if let Some(state) = self.state.as_mut() {
            Arc::make_mut(state).location = None;
        }
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn is_ok(&self) -> bool {
        self.state.is_none()
    }

    pub fn code(&self) -> StatusCode {
        self.state.as_ref().map_or(StatusCode::Ok, |s| s.code)
    }

    /// Label of this status' kind, `OK` on success
    pub fn code_as_str(&self) -> &'static str {
        self.code().as_str()
    }

    /// Full message (`msg` or `msg: msg2`), empty on success
    pub fn message(&self) -> &str {
        self.state.as_ref().map_or("", |s| s.message.as_str())
    }

    /// Platform error code, if one was attached
    pub fn error_code(&self) -> Option<i32> {
        self.state.as_ref().and_then(|s| s.error_code)
    }

    /// Source file recorded when the failure was created
    pub fn file_name(&self) -> Option<&'static str> {
        self.state
            .as_ref()
            .and_then(|s| s.location)
            .map(|loc| loc.file())
    }

    /// Source line recorded when the failure was created
    pub fn line_number(&self) -> Option<u32> {
        self.state
            .as_ref()
            .and_then(|s| s.location)
            .map(|loc| loc.line())
    }

    /// `Ok(())` on success, `Err(self)` otherwise
    pub fn into_result(self) -> crate::Result<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(self)
        }
    }

    // =========================================================================
    // Annotation
    // =========================================================================

    /// New status with `msg` placed before the existing message
    ///
    /// Kind, error code and location are preserved. OK is returned unchanged.
    pub fn clone_and_prepend(&self, msg: impl AsRef<str>) -> Self {
        match &self.state {
            None => Self::ok(),
            Some(state) => Self::build(
                state.code,
                msg.as_ref(),
                &state.message,
                state.error_code,
                state.location,
            ),
        }
    }

    /// New status with `msg` placed after the existing message
    ///
    /// Kind, error code and location are preserved. OK is returned unchanged.
    pub fn clone_and_append(&self, msg: impl AsRef<str>) -> Self {
        match &self.state {
            None => Self::ok(),
            Some(state) => Self::build(
                state.code,
                &state.message,
                msg.as_ref(),
                state.error_code,
                state.location,
            ),
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render as `Kind[ (path:line)]: message[ (error N)]`
    pub fn to_string_with_location(&self, include_location: bool) -> String {
        let state = match &self.state {
            None => return StatusCode::Ok.as_str().to_string(),
            Some(state) => state,
        };

        let mut result = String::from(state.code.as_str());
        if include_location {
            if let Some(loc) = state.location.filter(|loc| loc.line() != 0) {
                result.push_str(" (");
                result.push_str(relative_source_path(loc.file()));
                result.push(':');
                result.push_str(&loc.line().to_string());
                result.push(')');
            }
        }
        result.push_str(MESSAGE_SEPARATOR);
        result.push_str(&state.message);
        if let Some(error_code) = state.error_code {
            result.push_str(&format!(" (error {})", error_code));
        }
        result
    }
}

/// Trim a source path so it starts below the source root
fn relative_source_path(file: &str) -> &str {
    if let Some(pos) = file.find("/src/") {
        return &file[pos + "/src/".len()..];
    }
    file.strip_prefix("src/").unwrap_or(file)
}

macro_rules! status_kinds {
    ($($ctor:ident, $pred:ident => $code:ident;)*) => {
        impl Status {
            $(
                #[track_caller]
                pub fn $ctor(msg: impl AsRef<str>) -> Self {
                    Self::build(StatusCode::$code, msg.as_ref(), "", None, Some(Location::caller()))
                }

                pub fn $pred(&self) -> bool {
                    self.code() == StatusCode::$code
                }
            )*
        }
    };
}

status_kinds! {
    not_found, is_not_found => NotFound;
    corruption, is_corruption => Corruption;
    not_supported, is_not_supported => NotSupported;
    invalid_argument, is_invalid_argument => InvalidArgument;
    io_error, is_io_error => IoError;
    already_present, is_already_present => AlreadyPresent;
    runtime_error, is_runtime_error => RuntimeError;
    network_error, is_network_error => NetworkError;
    illegal_state, is_illegal_state => IllegalState;
    not_authorized, is_not_authorized => NotAuthorized;
    aborted, is_aborted => Aborted;
    remote_error, is_remote_error => RemoteError;
    service_unavailable, is_service_unavailable => ServiceUnavailable;
    timed_out, is_timed_out => TimedOut;
    uninitialized, is_uninitialized => Uninitialized;
    configuration_error, is_configuration_error => ConfigurationError;
    incomplete, is_incomplete => Incomplete;
    end_of_file, is_end_of_file => EndOfFile;
    invalid_command, is_invalid_command => InvalidCommand;
    sql_error, is_sql_error => SqlError;
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with_location(false))
    }
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status({})", self.to_string_with_location(true))
    }
}

impl std::error::Error for Status {}

impl From<io::Error> for Status {
    #[track_caller]
    fn from(err: io::Error) -> Self {
        Self::build(
            StatusCode::IoError,
            &err.to_string(),
            "",
            err.raw_os_error(),
            Some(Location::caller()),
        )
    }
}
