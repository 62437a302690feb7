//! Error types and result codes for simulation operations.

use std::convert::Infallible;
use std::fmt;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result type alias for uiosim operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while simulating input.
///
/// Each variant is a distinct failure cause. The string payload is a
/// human-readable detail; branch on the variant, not on the text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The caller supplied a malformed value (unknown key code, button number
    /// out of range, degenerate wheel event).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The request is well-formed but has no native equivalent on this platform.
    #[error("unsupported on this platform: {0}")]
    UnsupportedOnPlatform(String),

    /// The OS refused the injection because the process lacks the rights to
    /// post synthetic input.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The native injection call failed.
    #[error("native call failed: {0}")]
    NativeCallFailed(String),

    /// No backend is available, either because it could not be created or
    /// because the simulator was shut down.
    #[error("not initialized: {0}")]
    NotInitialized(String),
}

impl Error {
    /// The flat result code for this error.
    pub fn result_code(&self) -> ResultCode {
        match self {
            Error::InvalidArgument(_) => ResultCode::InvalidArgument,
            Error::UnsupportedOnPlatform(_) => ResultCode::UnsupportedOnPlatform,
            Error::PermissionDenied(_) => ResultCode::PermissionDenied,
            Error::NativeCallFailed(_) => ResultCode::NativeCallFailed,
            Error::NotInitialized(_) => ResultCode::NotInitialized,
        }
    }
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Flat outcome of a simulation operation.
///
/// This is the shape binding layers hand to foreign callers that cannot
/// consume a Rust `Result`. The numeric values from [`ResultCode::code`] are
/// stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResultCode {
    Success,
    InvalidArgument,
    UnsupportedOnPlatform,
    PermissionDenied,
    NativeCallFailed,
    NotInitialized,
}

impl ResultCode {
    /// Stable numeric value (0 for success).
    pub fn code(&self) -> u8 {
        match self {
            ResultCode::Success => 0,
            ResultCode::InvalidArgument => 1,
            ResultCode::UnsupportedOnPlatform => 2,
            ResultCode::PermissionDenied => 3,
            ResultCode::NativeCallFailed => 4,
            ResultCode::NotInitialized => 5,
        }
    }

    pub fn is_success(&self) -> bool {
        *self == ResultCode::Success
    }
}

impl<T> From<&Result<T>> for ResultCode {
    fn from(result: &Result<T>) -> Self {
        match result {
            Ok(_) => ResultCode::Success,
            Err(e) => e.result_code(),
        }
    }
}

impl<T> From<Result<T>> for ResultCode {
    fn from(result: Result<T>) -> Self {
        ResultCode::from(&result)
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResultCode::Success => "success",
            ResultCode::InvalidArgument => "invalid argument",
            ResultCode::UnsupportedOnPlatform => "unsupported on platform",
            ResultCode::PermissionDenied => "permission denied",
            ResultCode::NativeCallFailed => "native call failed",
            ResultCode::NotInitialized => "not initialized",
        };
        f.write_str(name)
    }
}
