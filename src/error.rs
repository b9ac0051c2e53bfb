use std::collections::TryReserveError;
use std::fmt::{self, Display};

/// The error type for this crate.
///
/// Malformed input is never an error: the reindenter copies anything it
/// does not recognize and always produces some output. The only failure
/// the scanner itself can hit is running out of memory while growing the
/// output buffer, which is surfaced here rather than aborting the process.
#[derive(Debug)]
pub enum JsonTidyError {
    /// A working buffer could not grow to hold more output.
    OutOfMemory,
    /// A value handed to [`to_string_pretty`](crate::to_string_pretty)
    /// could not be serialized to JSON text.
    Serialize(serde_json::Error),
}

impl Display for JsonTidyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonTidyError::OutOfMemory => f.write_str("out of memory while growing buffer"),
            JsonTidyError::Serialize(err) => write!(f, "cannot serialize value: {}", err),
        }
    }
}

impl std::error::Error for JsonTidyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JsonTidyError::OutOfMemory => None,
            JsonTidyError::Serialize(err) => Some(err),
        }
    }
}

impl From<TryReserveError> for JsonTidyError {
    fn from(_: TryReserveError) -> Self {
        JsonTidyError::OutOfMemory
    }
}

impl From<serde_json::Error> for JsonTidyError {
    fn from(err: serde_json::Error) -> Self {
        JsonTidyError::Serialize(err)
    }
}
