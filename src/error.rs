//! Unified error types for chatscrub.
//!
//! This module provides a single [`ChatscrubError`] enum that covers all
//! error cases in the library, following the single-enum pattern used by
//! crates like `reqwest`, `serde_json`, and `csv`.
//!
//! Every error is fatal at the CLI boundary: the run is reported and
//! aborted, nothing is retried. A filter never partially applies; the
//! pipeline either hands back a fully transformed conversation or the
//! whole run fails with the triggering error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatscrub operations.
///
/// # Example
///
/// ```rust
/// use chatscrub::error::Result;
/// use chatscrub::Conversation;
///
/// fn my_function() -> Result<Conversation> {
///     chatscrub::transcript::parse_transcript("My Chat\n")
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatscrubError>;

/// The error type for all chatscrub operations.
///
/// Each variant carries enough context to produce an actionable message:
/// paths for I/O failures, 1-based line numbers for transcript parse
/// failures, and the offending flag for pipeline argument errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatscrubError {
    /// The input transcript does not exist at the given path.
    #[error("The file '{}' was not found", path.display())]
    InputNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The output document could not be created or written.
    #[error("Could not write '{}': {source}", path.display())]
    OutputWrite {
        /// Path that was being written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The transcript is empty.
    ///
    /// The first line of a transcript is the conversation name and must
    /// exist, even when it is blank.
    #[error("Transcript is empty: the first line must hold the conversation name")]
    MissingHeader,

    /// A message line did not split into timestamp, sender and content.
    #[error("Malformed message line {line}: expected '<timestamp> <senderId> <content>', got '{text}'")]
    MalformedLine {
        /// 1-based line number within the transcript (the header is line 1).
        line: usize,
        /// The offending line, verbatim.
        text: String,
    },

    /// The timestamp field was not a valid non-negative epoch offset.
    #[error("Invalid timestamp '{value}' on line {line}: expected non-negative epoch seconds")]
    InvalidTimestamp {
        /// 1-based line number within the transcript.
        line: usize,
        /// The field that failed to parse.
        value: String,
    },

    /// A pipeline flag that requires a value was the last token.
    #[error("Flag '{flag}' requires an argument")]
    MissingArgument {
        /// The flag that was missing its value.
        flag: String,
    },

    /// Any other I/O error (permissions, disk full while reading, ...).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatscrubError {
    /// Creates an input-not-found error.
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        ChatscrubError::InputNotFound { path: path.into() }
    }

    /// Creates an output-write error.
    pub fn output_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatscrubError::OutputWrite {
            path: path.into(),
            source,
        }
    }

    /// Creates a malformed-line error for the given 1-based line number.
    pub fn malformed_line(line: usize, text: impl Into<String>) -> Self {
        ChatscrubError::MalformedLine {
            line,
            text: text.into(),
        }
    }

    /// Creates an invalid-timestamp error for the given 1-based line number.
    pub fn invalid_timestamp(line: usize, value: impl Into<String>) -> Self {
        ChatscrubError::InvalidTimestamp {
            line,
            value: value.into(),
        }
    }

    /// Creates a missing-argument error for a pipeline flag.
    pub fn missing_argument(flag: impl Into<String>) -> Self {
        ChatscrubError::MissingArgument { flag: flag.into() }
    }

    /// Returns `true` if this error came from reading or writing files.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ChatscrubError::Io(_)
                | ChatscrubError::InputNotFound { .. }
                | ChatscrubError::OutputWrite { .. }
        )
    }

    /// Returns `true` if this error came from parsing the transcript.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            ChatscrubError::MissingHeader
                | ChatscrubError::MalformedLine { .. }
                | ChatscrubError::InvalidTimestamp { .. }
        )
    }

    /// Returns `true` if this error came from interpreting pipeline steps.
    pub fn is_pipeline(&self) -> bool {
        matches!(self, ChatscrubError::MissingArgument { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_display() {
        let err = ChatscrubError::input_not_found("/missing/chat.txt");
        let display = err.to_string();
        assert!(display.contains("/missing/chat.txt"));
        assert!(display.contains("not found"));
    }

    #[test]
    fn test_output_write_display() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatscrubError::output_write("/readonly/out.json", io_err);
        let display = err.to_string();
        assert!(display.contains("/readonly/out.json"));
        assert!(display.contains("access denied"));
    }

    #[test]
    fn test_malformed_line_display() {
        let err = ChatscrubError::malformed_line(3, "1448470901 bob");
        let display = err.to_string();
        assert!(display.contains("line 3"));
        assert!(display.contains("1448470901 bob"));
    }

    #[test]
    fn test_invalid_timestamp_display() {
        let err = ChatscrubError::invalid_timestamp(2, "yesterday");
        let display = err.to_string();
        assert!(display.contains("line 2"));
        assert!(display.contains("yesterday"));
        assert!(display.contains("epoch seconds"));
    }

    #[test]
    fn test_missing_argument_display() {
        let err = ChatscrubError::missing_argument("-user");
        let display = err.to_string();
        assert!(display.contains("-user"));
        assert!(display.contains("requires an argument"));
    }

    #[test]
    fn test_missing_header_display() {
        let err = ChatscrubError::MissingHeader;
        assert!(err.to_string().contains("conversation name"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::other("disk on fire");
        let err = ChatscrubError::output_write("out.json", io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: ChatscrubError = io_err.into();
        assert!(err.is_io());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ChatscrubError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_is_methods() {
        assert!(ChatscrubError::input_not_found("x").is_io());
        assert!(ChatscrubError::MissingHeader.is_parse());
        assert!(ChatscrubError::malformed_line(2, "x").is_parse());
        assert!(ChatscrubError::invalid_timestamp(2, "x").is_parse());
        assert!(ChatscrubError::missing_argument("-key").is_pipeline());
        assert!(!ChatscrubError::missing_argument("-key").is_io());
        assert!(!ChatscrubError::input_not_found("x").is_parse());
    }

    #[test]
    fn test_error_debug() {
        let err = ChatscrubError::missing_argument("-hidewords");
        let debug = format!("{err:?}");
        assert!(debug.contains("MissingArgument"));
    }
}
