//! Error types for encoding operations.

use std::error::Error;
use std::fmt;

/// Result type for encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors that can occur while serializing a value.
///
/// Every failure aborts the whole `write` call; the message framer never
/// flushes a partial message to a sink.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// No wire representation exists for a runtime kind.
    UnsupportedType {
        /// Name of the kind that could not be serialized.
        kind: String,
    },

    /// The value's kind requires a newer negotiated protocol version.
    ProtocolVersion {
        /// The offending kind, as a name or hexadecimal wire tag.
        feature: String,
        /// Minimum protocol version that supports the kind.
        required: u8,
        /// The version currently negotiated.
        active: u8,
    },

    /// Text cannot be represented in the configured character encoding.
    Encoding {
        /// Name of the configured encoding.
        encoding: &'static str,
        /// The offending text.
        text: String,
    },

    /// IO error while flushing to the sink.
    Io(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::UnsupportedType { kind } => {
                write!(f, "unable to serialize type: {}", kind)
            }
            EncodeError::ProtocolVersion {
                feature,
                required,
                active,
            } => {
                write!(
                    f,
                    "protocol version violation: {} requires version {}, negotiated {}",
                    feature, required, active
                )
            }
            EncodeError::Encoding { encoding, text } => {
                write!(f, "cannot represent text in {}: {:?}", encoding, text)
            }
            EncodeError::Io(msg) => {
                write!(f, "IO error: {}", msg)
            }
        }
    }
}

impl Error for EncodeError {}

impl From<std::io::Error> for EncodeError {
    fn from(err: std::io::Error) -> Self {
        EncodeError::Io(err.to_string())
    }
}
