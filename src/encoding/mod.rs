//! Binary encoding support for q IPC messages.
//!
//! This module turns a [`crate::types::Value`] graph into the protocol's
//! binary wire format and frames it into a complete message: header,
//! recursively encoded payload, and a patched total-length field.

/// Error types for encoding operations.
pub mod error;

/// Byte-level writer for encoding binary data.
pub mod writer;

// Implementation modules
mod composites;
mod encoder;
mod functions;
mod lists;
mod message;


// Re-export commonly used types
pub use error::{EncodeError, EncodeResult};
pub use message::{Encoding, MESSAGE_HEADER_SIZE, MessageType, MessageWriter, WriterOptions};
pub use writer::ByteWriter;
