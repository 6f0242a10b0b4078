//! Encoding support for the kdb+ (q) IPC wire protocol.
//!
//! This crate is the encoding half of a q client: it converts strongly-typed
//! in-memory values (atoms, typed lists, dictionaries, tables, functions,
//! error signals) into the q binary wire format and frames them into
//! complete messages ready to transmit over a byte stream. Decoding and
//! connection management live elsewhere; this crate only turns values into
//! bytes.
//!
//! # Examples
//!
//! ```rust
//! use qwire::{List, MessageType, MessageWriter, Value};
//!
//! let writer = MessageWriter::new(3);
//! let value = Value::List(List::Long(vec![1, 2, 3]));
//! let bytes = writer.encode(&value, MessageType::Async).unwrap();
//! assert_eq!(bytes[1], MessageType::Async.as_byte());
//! ```
//!
//! Writing straight to an open connection:
//!
//! ```rust,no_run
//! use std::net::TcpStream;
//! use qwire::{MessageType, MessageWriter, Value};
//!
//! let mut stream = TcpStream::connect("localhost:5000").unwrap();
//! let writer = MessageWriter::new(3);
//! writer
//!     .write_to(&mut stream, &Value::symbol("ping"), MessageType::Sync)
//!     .unwrap();
//! ```

/// Builder API for validated tables and keyed tables.
pub mod builders;

/// Binary encoding and message framing.
pub mod encoding;

/// The wire type tag catalogue.
pub mod tags;

/// Temporal types and epoch conversions.
pub mod time;

/// The q value model.
pub mod types;

mod fmt;

#[cfg(feature = "serde")]
mod json;

// Re-export the common surface at the crate root
pub use encoding::{EncodeError, EncodeResult, Encoding, MessageType, MessageWriter, WriterOptions};
pub use time::{ClockTimeExt, Date, Datetime, Minute, Month, Second, Time, Timespan, Timestamp};
pub use types::{
    Category, Dictionary, KeyedTable, Lambda, List, Projection, Signal, Table, Value,
};
pub use uuid::Uuid;
