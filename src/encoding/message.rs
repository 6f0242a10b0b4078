//! Message framing for the q IPC protocol.
//!
//! A complete message is an 8-byte header followed by one encoded value:
//! `[endianness:1][msg_type:1][0x00:2][total_len:4]`. The length field covers
//! the whole message including the header and is patched in after the payload
//! has been serialized.

use std::borrow::Cow;
use std::io;

use super::encoder::Encoder;
use super::error::{EncodeError, EncodeResult};
use crate::types::Value;

/// Size of the message header in bytes.
pub const MESSAGE_HEADER_SIZE: usize = 8;

/// Offset of the total-length field within the header.
const LENGTH_OFFSET: usize = 4;

/// Header marker for the host's byte order: 1 little-endian, 0 big-endian.
fn endianness_marker() -> u8 {
    if cfg!(target_endian = "little") { 1 } else { 0 }
}

/// The message-type byte carried in the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageType {
    /// Fire-and-forget message; no response expected.
    Async = 0,
    /// Request that expects a response.
    Sync = 1,
    /// Response to a sync request.
    Response = 2,
}

impl MessageType {
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

/// Character encoding used for strings, symbols, chars, and error messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Encoding {
    /// ISO-8859-1, the protocol's traditional default. Code points above
    /// U+00FF cannot be represented.
    #[default]
    Latin1,
    /// UTF-8. Char atoms are still a single byte, so only ASCII chars fit.
    Utf8,
}

impl Encoding {
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Latin1 => "latin-1",
            Encoding::Utf8 => "utf-8",
        }
    }

    /// Encodes `text` to bytes, borrowing when no conversion is needed.
    pub(crate) fn encode_str<'a>(self, text: &'a str) -> EncodeResult<Cow<'a, [u8]>> {
        match self {
            Encoding::Utf8 => Ok(Cow::Borrowed(text.as_bytes())),
            Encoding::Latin1 => {
                if text.is_ascii() {
                    return Ok(Cow::Borrowed(text.as_bytes()));
                }
                let mut bytes = Vec::with_capacity(text.len());
                for c in text.chars() {
                    let code = c as u32;
                    if code > 0xFF {
                        return Err(EncodeError::Encoding {
                            encoding: self.name(),
                            text: text.to_string(),
                        });
                    }
                    bytes.push(code as u8);
                }
                Ok(Cow::Owned(bytes))
            }
        }
    }

    /// Encodes a single char into the one byte a char atom holds.
    pub(crate) fn encode_char(self, c: char) -> EncodeResult<u8> {
        let max = match self {
            Encoding::Latin1 => 0xFF,
            Encoding::Utf8 => 0x7F,
        };
        let code = c as u32;
        if code <= max {
            Ok(code as u8)
        } else {
            Err(EncodeError::Encoding {
                encoding: self.name(),
                text: c.to_string(),
            })
        }
    }
}

/// Per-call conversion options.
///
/// A [`MessageWriter`] holds a process-default set; each `*_with` call takes
/// an override that replaces the defaults for that call only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriterOptions {
    /// Keep one-character strings as strings instead of collapsing them to a
    /// char atom.
    pub single_char_strings: bool,
}

/// Serializes values into framed q IPC messages.
///
/// The writer is stateless between calls: every call allocates a fresh buffer
/// and snapshots its options, so independent writers never need locking.
/// Callers sharing one writer bound to one sink must serialize their calls
/// externally, since framing is not interleave-safe within a single stream.
///
/// # Examples
///
/// ```rust
/// use qwire::{MessageType, MessageWriter, Value};
///
/// let writer = MessageWriter::new(3);
/// let bytes = writer.encode(&Value::Long(1), MessageType::Sync).unwrap();
/// assert_eq!(bytes.len(), 17);
/// ```
pub struct MessageWriter {
    protocol_version: u8,
    encoding: Encoding,
    options: WriterOptions,
}

impl MessageWriter {
    /// Creates a writer for the given negotiated protocol version, using
    /// Latin-1 text encoding and default conversion options.
    pub fn new(protocol_version: u8) -> Self {
        Self {
            protocol_version,
            encoding: Encoding::default(),
            options: WriterOptions::default(),
        }
    }

    /// Sets the character encoding used for text.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets the default conversion options.
    pub fn with_options(mut self, options: WriterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn protocol_version(&self) -> u8 {
        self.protocol_version
    }

    /// Encodes `value` into a complete framed message.
    pub fn encode(&self, value: &Value, msg_type: MessageType) -> EncodeResult<Vec<u8>> {
        self.encode_with(value, msg_type, self.options)
    }

    /// Encodes `value` with per-call options overriding the writer defaults.
    pub fn encode_with(
        &self,
        value: &Value,
        msg_type: MessageType,
        options: WriterOptions,
    ) -> EncodeResult<Vec<u8>> {
        let mut encoder = Encoder::new(self.protocol_version, self.encoding, options);

        // Header with a length placeholder, patched once the payload is known.
        encoder.buf.put_u8(endianness_marker());
        encoder.buf.put_u8(msg_type.as_byte());
        encoder.buf.put_bytes(&[0; MESSAGE_HEADER_SIZE - 2]);

        encoder.write_value(value)?;

        let total = encoder.buf.len() as i32;
        encoder.buf.patch_i32(LENGTH_OFFSET, total);

        Ok(encoder.into_bytes())
    }

    /// Encodes `value` and writes the complete message to `sink`.
    ///
    /// Nothing is written if any encoding step fails, so a returned error
    /// always means "nothing was sent".
    pub fn write_to<W: io::Write>(
        &self,
        sink: &mut W,
        value: &Value,
        msg_type: MessageType,
    ) -> EncodeResult<()> {
        self.write_to_with(sink, value, msg_type, self.options)
    }

    /// [`Self::write_to`] with per-call options.
    pub fn write_to_with<W: io::Write>(
        &self,
        sink: &mut W,
        value: &Value,
        msg_type: MessageType,
        options: WriterOptions,
    ) -> EncodeResult<()> {
        let bytes = self.encode_with(value, msg_type, options)?;
        sink.write_all(&bytes)?;
        sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_bytes() {
        assert_eq!(MessageType::Async.as_byte(), 0);
        assert_eq!(MessageType::Sync.as_byte(), 1);
        assert_eq!(MessageType::Response.as_byte(), 2);
    }

    #[test]
    fn test_latin1_rejects_wide_chars() {
        assert!(Encoding::Latin1.encode_str("grüß").is_ok());
        assert!(Encoding::Latin1.encode_str("日本").is_err());
        assert_eq!(Encoding::Latin1.encode_str("é").unwrap().as_ref(), &[0xE9]);
    }

    #[test]
    fn test_utf8_passthrough() {
        assert_eq!(
            Encoding::Utf8.encode_str("日本").unwrap().as_ref(),
            "日本".as_bytes()
        );
    }

    #[test]
    fn test_char_encoding_limits() {
        assert_eq!(Encoding::Latin1.encode_char('é').unwrap(), 0xE9);
        assert!(Encoding::Utf8.encode_char('é').is_err());
        assert_eq!(Encoding::Utf8.encode_char('x').unwrap(), b'x');
    }
}
