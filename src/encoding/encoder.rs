//! Value dispatch and scalar encoders.

use uuid::Uuid;

use super::error::{EncodeError, EncodeResult};
use super::message::{Encoding, WriterOptions};
use super::writer::ByteWriter;
use crate::tags::{self, Tag};
use crate::types::{Signal, Value};

/// Per-call encoding state: the output buffer plus the protocol version and
/// options snapshot taken by the framer. Dropped when the call completes;
/// nothing survives across messages.
pub(crate) struct Encoder {
    pub(crate) buf: ByteWriter,
    pub(crate) protocol_version: u8,
    pub(crate) encoding: Encoding,
    pub(crate) options: WriterOptions,
}

impl Encoder {
    pub(crate) fn new(protocol_version: u8, encoding: Encoding, options: WriterOptions) -> Self {
        Self {
            buf: ByteWriter::with_capacity(64),
            protocol_version,
            encoding,
            options,
        }
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.buf.finish()
    }

    /// Dispatches `value` to the encoder for its kind.
    ///
    /// The match is exhaustive over the closed kind set, so classification
    /// cannot fail; failures below come from version gates, text encoding,
    /// or a value that does not fit its tag's layout. No bytes are written
    /// for a value until its encoder has been selected.
    pub(crate) fn write_value(&mut self, value: &Value) -> EncodeResult<()> {
        match value {
            Value::Null => {
                self.buf.put_tag(tags::IDENTITY);
                self.buf.put_u8(0);
                Ok(())
            }
            Value::Error(signal) => self.write_error(signal),
            Value::Bool(b) => self.write_atom(tags::BOOLEAN, &[u8::from(*b)]),
            Value::Guid(guid) => self.write_guid(guid),
            Value::Byte(x) => self.write_atom(tags::BYTE, &[*x]),
            Value::Short(x) => self.write_atom(tags::SHORT, &x.to_ne_bytes()),
            Value::Int(x) => self.write_atom(tags::INT, &x.to_ne_bytes()),
            Value::Long(x) => self.write_atom(tags::LONG, &x.to_ne_bytes()),
            Value::Real(x) => self.write_atom(tags::REAL, &x.to_ne_bytes()),
            Value::Float(x) => self.write_atom(tags::FLOAT, &x.to_ne_bytes()),
            Value::Char(c) => self.write_char(*c),
            Value::Symbol(name) => self.write_symbol(name),
            Value::String(text) => self.write_string(text),
            Value::Timestamp(t) => {
                self.check_temporal_version(tags::TIMESTAMP)?;
                self.write_atom(tags::TIMESTAMP, &t.nanos().to_ne_bytes())
            }
            Value::Month(m) => self.write_atom(tags::MONTH, &m.months().to_ne_bytes()),
            Value::Date(d) => self.write_atom(tags::DATE, &d.days().to_ne_bytes()),
            Value::Datetime(dt) => self.write_atom(tags::DATETIME, &dt.days().to_ne_bytes()),
            Value::Timespan(span) => {
                self.check_temporal_version(tags::TIMESPAN)?;
                self.write_atom(tags::TIMESPAN, &span.nanos().to_ne_bytes())
            }
            Value::Minute(m) => self.write_atom(tags::MINUTE, &m.minutes().to_ne_bytes()),
            Value::Second(s) => self.write_atom(tags::SECOND, &s.seconds().to_ne_bytes()),
            Value::Time(t) => self.write_atom(tags::TIME, &t.millis().to_ne_bytes()),
            Value::List(list) => self.write_list(list),
            Value::Mixed(items) => self.write_general_list(items),
            Value::Dict(dict) => self.write_dict(dict),
            Value::Table(table) => self.write_table(table),
            Value::KeyedTable(table) => self.write_keyed_table(table),
            Value::Lambda(lambda) => self.write_lambda(lambda),
            Value::Projection(projection) => self.write_projection(projection),
        }
    }

    /// Writes a tag byte and the fixed-width payload the catalogue assigns to
    /// it. The payload must match the tag's registered layout exactly.
    fn write_atom(&mut self, tag: Tag, payload: &[u8]) -> EncodeResult<()> {
        match tags::fixed_width(tag) {
            Some(width) if width == payload.len() => {
                self.buf.put_tag(tag);
                self.buf.put_bytes(payload);
                Ok(())
            }
            _ => Err(EncodeError::UnsupportedType {
                kind: format!("atom tag {}", tag),
            }),
        }
    }

    fn write_char(&mut self, c: char) -> EncodeResult<()> {
        let byte = self.encoding.encode_char(c)?;
        self.write_atom(tags::CHAR, &[byte])
    }

    /// Writes a symbol: tag, bytes, single zero terminator. The empty symbol
    /// is just the terminator.
    pub(crate) fn write_symbol(&mut self, name: &str) -> EncodeResult<()> {
        let bytes = self.encoding.encode_str(name)?;
        self.buf.put_tag(tags::SYMBOL);
        if !bytes.is_empty() {
            self.buf.put_bytes(&bytes);
        }
        self.buf.put_u8(0);
        Ok(())
    }

    /// Writes a character string as a length-prefixed char list. A
    /// one-character string collapses to a char atom unless the options keep
    /// single-char strings.
    pub(crate) fn write_string(&mut self, text: &str) -> EncodeResult<()> {
        if !self.options.single_char_strings {
            let mut chars = text.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                return self.write_char(c);
            }
        }
        let bytes = self.encoding.encode_str(text)?;
        self.buf.put_tag(tags::STRING);
        self.buf.put_u8(0);
        self.buf.put_i32(bytes.len() as i32);
        self.buf.put_bytes(&bytes);
        Ok(())
    }

    fn write_guid(&mut self, guid: &Uuid) -> EncodeResult<()> {
        self.check_guid_version()?;
        self.buf.put_tag(tags::GUID);
        self.buf.put_bytes(guid.as_bytes());
        Ok(())
    }

    /// Writes an error signal: tag, message bytes, zero terminator. The zero
    /// byte is the only delimiter, as with symbols.
    fn write_error(&mut self, signal: &Signal) -> EncodeResult<()> {
        let bytes = self.encoding.encode_str(signal.text())?;
        self.buf.put_tag(tags::ERROR);
        self.buf.put_bytes(&bytes);
        self.buf.put_u8(0);
        Ok(())
    }

    /// GUIDs joined the protocol in version 3.
    pub(crate) fn check_guid_version(&self) -> EncodeResult<()> {
        if self.protocol_version < 3 {
            return Err(EncodeError::ProtocolVersion {
                feature: "guid".to_string(),
                required: 3,
                active: self.protocol_version,
            });
        }
        Ok(())
    }

    /// Timestamps and timespans joined the protocol in version 1; the other
    /// temporal kinds predate versioning.
    pub(crate) fn check_temporal_version(&self, tag: Tag) -> EncodeResult<()> {
        if self.protocol_version < 1 && matches!(tag, tags::TIMESTAMP | tags::TIMESPAN) {
            return Err(EncodeError::ProtocolVersion {
                feature: format!("type {:#04x}", tag as u8),
                required: 1,
                active: self.protocol_version,
            });
        }
        Ok(())
    }
}
