//! List encoders: typed lists, symbol and GUID element runs, temporal raw
//! conversion, and the heterogeneous general list.

use super::encoder::Encoder;
use super::error::EncodeResult;
use crate::tags;
use crate::types::{List, Value};

impl Encoder {
    /// Writes a homogeneous typed list.
    ///
    /// The header is the negated element tag, an attributes byte, and a
    /// 4-byte count. Element payloads follow contiguously except for symbols
    /// (zero-terminated runs) and GUIDs (raw 16-byte values).
    pub(crate) fn write_list(&mut self, list: &List) -> EncodeResult<()> {
        let tag = list.element_tag();
        self.check_temporal_version(tag)?;
        if tag == tags::GUID {
            self.check_guid_version()?;
        }

        self.buf.put_tag(-tag);
        self.buf.put_u8(0);
        self.buf.put_i32(list.len() as i32);

        match list {
            List::Bool(items) => {
                for b in items {
                    self.buf.put_u8(u8::from(*b));
                }
            }
            List::Guid(items) => {
                for guid in items {
                    self.buf.put_bytes(guid.as_bytes());
                }
            }
            List::Byte(items) => self.buf.put_bytes(items),
            List::Short(items) => {
                for x in items {
                    self.buf.put_i16(*x);
                }
            }
            List::Int(items) => {
                for x in items {
                    self.buf.put_i32(*x);
                }
            }
            List::Long(items) => {
                for x in items {
                    self.buf.put_i64(*x);
                }
            }
            List::Real(items) => {
                for x in items {
                    self.buf.put_f32(*x);
                }
            }
            List::Float(items) => {
                for x in items {
                    self.buf.put_f64(*x);
                }
            }
            List::Symbol(items) => self.write_symbol_elements(items)?,
            // Temporal elements are converted to their raw epoch-relative
            // counts as the array is written out.
            List::Timestamp(items) => {
                for t in items {
                    self.buf.put_i64(t.nanos());
                }
            }
            List::Month(items) => {
                for m in items {
                    self.buf.put_i32(m.months());
                }
            }
            List::Date(items) => {
                for d in items {
                    self.buf.put_i32(d.days());
                }
            }
            List::Datetime(items) => {
                for dt in items {
                    self.buf.put_f64(dt.days());
                }
            }
            List::Timespan(items) => {
                for span in items {
                    self.buf.put_i64(span.nanos());
                }
            }
            List::Minute(items) => {
                for m in items {
                    self.buf.put_i32(m.minutes());
                }
            }
            List::Second(items) => {
                for s in items {
                    self.buf.put_i32(s.seconds());
                }
            }
            List::Time(items) => {
                for t in items {
                    self.buf.put_i32(t.millis());
                }
            }
        }
        Ok(())
    }

    /// Writes each symbol as its bytes followed by a zero terminator, the
    /// same rule the scalar symbol encoder applies.
    pub(crate) fn write_symbol_elements(&mut self, names: &[String]) -> EncodeResult<()> {
        for name in names {
            let bytes = self.encoding.encode_str(name)?;
            if !bytes.is_empty() {
                self.buf.put_bytes(&bytes);
            }
            self.buf.put_u8(0);
        }
        Ok(())
    }

    /// Writes a general list: header plus each element dispatched
    /// independently. This is the only place a list may be heterogeneous.
    pub(crate) fn write_general_list(&mut self, items: &[Value]) -> EncodeResult<()> {
        self.buf.put_tag(tags::GENERAL_LIST);
        self.buf.put_u8(0);
        self.buf.put_i32(items.len() as i32);
        for item in items {
            self.write_value(item)?;
        }
        Ok(())
    }
}
