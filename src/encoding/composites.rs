//! Dictionary, table, and keyed-table encoders.

use super::encoder::Encoder;
use super::error::EncodeResult;
use crate::tags;
use crate::types::{Dictionary, KeyedTable, Table};

impl Encoder {
    /// Writes a dictionary: tag, then keys and values back to back.
    ///
    /// Cardinality of the two sides is deliberately not checked; the
    /// protocol frames them independently and validation belongs to the
    /// caller (or the builder API).
    pub(crate) fn write_dict(&mut self, dict: &Dictionary) -> EncodeResult<()> {
        self.buf.put_tag(tags::DICTIONARY);
        self.write_value(&dict.keys)?;
        self.write_value(&dict.values)
    }

    /// A keyed table is a dictionary of two tables; the wire layout is
    /// identical to [`Self::write_dict`].
    pub(crate) fn write_keyed_table(&mut self, table: &KeyedTable) -> EncodeResult<()> {
        self.buf.put_tag(tags::DICTIONARY);
        self.write_table(&table.keys)?;
        self.write_table(&table.values)
    }

    /// Writes a table as a typed dictionary: column-name symbol list mapped
    /// to a general list of columns. Columns carry their own type tags, so
    /// an empty typed column still declares its element kind.
    pub(crate) fn write_table(&mut self, table: &Table) -> EncodeResult<()> {
        self.buf.put_tag(tags::TABLE);
        self.buf.put_u8(0);
        self.buf.put_tag(tags::DICTIONARY);

        self.buf.put_tag(tags::SYMBOL_LIST);
        self.buf.put_u8(0);
        self.buf.put_i32(table.names.len() as i32);
        self.write_symbol_elements(&table.names)?;

        self.buf.put_tag(tags::GENERAL_LIST);
        self.buf.put_u8(0);
        self.buf.put_i32(table.columns.len() as i32);
        for column in &table.columns {
            self.write_value(column)?;
        }
        Ok(())
    }
}
