//! Core q value model.
//!
//! This module contains the closed set of value kinds the encoder understands:
//! atoms, typed lists, general lists, dictionaries, tables, functions, and
//! error signals. Values are plain data; the encoder borrows them read-only
//! for the duration of a single write.

use crate::tags::{self, Tag};
use crate::time::{Date, Datetime, Minute, Month, Second, Time, Timespan, Timestamp};
use uuid::Uuid;

/// A q value.
///
/// The enumeration is closed: every kind the protocol can carry has exactly
/// one variant here, and the encoder dispatches on it exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The identity value `::`, also used for an absent payload.
    Null,
    Bool(bool),
    /// Requires protocol version 3 on the wire.
    Guid(Uuid),
    Byte(u8),
    Short(i16),
    Int(i32),
    Long(i64),
    Real(f32),
    Float(f64),
    /// A single character; must fit one byte in the writer's encoding.
    Char(char),
    /// An interned name, zero-terminated on the wire.
    Symbol(String),
    /// A character string, i.e. a char list.
    String(String),
    Timestamp(Timestamp),
    Month(Month),
    Date(Date),
    Datetime(Datetime),
    Timespan(Timespan),
    Minute(Minute),
    Second(Second),
    Time(Time),
    /// A homogeneous typed list.
    List(List),
    /// A heterogeneous ("general") list.
    Mixed(Vec<Value>),
    Dict(Dictionary),
    Table(Table),
    KeyedTable(KeyedTable),
    Lambda(Lambda),
    Projection(Projection),
    /// An error signal.
    Error(Signal),
}

impl Value {
    /// A symbol value.
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// A character string value.
    pub fn string(text: impl Into<String>) -> Self {
        Value::String(text.into())
    }

    /// The kind name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Guid(_) => "guid",
            Value::Byte(_) => "byte",
            Value::Short(_) => "short",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Real(_) => "real",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Symbol(_) => "symbol",
            Value::String(_) => "string",
            Value::Timestamp(_) => "timestamp",
            Value::Month(_) => "month",
            Value::Date(_) => "date",
            Value::Datetime(_) => "datetime",
            Value::Timespan(_) => "timespan",
            Value::Minute(_) => "minute",
            Value::Second(_) => "second",
            Value::Time(_) => "time",
            Value::List(_) => "list",
            Value::Mixed(_) => "general list",
            Value::Dict(_) => "dictionary",
            Value::Table(_) => "table",
            Value::KeyedTable(_) => "keyed table",
            Value::Lambda(_) => "lambda",
            Value::Projection(_) => "projection",
            Value::Error(_) => "error",
        }
    }
}

/// A homogeneous typed list.
///
/// Each variant carries its element kind even when empty, so an empty column
/// still encodes with its declared type tag.
#[derive(Debug, Clone, PartialEq)]
pub enum List {
    Bool(Vec<bool>),
    Guid(Vec<Uuid>),
    Byte(Vec<u8>),
    Short(Vec<i16>),
    Int(Vec<i32>),
    Long(Vec<i64>),
    Real(Vec<f32>),
    Float(Vec<f64>),
    Symbol(Vec<String>),
    Timestamp(Vec<Timestamp>),
    Month(Vec<Month>),
    Date(Vec<Date>),
    Datetime(Vec<Datetime>),
    Timespan(Vec<Timespan>),
    Minute(Vec<Minute>),
    Second(Vec<Second>),
    Time(Vec<Time>),
}

impl List {
    /// The atom tag of this list's element kind.
    pub fn element_tag(&self) -> Tag {
        match self {
            List::Bool(_) => tags::BOOLEAN,
            List::Guid(_) => tags::GUID,
            List::Byte(_) => tags::BYTE,
            List::Short(_) => tags::SHORT,
            List::Int(_) => tags::INT,
            List::Long(_) => tags::LONG,
            List::Real(_) => tags::REAL,
            List::Float(_) => tags::FLOAT,
            List::Symbol(_) => tags::SYMBOL,
            List::Timestamp(_) => tags::TIMESTAMP,
            List::Month(_) => tags::MONTH,
            List::Date(_) => tags::DATE,
            List::Datetime(_) => tags::DATETIME,
            List::Timespan(_) => tags::TIMESPAN,
            List::Minute(_) => tags::MINUTE,
            List::Second(_) => tags::SECOND,
            List::Time(_) => tags::TIME,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            List::Bool(v) => v.len(),
            List::Guid(v) => v.len(),
            List::Byte(v) => v.len(),
            List::Short(v) => v.len(),
            List::Int(v) => v.len(),
            List::Long(v) => v.len(),
            List::Real(v) => v.len(),
            List::Float(v) => v.len(),
            List::Symbol(v) => v.len(),
            List::Timestamp(v) => v.len(),
            List::Month(v) => v.len(),
            List::Date(v) => v.len(),
            List::Datetime(v) => v.len(),
            List::Timespan(v) => v.len(),
            List::Minute(v) => v.len(),
            List::Second(v) => v.len(),
            List::Time(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An ordered key/value pairing.
///
/// The protocol pairs keys and values positionally; this type does not check
/// that the two sides have equal cardinality, and neither does the encoder.
/// Use the builder API when that validation is wanted.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    pub keys: Box<Value>,
    pub values: Box<Value>,
}

impl Dictionary {
    pub fn new(keys: Value, values: Value) -> Self {
        Self {
            keys: Box::new(keys),
            values: Box::new(values),
        }
    }
}

/// A column-oriented table: named columns of equal length.
///
/// On the wire a table is a typed dictionary from a symbol list of column
/// names to a general list of columns. Column lengths are not validated here;
/// [`crate::builders::TableBuilder`] performs that check at build time.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column names, in column order.
    pub names: Vec<String>,
    /// Column data, parallel to `names`. Typically `Value::List`,
    /// `Value::Mixed`, or `Value::String` per column.
    pub columns: Vec<Value>,
}

impl Table {
    pub fn new(names: Vec<String>, columns: Vec<Value>) -> Self {
        Self { names, columns }
    }
}

/// A table split into key columns and data columns.
///
/// Wire layout is identical to a dictionary of two tables; the distinction
/// from [`Dictionary`] is purely type-level.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedTable {
    pub keys: Table,
    pub values: Table,
}

impl KeyedTable {
    pub fn new(keys: Table, values: Table) -> Self {
        Self { keys, values }
    }
}

/// A deferred function reference carrying q source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    pub expression: String,
}

impl Lambda {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }
}

/// A partially applied function with its bound parameter values.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub parameters: Vec<Value>,
}

impl Projection {
    pub fn new(parameters: Vec<Value>) -> Self {
        Self { parameters }
    }
}

/// An error signal: either a message of its own, or a bare reference to one
/// of the standard error categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// A signal with an explicit message.
    Message(String),
    /// A category reference; the category name stands in for the message.
    Category(Category),
}

impl Signal {
    pub fn message(msg: impl Into<String>) -> Self {
        Signal::Message(msg.into())
    }

    /// The message text that goes on the wire.
    pub fn text(&self) -> &str {
        match self {
            Signal::Message(msg) => msg,
            Signal::Category(cat) => cat.name(),
        }
    }
}

/// The standard q error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Type,
    Length,
    Rank,
    Domain,
    Limit,
    Nyi,
    WsFull,
}

impl Category {
    /// Looks a category up by its q name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "type" => Some(Category::Type),
            "length" => Some(Category::Length),
            "rank" => Some(Category::Rank),
            "domain" => Some(Category::Domain),
            "limit" => Some(Category::Limit),
            "nyi" => Some(Category::Nyi),
            "wsfull" => Some(Category::WsFull),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Type => "type",
            Category::Length => "length",
            Category::Rank => "rank",
            Category::Domain => "domain",
            Category::Limit => "limit",
            Category::Nyi => "nyi",
            Category::WsFull => "wsfull",
        }
    }
}

macro_rules! impl_value_from {
    ($($from:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$from> for Value {
                fn from(v: $from) -> Self {
                    Value::$variant(v)
                }
            }
        )+
    };
}

impl_value_from! {
    bool => Bool,
    Uuid => Guid,
    u8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Real,
    f64 => Float,
    char => Char,
    Timestamp => Timestamp,
    Month => Month,
    Date => Date,
    Datetime => Datetime,
    Timespan => Timespan,
    Minute => Minute,
    Second => Second,
    Time => Time,
    List => List,
    Vec<Value> => Mixed,
    Dictionary => Dict,
    Table => Table,
    KeyedTable => KeyedTable,
    Lambda => Lambda,
    Projection => Projection,
    Signal => Error,
}

macro_rules! impl_list_from {
    ($($from:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<Vec<$from>> for List {
                fn from(v: Vec<$from>) -> Self {
                    List::$variant(v)
                }
            }
        )+
    };
}

impl_list_from! {
    bool => Bool,
    Uuid => Guid,
    u8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Real,
    f64 => Float,
    String => Symbol,
    Timestamp => Timestamp,
    Month => Month,
    Date => Date,
    Datetime => Datetime,
    Timespan => Timespan,
    Minute => Minute,
    Second => Second,
    Time => Time,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_element_tags() {
        assert_eq!(List::Long(vec![1, 2]).element_tag(), tags::LONG);
        assert_eq!(List::Symbol(vec![]).element_tag(), tags::SYMBOL);
        assert_eq!(List::Guid(vec![]).element_tag(), tags::GUID);
    }

    #[test]
    fn test_empty_list_keeps_kind() {
        let empty = List::Timestamp(vec![]);
        assert!(empty.is_empty());
        assert_eq!(empty.element_tag(), tags::TIMESTAMP);
    }

    #[test]
    fn test_signal_text() {
        assert_eq!(Signal::message("boom").text(), "boom");
        assert_eq!(Signal::Category(Category::Type).text(), "type");
    }

    #[test]
    fn test_value_from_conversions() {
        assert_eq!(Value::from(42i64), Value::Long(42));
        assert_eq!(Value::from(List::from(vec![1i32, 2])).kind_name(), "list");
    }
}
