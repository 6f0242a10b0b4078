//! The q wire type tag catalogue.
//!
//! Every value on the wire is introduced by a signed type tag. Atom tags are
//! negative; the tag of a homogeneous list is the negation of its element's
//! atom tag. The tag space is fixed by the protocol; nothing in this crate
//! ever invents a tag outside this catalogue.

/// A signed wire type tag.
pub type Tag = i8;

/// Boolean atom (1 byte, 0 or 1).
pub const BOOLEAN: Tag = -1;
/// GUID atom (16 bytes). Requires protocol version 3.
pub const GUID: Tag = -2;
/// Byte atom (1 byte).
pub const BYTE: Tag = -4;
/// Short atom (2-byte signed integer).
pub const SHORT: Tag = -5;
/// Int atom (4-byte signed integer).
pub const INT: Tag = -6;
/// Long atom (8-byte signed integer).
pub const LONG: Tag = -7;
/// Real atom (4-byte float).
pub const REAL: Tag = -8;
/// Float atom (8-byte float).
pub const FLOAT: Tag = -9;
/// Char atom (1 byte in the writer's character encoding).
pub const CHAR: Tag = -10;
/// Symbol atom (zero-terminated byte run).
pub const SYMBOL: Tag = -11;
/// Timestamp atom (nanoseconds since 2000.01.01). Requires protocol version 1.
pub const TIMESTAMP: Tag = -12;
/// Month atom (months since 2000.01).
pub const MONTH: Tag = -13;
/// Date atom (days since 2000.01.01).
pub const DATE: Tag = -14;
/// Datetime atom (fractional days since 2000.01.01).
pub const DATETIME: Tag = -15;
/// Timespan atom (signed nanosecond span). Requires protocol version 1.
pub const TIMESPAN: Tag = -16;
/// Minute atom (minutes since midnight).
pub const MINUTE: Tag = -17;
/// Second atom (seconds since midnight).
pub const SECOND: Tag = -18;
/// Time atom (milliseconds since midnight).
pub const TIME: Tag = -19;

/// Heterogeneous ("general") list.
pub const GENERAL_LIST: Tag = 0;
/// Character string, i.e. a char list.
pub const STRING: Tag = 10;
/// Symbol list.
pub const SYMBOL_LIST: Tag = 11;
/// Column-oriented table.
pub const TABLE: Tag = 98;
/// Dictionary; keyed tables share this tag.
pub const DICTIONARY: Tag = 99;
/// Lambda carrying a source expression.
pub const LAMBDA: Tag = 100;
/// The identity value `::`, used to encode an absent payload.
pub const IDENTITY: Tag = 101;
/// Partially applied function.
pub const PROJECTION: Tag = 104;
/// Error signal.
pub const ERROR: Tag = -128;

/// Fixed payload width in bytes for an atom tag, or `None` when the tag has
/// no fixed-width layout (symbols and the structural tags).
pub fn fixed_width(tag: Tag) -> Option<usize> {
    match tag {
        BOOLEAN | BYTE | CHAR => Some(1),
        SHORT => Some(2),
        INT | MONTH | DATE | MINUTE | SECOND | TIME => Some(4),
        LONG | TIMESTAMP | TIMESPAN => Some(8),
        REAL => Some(4),
        FLOAT | DATETIME => Some(8),
        GUID => Some(16),
        _ => None,
    }
}

/// True for the eight temporal atom tags.
pub fn is_temporal(tag: Tag) -> bool {
    (TIME..=TIMESTAMP).contains(&tag)
}
