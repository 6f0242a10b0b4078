//! Tagged-JSON representation of q values.
//!
//! Values serialize as `{"type": "...", ...}` objects: atoms carry their
//! payload under `value`, temporal kinds carry their raw epoch-relative
//! counts, and composites nest recursively. The CLI uses this representation
//! to accept values from the command line; it is also handy for fixtures and
//! tooling.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::time::{Date, Datetime, Minute, Month, Second, Time, Timespan, Timestamp};
use crate::types::{
    Category, Dictionary, KeyedTable, Lambda, List, Projection, Signal, Table, Value,
};

/// The serialized shape of a [`Value`], one variant per `"type"` tag.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Repr {
    Null,
    Boolean { value: bool },
    Guid { value: String },
    Byte { value: u8 },
    Short { value: i16 },
    Int { value: i32 },
    Long { value: i64 },
    Real { value: f32 },
    Float { value: f64 },
    Char { value: char },
    Symbol { value: String },
    String { value: String },
    Timestamp { value: i64 },
    Month { value: i32 },
    Date { value: i32 },
    Datetime { value: f64 },
    Timespan { value: i64 },
    Minute { value: i32 },
    Second { value: i32 },
    Time { value: i32 },
    Booleans { value: Vec<bool> },
    Guids { value: Vec<String> },
    Bytes { value: Vec<u8> },
    Shorts { value: Vec<i16> },
    Ints { value: Vec<i32> },
    Longs { value: Vec<i64> },
    Reals { value: Vec<f32> },
    Floats { value: Vec<f64> },
    Symbols { value: Vec<String> },
    Timestamps { value: Vec<i64> },
    Months { value: Vec<i32> },
    Dates { value: Vec<i32> },
    Datetimes { value: Vec<f64> },
    Timespans { value: Vec<i64> },
    Minutes { value: Vec<i32> },
    Seconds { value: Vec<i32> },
    Times { value: Vec<i32> },
    General { value: Vec<Repr> },
    Dictionary { keys: Box<Repr>, values: Box<Repr> },
    Table { names: Vec<String>, columns: Vec<Repr> },
    KeyedTable { keys: Box<Repr>, values: Box<Repr> },
    Lambda { value: String },
    Projection { value: Vec<Repr> },
    Error {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        category: Option<String>,
    },
}

fn table_repr(table: &Table) -> Repr {
    Repr::Table {
        names: table.names.clone(),
        columns: table.columns.iter().map(Repr::from).collect(),
    }
}

impl From<&Value> for Repr {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Repr::Null,
            Value::Bool(b) => Repr::Boolean { value: *b },
            Value::Guid(g) => Repr::Guid {
                value: g.to_string(),
            },
            Value::Byte(x) => Repr::Byte { value: *x },
            Value::Short(x) => Repr::Short { value: *x },
            Value::Int(x) => Repr::Int { value: *x },
            Value::Long(x) => Repr::Long { value: *x },
            Value::Real(x) => Repr::Real { value: *x },
            Value::Float(x) => Repr::Float { value: *x },
            Value::Char(c) => Repr::Char { value: *c },
            Value::Symbol(s) => Repr::Symbol { value: s.clone() },
            Value::String(s) => Repr::String { value: s.clone() },
            Value::Timestamp(t) => Repr::Timestamp { value: t.nanos() },
            Value::Month(m) => Repr::Month { value: m.months() },
            Value::Date(d) => Repr::Date { value: d.days() },
            Value::Datetime(dt) => Repr::Datetime { value: dt.days() },
            Value::Timespan(s) => Repr::Timespan { value: s.nanos() },
            Value::Minute(m) => Repr::Minute { value: m.minutes() },
            Value::Second(s) => Repr::Second { value: s.seconds() },
            Value::Time(t) => Repr::Time { value: t.millis() },
            Value::List(list) => match list {
                List::Bool(v) => Repr::Booleans { value: v.clone() },
                List::Guid(v) => Repr::Guids {
                    value: v.iter().map(Uuid::to_string).collect(),
                },
                List::Byte(v) => Repr::Bytes { value: v.clone() },
                List::Short(v) => Repr::Shorts { value: v.clone() },
                List::Int(v) => Repr::Ints { value: v.clone() },
                List::Long(v) => Repr::Longs { value: v.clone() },
                List::Real(v) => Repr::Reals { value: v.clone() },
                List::Float(v) => Repr::Floats { value: v.clone() },
                List::Symbol(v) => Repr::Symbols { value: v.clone() },
                List::Timestamp(v) => Repr::Timestamps {
                    value: v.iter().map(Timestamp::nanos).collect(),
                },
                List::Month(v) => Repr::Months {
                    value: v.iter().map(Month::months).collect(),
                },
                List::Date(v) => Repr::Dates {
                    value: v.iter().map(Date::days).collect(),
                },
                List::Datetime(v) => Repr::Datetimes {
                    value: v.iter().map(Datetime::days).collect(),
                },
                List::Timespan(v) => Repr::Timespans {
                    value: v.iter().map(Timespan::nanos).collect(),
                },
                List::Minute(v) => Repr::Minutes {
                    value: v.iter().map(Minute::minutes).collect(),
                },
                List::Second(v) => Repr::Seconds {
                    value: v.iter().map(Second::seconds).collect(),
                },
                List::Time(v) => Repr::Times {
                    value: v.iter().map(Time::millis).collect(),
                },
            },
            Value::Mixed(items) => Repr::General {
                value: items.iter().map(Repr::from).collect(),
            },
            Value::Dict(dict) => Repr::Dictionary {
                keys: Box::new(Repr::from(dict.keys.as_ref())),
                values: Box::new(Repr::from(dict.values.as_ref())),
            },
            Value::Table(table) => table_repr(table),
            Value::KeyedTable(table) => Repr::KeyedTable {
                keys: Box::new(table_repr(&table.keys)),
                values: Box::new(table_repr(&table.values)),
            },
            Value::Lambda(lambda) => Repr::Lambda {
                value: lambda.expression.clone(),
            },
            Value::Projection(projection) => Repr::Projection {
                value: projection.parameters.iter().map(Repr::from).collect(),
            },
            Value::Error(signal) => match signal {
                Signal::Message(msg) => Repr::Error {
                    value: Some(msg.clone()),
                    category: None,
                },
                Signal::Category(cat) => Repr::Error {
                    value: None,
                    category: Some(cat.name().to_string()),
                },
            },
        }
    }
}

fn parse_guid(text: &str) -> Result<Uuid, String> {
    Uuid::parse_str(text).map_err(|e| format!("invalid guid {:?}: {}", text, e))
}

fn value_table(repr: Repr) -> Result<Table, String> {
    match Value::try_from(repr)? {
        Value::Table(table) => Ok(table),
        other => Err(format!("expected a table, found {}", other.kind_name())),
    }
}

impl TryFrom<Repr> for Value {
    type Error = String;

    fn try_from(repr: Repr) -> Result<Self, String> {
        Ok(match repr {
            Repr::Null => Value::Null,
            Repr::Boolean { value } => Value::Bool(value),
            Repr::Guid { value } => Value::Guid(parse_guid(&value)?),
            Repr::Byte { value } => Value::Byte(value),
            Repr::Short { value } => Value::Short(value),
            Repr::Int { value } => Value::Int(value),
            Repr::Long { value } => Value::Long(value),
            Repr::Real { value } => Value::Real(value),
            Repr::Float { value } => Value::Float(value),
            Repr::Char { value } => Value::Char(value),
            Repr::Symbol { value } => Value::Symbol(value),
            Repr::String { value } => Value::String(value),
            Repr::Timestamp { value } => Value::Timestamp(Timestamp::from_nanos(value)),
            Repr::Month { value } => Value::Month(Month::from_months(value)),
            Repr::Date { value } => Value::Date(Date::from_days(value)),
            Repr::Datetime { value } => Value::Datetime(Datetime::from_days(value)),
            Repr::Timespan { value } => Value::Timespan(Timespan::from_nanos(value)),
            Repr::Minute { value } => Value::Minute(Minute::from_minutes(value)),
            Repr::Second { value } => Value::Second(Second::from_seconds(value)),
            Repr::Time { value } => Value::Time(Time::from_millis(value)),
            Repr::Booleans { value } => Value::List(List::Bool(value)),
            Repr::Guids { value } => Value::List(List::Guid(
                value
                    .iter()
                    .map(|s| parse_guid(s))
                    .collect::<Result<_, _>>()?,
            )),
            Repr::Bytes { value } => Value::List(List::Byte(value)),
            Repr::Shorts { value } => Value::List(List::Short(value)),
            Repr::Ints { value } => Value::List(List::Int(value)),
            Repr::Longs { value } => Value::List(List::Long(value)),
            Repr::Reals { value } => Value::List(List::Real(value)),
            Repr::Floats { value } => Value::List(List::Float(value)),
            Repr::Symbols { value } => Value::List(List::Symbol(value)),
            Repr::Timestamps { value } => Value::List(List::Timestamp(
                value.into_iter().map(Timestamp::from_nanos).collect(),
            )),
            Repr::Months { value } => Value::List(List::Month(
                value.into_iter().map(Month::from_months).collect(),
            )),
            Repr::Dates { value } => Value::List(List::Date(
                value.into_iter().map(Date::from_days).collect(),
            )),
            Repr::Datetimes { value } => Value::List(List::Datetime(
                value.into_iter().map(Datetime::from_days).collect(),
            )),
            Repr::Timespans { value } => Value::List(List::Timespan(
                value.into_iter().map(Timespan::from_nanos).collect(),
            )),
            Repr::Minutes { value } => Value::List(List::Minute(
                value.into_iter().map(Minute::from_minutes).collect(),
            )),
            Repr::Seconds { value } => Value::List(List::Second(
                value.into_iter().map(Second::from_seconds).collect(),
            )),
            Repr::Times { value } => Value::List(List::Time(
                value.into_iter().map(Time::from_millis).collect(),
            )),
            Repr::General { value } => Value::Mixed(
                value
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Repr::Dictionary { keys, values } => Value::Dict(Dictionary::new(
                Value::try_from(*keys)?,
                Value::try_from(*values)?,
            )),
            Repr::Table { names, columns } => Value::Table(Table::new(
                names,
                columns
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            )),
            Repr::KeyedTable { keys, values } => {
                Value::KeyedTable(KeyedTable::new(value_table(*keys)?, value_table(*values)?))
            }
            Repr::Lambda { value } => Value::Lambda(Lambda::new(value)),
            Repr::Projection { value } => Value::Projection(Projection::new(
                value
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            )),
            Repr::Error { value, category } => Value::Error(match (value, category) {
                (Some(msg), _) => Signal::Message(msg),
                (None, Some(name)) => Signal::Category(
                    Category::from_name(&name)
                        .ok_or_else(|| format!("unknown error category {:?}", name))?,
                ),
                (None, None) => return Err("error needs a value or a category".to_string()),
            }),
        })
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Repr::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = Repr::deserialize(deserializer)?;
        Value::try_from(repr).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(value: &Value) -> Value {
        let json = serde_json::to_string(value).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_atom_json_shape() {
        let json = serde_json::to_value(Value::Long(42)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "long", "value": 42}));
    }

    #[test]
    fn test_round_trips() {
        let values = [
            Value::Null,
            Value::Bool(true),
            Value::Char('x'),
            Value::symbol("trade"),
            Value::string("hello"),
            Value::Timestamp(Timestamp::from_nanos(12345)),
            Value::List(List::Long(vec![1, 2, 3])),
            Value::List(List::Symbol(vec!["a".into(), "b".into()])),
            Value::Mixed(vec![Value::Long(1), Value::string("two")]),
            Value::Dict(Dictionary::new(
                Value::List(List::Symbol(vec!["k".into()])),
                Value::List(List::Long(vec![9])),
            )),
            Value::Table(Table::new(
                vec!["a".into()],
                vec![Value::List(List::Int(vec![5]))],
            )),
            Value::Lambda(Lambda::new("{x+y}")),
            Value::Error(Signal::Category(Category::Type)),
        ];
        for value in values {
            assert_eq!(round_trip(&value), value);
        }
    }

    #[test]
    fn test_guid_round_trip() {
        let guid = Uuid::from_bytes([7; 16]);
        let value = round_trip(&Value::Guid(guid));
        assert_eq!(value, Value::Guid(guid));
    }

    #[test]
    fn test_invalid_guid_is_rejected() {
        let result: Result<Value, _> =
            serde_json::from_str(r#"{"type": "guid", "value": "not-a-guid"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_category_by_name() {
        let value: Value = serde_json::from_str(r#"{"type": "error", "category": "length"}"#).unwrap();
        assert_eq!(value, Value::Error(Signal::Category(Category::Length)));
    }

    #[test]
    fn test_error_without_payload_is_rejected() {
        let result: Result<Value, _> = serde_json::from_str(r#"{"type": "error"}"#);
        assert!(result.is_err());
    }
}
