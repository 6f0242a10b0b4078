//! Display formatting for q values.
//!
//! Values render as q console literals (`` `sym ``, `2001.01.01`, `1 2 3h`),
//! which keeps log lines and test failures readable next to a q session.
//! These forms are diagnostics only; nothing here feeds the wire format.

use std::fmt;

use crate::time::{
    Date, Datetime, MILLENNIUM_OFFSET_DAYS, MILLIS_PER_DAY, Minute, Month, NANOS_PER_DAY,
    NANOS_PER_SEC, Second, Time, Timespan, Timestamp, civil_from_days,
};
use crate::types::{List, Signal, Value};

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    write!(f, "\"")?;
    for c in text.chars() {
        match c {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            _ => write!(f, "{}", c)?,
        }
    }
    write!(f, "\"")
}

fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        write!(f, "0n")
    } else if x.is_infinite() {
        write!(f, "{}0w", if x < 0.0 { "-" } else { "" })
    } else if x == x.trunc() {
        write!(f, "{}f", x as i64)
    } else {
        write!(f, "{}", x)
    }
}

fn write_joined<T, F>(f: &mut fmt::Formatter<'_>, items: &[T], mut each: F) -> fmt::Result
where
    F: FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
{
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        each(f, item)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "::"),
            Value::Bool(b) => write!(f, "{}b", u8::from(*b)),
            Value::Guid(g) => write!(f, "{}", g),
            Value::Byte(x) => write!(f, "0x{:02x}", x),
            Value::Short(x) => write!(f, "{}h", x),
            Value::Int(x) => write!(f, "{}i", x),
            Value::Long(x) => write!(f, "{}", x),
            Value::Real(x) => write!(f, "{}e", x),
            Value::Float(x) => write_float(f, *x),
            Value::Char(c) => write!(f, "\"{}\"", c),
            Value::Symbol(s) => write!(f, "`{}", s),
            Value::String(s) => write_escaped(f, s),
            Value::Timestamp(t) => write!(f, "{}", t),
            Value::Month(m) => write!(f, "{}", m),
            Value::Date(d) => write!(f, "{}", d),
            Value::Datetime(dt) => write!(f, "{}", dt),
            Value::Timespan(span) => write!(f, "{}", span),
            Value::Minute(m) => write!(f, "{}", m),
            Value::Second(s) => write!(f, "{}", s),
            Value::Time(t) => write!(f, "{}", t),
            Value::List(list) => write!(f, "{}", list),
            Value::Mixed(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ";")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
            Value::Dict(dict) => write!(f, "{}!{}", dict.keys, dict.values),
            Value::Table(table) => {
                write!(f, "+")?;
                for name in &table.names {
                    write!(f, "`{}", name)?;
                }
                write!(f, "!(")?;
                for (i, column) in table.columns.iter().enumerate() {
                    if i > 0 {
                        write!(f, ";")?;
                    }
                    write!(f, "{}", column)?;
                }
                write!(f, ")")
            }
            Value::KeyedTable(table) => write!(
                f,
                "{}!{}",
                Value::Table(table.keys.clone()),
                Value::Table(table.values.clone())
            ),
            Value::Lambda(lambda) => write!(f, "{}", lambda.expression),
            Value::Projection(projection) => {
                write!(f, "projection[")?;
                for (i, parameter) in projection.parameters.iter().enumerate() {
                    if i > 0 {
                        write!(f, ";")?;
                    }
                    write!(f, "{}", parameter)?;
                }
                write!(f, "]")
            }
            Value::Error(signal) => write!(f, "{}", signal),
        }
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "()");
        }
        match self {
            List::Bool(items) => {
                for b in items {
                    write!(f, "{}", u8::from(*b))?;
                }
                write!(f, "b")
            }
            List::Guid(items) => write_joined(f, items, |f, g| write!(f, "{}", g)),
            List::Byte(items) => {
                write!(f, "0x")?;
                for x in items {
                    write!(f, "{:02x}", x)?;
                }
                Ok(())
            }
            List::Short(items) => {
                write_joined(f, items, |f, x| write!(f, "{}", x))?;
                write!(f, "h")
            }
            List::Int(items) => {
                write_joined(f, items, |f, x| write!(f, "{}", x))?;
                write!(f, "i")
            }
            List::Long(items) => write_joined(f, items, |f, x| write!(f, "{}", x)),
            List::Real(items) => {
                write_joined(f, items, |f, x| write!(f, "{}", x))?;
                write!(f, "e")
            }
            List::Float(items) => write_joined(f, items, |f, x| write_float(f, *x)),
            List::Symbol(items) => {
                for s in items {
                    write!(f, "`{}", s)?;
                }
                Ok(())
            }
            List::Timestamp(items) => write_joined(f, items, |f, t| write!(f, "{}", t)),
            List::Month(items) => write_joined(f, items, |f, m| write!(f, "{}", m)),
            List::Date(items) => write_joined(f, items, |f, d| write!(f, "{}", d)),
            List::Datetime(items) => write_joined(f, items, |f, dt| write!(f, "{}", dt)),
            List::Timespan(items) => write_joined(f, items, |f, s| write!(f, "{}", s)),
            List::Minute(items) => write_joined(f, items, |f, m| write!(f, "{}", m)),
            List::Second(items) => write_joined(f, items, |f, s| write!(f, "{}", s)),
            List::Time(items) => write_joined(f, items, |f, t| write!(f, "{}", t)),
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}", self.text())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = civil_from_days(i64::from(self.days()) + MILLENNIUM_OFFSET_DAYS);
        write!(f, "{:04}.{:02}.{:02}", y, m, d)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let y = 2000 + self.months().div_euclid(12);
        let m = self.months().rem_euclid(12) + 1;
        write!(f, "{:04}.{:02}m", y, m)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.nanos().div_euclid(NANOS_PER_DAY);
        let rest = self.nanos().rem_euclid(NANOS_PER_DAY);
        let (y, m, d) = civil_from_days(days + MILLENNIUM_OFFSET_DAYS);
        let secs = rest / NANOS_PER_SEC;
        write!(
            f,
            "{:04}.{:02}.{:02}D{:02}:{:02}:{:02}.{:09}",
            y,
            m,
            d,
            secs / 3600,
            secs / 60 % 60,
            secs % 60,
            rest % NANOS_PER_SEC
        )
    }
}

impl fmt::Display for Datetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let millis = (self.days() * MILLIS_PER_DAY as f64).round() as i64;
        let days = millis.div_euclid(MILLIS_PER_DAY);
        let rest = millis.rem_euclid(MILLIS_PER_DAY);
        let (y, m, d) = civil_from_days(days + MILLENNIUM_OFFSET_DAYS);
        let secs = rest / 1000;
        write!(
            f,
            "{:04}.{:02}.{:02}T{:02}:{:02}:{:02}.{:03}",
            y,
            m,
            d,
            secs / 3600,
            secs / 60 % 60,
            secs % 60,
            rest % 1000
        )
    }
}

impl fmt::Display for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.nanos() < 0 { "-" } else { "" };
        let total = self.nanos().unsigned_abs();
        let secs = total / NANOS_PER_SEC as u64;
        write!(
            f,
            "{}{}D{:02}:{:02}:{:02}.{:09}",
            sign,
            secs / 86_400,
            secs / 3600 % 24,
            secs / 60 % 60,
            secs % 60,
            total % NANOS_PER_SEC as u64
        )
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minutes() < 0 { "-" } else { "" };
        let total = self.minutes().unsigned_abs();
        write!(f, "{}{:02}:{:02}", sign, total / 60, total % 60)
    }
}

impl fmt::Display for Second {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.seconds() < 0 { "-" } else { "" };
        let total = self.seconds().unsigned_abs();
        write!(
            f,
            "{}{:02}:{:02}:{:02}",
            sign,
            total / 3600,
            total / 60 % 60,
            total % 60
        )
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.millis() < 0 { "-" } else { "" };
        let total = self.millis().unsigned_abs();
        let secs = total / 1000;
        write!(
            f,
            "{}{:02}:{:02}:{:02}.{:03}",
            sign,
            secs / 3600,
            secs / 60 % 60,
            secs % 60,
            total % 1000
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Dictionary};

    #[test]
    fn test_atom_literals() {
        assert_eq!(Value::Null.to_string(), "::");
        assert_eq!(Value::Bool(true).to_string(), "1b");
        assert_eq!(Value::Byte(0x2A).to_string(), "0x2a");
        assert_eq!(Value::Short(-3).to_string(), "-3h");
        assert_eq!(Value::Int(7).to_string(), "7i");
        assert_eq!(Value::Long(42).to_string(), "42");
        assert_eq!(Value::Float(5.0).to_string(), "5f");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::symbol("trade").to_string(), "`trade");
        assert_eq!(Value::string("a\"b").to_string(), "\"a\\\"b\"");
    }

    #[test]
    fn test_list_literals() {
        assert_eq!(List::Bool(vec![true, false, true]).to_string(), "101b");
        assert_eq!(List::Byte(vec![0xDE, 0xAD]).to_string(), "0xdead");
        assert_eq!(List::Long(vec![1, 2, 3]).to_string(), "1 2 3");
        assert_eq!(List::Short(vec![1, 2]).to_string(), "1 2h");
        assert_eq!(
            List::Symbol(vec!["a".into(), "b".into()]).to_string(),
            "`a`b"
        );
        assert_eq!(List::Long(vec![]).to_string(), "()");
    }

    #[test]
    fn test_temporal_literals() {
        assert_eq!(Date::from_ymd(2001, 1, 1).to_string(), "2001.01.01");
        assert_eq!(Month::from_ym(2001, 2).to_string(), "2001.02m");
        assert_eq!(Minute::from_minutes(150).to_string(), "02:30");
        assert_eq!(Minute::from_minutes(-90).to_string(), "-01:30");
        assert_eq!(Second::from_seconds(3_723).to_string(), "01:02:03");
        assert_eq!(Time::from_millis(45_296_789).to_string(), "12:34:56.789");
        assert_eq!(
            Timespan::from_nanos(90_061_000_000_123).to_string(),
            "1D01:01:01.000000123"
        );
        assert_eq!(
            Timestamp::from_nanos(86_400_000_000_000).to_string(),
            "2000.01.02D00:00:00.000000000"
        );
        assert_eq!(
            Datetime::from_days(0.5).to_string(),
            "2000.01.01T12:00:00.000"
        );
    }

    #[test]
    fn test_composite_literals() {
        let dict = Dictionary::new(
            Value::List(List::Symbol(vec!["a".into(), "b".into()])),
            Value::List(List::Long(vec![1, 2])),
        );
        assert_eq!(Value::Dict(dict).to_string(), "`a`b!1 2");

        let mixed = Value::Mixed(vec![Value::Long(1), Value::symbol("a")]);
        assert_eq!(mixed.to_string(), "(1;`a)");

        assert_eq!(
            Value::Error(Signal::Category(Category::Length)).to_string(),
            "'length"
        );
    }
}
