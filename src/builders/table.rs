//! Builders for tables and keyed tables.

use super::error::{BuilderError, BuilderResult};
use crate::types::{KeyedTable, Table, Value};

/// Row count of a value used as a column, or `None` when the kind cannot
/// frame as one.
fn row_count(value: &Value) -> Option<usize> {
    match value {
        Value::List(list) => Some(list.len()),
        Value::Mixed(items) => Some(items.len()),
        Value::String(text) => Some(text.chars().count()),
        _ => None,
    }
}

fn validate(names: &[String], columns: &[Value]) -> BuilderResult<usize> {
    if names.is_empty() {
        return Err(BuilderError::NoColumns);
    }
    let mut rows = None;
    for (i, (name, column)) in names.iter().zip(columns).enumerate() {
        if names[..i].contains(name) {
            return Err(BuilderError::DuplicateColumn(name.clone()));
        }
        let len = row_count(column).ok_or_else(|| BuilderError::InvalidColumn {
            column: name.clone(),
            kind: column.kind_name(),
        })?;
        match rows {
            None => rows = Some(len),
            Some(expected) if expected != len => {
                return Err(BuilderError::ColumnLengthMismatch {
                    column: name.clone(),
                    expected,
                    actual: len,
                });
            }
            Some(_) => {}
        }
    }
    Ok(rows.unwrap_or(0))
}

/// Builder for a validated column-oriented table.
///
/// # Examples
///
/// ```rust
/// use qwire::builders::TableBuilder;
/// use qwire::types::List;
///
/// let table = TableBuilder::new()
///     .column("sym", List::Symbol(vec!["a".into(), "b".into()]))
///     .column("px", List::Float(vec![1.5, 2.5]))
///     .build()
///     .unwrap();
/// assert_eq!(table.names.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct TableBuilder {
    names: Vec<String>,
    columns: Vec<Value>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column. Any list-like value works: a typed list, a general
    /// list, or a string (a char column).
    pub fn column(mut self, name: impl Into<String>, data: impl Into<Value>) -> Self {
        self.names.push(name.into());
        self.columns.push(data.into());
        self
    }

    /// Validates and builds the table.
    pub fn build(self) -> BuilderResult<Table> {
        validate(&self.names, &self.columns)?;
        Ok(Table::new(self.names, self.columns))
    }
}

/// Builder for a keyed table: key columns and data columns, validated to
/// share one row count.
#[derive(Debug, Default)]
pub struct KeyedTableBuilder {
    keys: TableBuilder,
    values: TableBuilder,
}

impl KeyedTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a key column.
    pub fn key_column(mut self, name: impl Into<String>, data: impl Into<Value>) -> Self {
        self.keys = self.keys.column(name, data);
        self
    }

    /// Appends a data column.
    pub fn column(mut self, name: impl Into<String>, data: impl Into<Value>) -> Self {
        self.values = self.values.column(name, data);
        self
    }

    /// Validates both sides and builds the keyed table.
    pub fn build(self) -> BuilderResult<KeyedTable> {
        let key_rows = validate(&self.keys.names, &self.keys.columns)?;
        let value_rows = validate(&self.values.names, &self.values.columns)?;
        if key_rows != value_rows {
            return Err(BuilderError::KeyRowMismatch {
                keys: key_rows,
                values: value_rows,
            });
        }
        Ok(KeyedTable::new(
            Table::new(self.keys.names, self.keys.columns),
            Table::new(self.values.names, self.values.columns),
        ))
    }
}
