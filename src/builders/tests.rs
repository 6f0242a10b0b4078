//! Tests for the builder pattern API.

use super::*;
use crate::types::{List, Value};

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn test_table_builder_basic() {
        let table = TableBuilder::new()
            .column("sym", List::Symbol(vec!["a".into(), "b".into()]))
            .column("px", List::Float(vec![1.5, 2.5]))
            .build()
            .unwrap();

        assert_eq!(table.names, vec!["sym", "px"]);
        assert_eq!(table.columns.len(), 2);
        assert_eq!(
            table.columns[0],
            Value::List(List::Symbol(vec!["a".into(), "b".into()]))
        );
    }

    #[test]
    fn test_table_builder_accepts_string_and_mixed_columns() {
        let table = TableBuilder::new()
            .column("flag", Value::string("ab"))
            .column("extra", Value::Mixed(vec![Value::Long(1), Value::symbol("x")]))
            .build()
            .unwrap();

        assert_eq!(table.columns.len(), 2);
    }

    #[test]
    fn test_table_builder_rejects_length_mismatch() {
        let result = TableBuilder::new()
            .column("a", List::Long(vec![1, 2, 3]))
            .column("b", List::Long(vec![1]))
            .build();

        match result.unwrap_err() {
            BuilderError::ColumnLengthMismatch {
                column,
                expected,
                actual,
            } => {
                assert_eq!(column, "b");
                assert_eq!(expected, 3);
                assert_eq!(actual, 1);
            }
            other => panic!("expected ColumnLengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_table_builder_rejects_duplicate_names() {
        let result = TableBuilder::new()
            .column("a", List::Long(vec![1]))
            .column("a", List::Long(vec![2]))
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuilderError::DuplicateColumn("a".to_string())
        );
    }

    #[test]
    fn test_table_builder_rejects_atom_column() {
        let result = TableBuilder::new().column("a", Value::Long(1)).build();

        match result.unwrap_err() {
            BuilderError::InvalidColumn { column, kind } => {
                assert_eq!(column, "a");
                assert_eq!(kind, "long");
            }
            other => panic!("expected InvalidColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_table_builder_rejects_empty_table() {
        assert_eq!(TableBuilder::new().build().unwrap_err(), BuilderError::NoColumns);
    }

    #[test]
    fn test_empty_columns_are_valid() {
        let table = TableBuilder::new()
            .column("a", List::Timestamp(vec![]))
            .column("b", List::Long(vec![]))
            .build()
            .unwrap();
        assert_eq!(table.columns.len(), 2);
    }

    #[test]
    fn test_keyed_table_builder() {
        let keyed = KeyedTableBuilder::new()
            .key_column("id", List::Long(vec![1, 2]))
            .column("name", List::Symbol(vec!["a".into(), "b".into()]))
            .build()
            .unwrap();

        assert_eq!(keyed.keys.names, vec!["id"]);
        assert_eq!(keyed.values.names, vec!["name"]);
    }

    #[test]
    fn test_keyed_table_builder_rejects_row_mismatch() {
        let result = KeyedTableBuilder::new()
            .key_column("id", List::Long(vec![1, 2]))
            .column("name", List::Symbol(vec!["a".into()]))
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuilderError::KeyRowMismatch { keys: 2, values: 1 }
        );
    }
}
