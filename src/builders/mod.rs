//! Builder pattern API for constructing tables from scratch.
//!
//! The encoder itself is permissive: it frames whatever columns it is handed
//! and never checks cardinality. These builders add the validation a caller
//! usually wants (equal column lengths, no duplicate names, column kinds
//! that actually frame as columns) before a [`crate::types::Table`] ever
//! reaches the wire.

/// Error types for the builder API.
pub mod error;
/// Builders for tables and keyed tables.
pub mod table;

#[cfg(test)]
mod tests;

// Re-export builders at module level
pub use error::{BuilderError, BuilderResult};
pub use table::{KeyedTableBuilder, TableBuilder};
