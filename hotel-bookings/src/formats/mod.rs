//! Dataset file readers
//!
//! This module contains the CSV loader for the hotel-bookings export and
//! the column name normalization it applies to headers.

pub mod columns;
pub mod csv;

// Re-export loader types
pub use self::columns::{normalize_column_name, normalize_headers, ColumnNormalizer};
pub use self::csv::{is_null, CsvLoader, REQUIRED_COLUMNS};
