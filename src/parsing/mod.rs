//! Input parsing: raw table loading and column resolution.

pub mod columns;
pub mod csv_parser;

pub use columns::ColumnMap;
