//! Dataset transformations. Filtering only: the table itself is never
//! mutated, every filter produces a fresh borrowed view.

pub mod filtering;

pub use filtering::FilterSelection;
