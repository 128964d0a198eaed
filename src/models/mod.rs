//! Domain models: canonical fields and the per-order delivery record.

pub mod field;
pub mod record;

pub use field::{CategoricalField, Field};
pub use record::DeliveryRecord;
