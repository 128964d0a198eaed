//! Data preparation pipeline: per-cell normalization, derived-field
//! enrichment, and the immutable session dataset.

pub mod enricher;
pub mod normalizer;
pub mod pipeline;

pub use pipeline::Dataset;
