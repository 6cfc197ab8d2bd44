//! Multi-model arena results.

pub mod result_set;
