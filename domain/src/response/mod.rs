//! Turning backend results into conversation content.

pub mod formatter;
