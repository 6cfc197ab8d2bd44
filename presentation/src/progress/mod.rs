//! Progress and event display

pub mod reporter;
