//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod dispatch_query;
pub mod session_controller;

#[cfg(test)]
pub(crate) mod test_support;
