//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters and the view layer
//! implement.

pub mod qa_backend;
pub mod session_observer;
