//! Application layer for docqa
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionParams;
pub use ports::{
    qa_backend::{BackendError, QaBackend},
    session_observer::{NoSessionObserver, SessionEvent, SessionObserver},
};
pub use use_cases::dispatch_query::{DispatchOutcome, QueryDispatcher, QueryRequest};
pub use use_cases::session_controller::{
    Completion, PendingQuery, SessionController, SubmitError,
};
