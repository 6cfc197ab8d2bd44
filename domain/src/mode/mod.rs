//! Query modes and their document selections.
//!
//! - [`query_mode::QueryMode`]: the four ways a question can be posed
//! - [`controller::ModeController`]: the active mode, its selections, and precondition checks

pub mod controller;
pub mod query_mode;
