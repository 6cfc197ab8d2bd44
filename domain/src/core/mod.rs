//! Core domain concepts shared across all subdomains.
//!
//! - [`document::Document`]: a catalog entry the user can query against
//! - [`question::Question`]: a validated, non-empty question
//! - [`error::ValidationError`]: precondition failures that block a dispatch

pub mod document;
pub mod error;
pub mod question;
