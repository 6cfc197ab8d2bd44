//! Application-level configuration.
//!
//! - [`SessionParams`]: how the session controller builds requests

pub mod session_params;

pub use session_params::SessionParams;
