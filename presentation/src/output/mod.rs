//! Output formatting for the terminal

pub mod console;
pub mod markdown;
