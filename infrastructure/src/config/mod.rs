//! Configuration file loading for docqa
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./docqa.toml` or `./.docqa.toml`
//! 3. Global config: `$XDG_CONFIG_HOME/docqa/config.toml`
//! 4. `DOCQA_*` environment variables
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BASE_URL, DEFAULT_DOCUMENT_LIMIT, FileBackendConfig,
    FileConfig, FileOutputConfig, FileOutputFormat, FileReplConfig, FileSessionConfig,
};
pub use loader::ConfigLoader;
