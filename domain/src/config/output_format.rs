//! Output format value object

use serde::{Deserialize, Serialize};

/// How one-shot results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The assistant turn (or arena answers) as rendered text (default)
    #[default]
    Text,
    /// Text plus the structured details behind it (document lengths, keywords)
    Full,
    /// Raw dispatch outcome as JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "full" => Ok(OutputFormat::Full),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid OutputFormat: {}", s)),
        }
    }
}
