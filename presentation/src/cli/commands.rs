//! CLI command definitions

use clap::Parser;
use docqa_domain::{DocumentId, OutputFormat, QueryMode};
use std::path::PathBuf;

/// CLI arguments for docqa
#[derive(Parser, Debug)]
#[command(name = "docqa")]
#[command(author, version, about = "Ask questions about your documents")]
#[command(long_about = r#"
docqa asks an AI backend questions about a document corpus.

Query modes:
  single           Ask about one selected document (--document)
  knowledge-base   Ask across every document
  compare          Compare two or more documents (--compare)
  arena            Ask several models about one document (--document)

Configuration files are loaded from (in priority order):
1. --config <path>                 Explicit config file
2. ./docqa.toml                    Project-level config
3. ~/.config/docqa/config.toml     Global config
4. DOCQA_* environment variables   e.g. DOCQA_BACKEND__BASE_URL

Example:
  docqa --list-documents
  docqa --document 3 "What is the main conclusion?"
  docqa --mode kb "Which reports mention revenue?"
  docqa --mode compare --compare 1 --compare 2 "How do these differ?"
  docqa --chat
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Query mode: single, knowledge-base (kb), compare, arena
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<QueryMode>,

    /// Document for single-document and arena questions
    #[arg(short, long, value_name = "ID")]
    pub document: Option<DocumentId>,

    /// Documents to compare (can be specified multiple times)
    #[arg(long, value_name = "ID")]
    pub compare: Vec<DocumentId>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// List available documents and exit
    #[arg(short, long)]
    pub list_documents: bool,

    /// Output format: text, full, json
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Backend base URL (overrides configuration)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_one_shot_arguments() {
        let cli = Cli::parse_from([
            "docqa",
            "--mode",
            "kb",
            "-o",
            "json",
            "-vv",
            "Which reports mention revenue?",
        ]);
        assert_eq!(cli.mode, Some(QueryMode::KnowledgeBase));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.question.as_deref(),
            Some("Which reports mention revenue?")
        );
    }

    #[test]
    fn test_compare_ids_leave_question_positional() {
        let cli = Cli::try_parse_from([
            "docqa",
            "--mode",
            "compare",
            "--compare",
            "1",
            "--compare",
            "2",
            "How do these differ?",
        ])
        .unwrap();
        assert_eq!(cli.mode, Some(QueryMode::Compare));
        assert_eq!(cli.compare, vec![DocumentId::new(1), DocumentId::new(2)]);
        assert_eq!(cli.question.as_deref(), Some("How do these differ?"));
    }

    #[test]
    fn test_compare_takes_one_id_per_flag() {
        let cli = Cli::try_parse_from(["docqa", "--compare", "1", "2"]).unwrap();
        assert_eq!(cli.compare, vec![DocumentId::new(1)]);
        assert_eq!(cli.question.as_deref(), Some("2"));
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        assert!(Cli::try_parse_from(["docqa", "--mode", "debate"]).is_err());
    }
}
