//! Console output formatter for session content

use crate::output::markdown::{Block, sanitize, to_blocks};
use colored::Colorize;
use docqa_application::DispatchOutcome;
use docqa_domain::{
    ArenaResultSet, ComparisonReport, ConversationSession, ConversationTurn, Document, QueryMode,
    Role,
};

/// Formats turns, arena results and session state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render assistant content (markdown) for the terminal
    pub fn content(text: &str) -> String {
        Self::blocks(&to_blocks(text))
    }

    pub fn blocks(blocks: &[Block]) -> String {
        let mut output = String::new();
        let mut previous: Option<&Block> = None;

        for block in blocks {
            if let Some(prev) = previous {
                let both_items = matches!(prev, Block::ListItem { .. })
                    && matches!(block, Block::ListItem { .. });
                output.push('\n');
                if !both_items {
                    output.push('\n');
                }
            }
            output.push_str(&Self::block(block));
            previous = Some(block);
        }

        output
    }

    fn block(block: &Block) -> String {
        match block {
            Block::Heading { level: 1, text } => text.cyan().bold().underline().to_string(),
            Block::Heading { text, .. } => text.cyan().bold().to_string(),
            Block::Paragraph(text) => text.clone(),
            Block::ListItem {
                depth,
                marker,
                text,
            } => format!("{}{} {}", "  ".repeat(*depth), marker.cyan(), text),
            Block::Code { language, text } => {
                let mut out = String::new();
                if let Some(lang) = language {
                    out.push_str(&format!("{}\n", lang.dimmed()));
                }
                out.push_str(&Self::indent(&text.yellow().to_string(), "    "));
                out
            }
            Block::Quote(text) => Self::indent(&text.italic().to_string(), "│ "),
            Block::Rule => "─".repeat(40).dimmed().to_string(),
        }
    }

    /// A single conversation turn with its speaker label
    pub fn turn(turn: &ConversationTurn) -> String {
        let label = match turn.role() {
            Role::User => "You".green().bold(),
            Role::Assistant => "Assistant".cyan().bold(),
            Role::System => "System".dimmed(),
        };
        let body = match turn.role() {
            Role::User => turn.content().to_string(),
            _ => Self::content(turn.content()),
        };
        format!("{}\n{}", label, Self::indent(&body, "  "))
    }

    pub fn history(turns: &[ConversationTurn]) -> String {
        turns
            .iter()
            .map(Self::turn)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Arena answers, one section per model
    pub fn arena(arena: &ArenaResultSet) -> String {
        if arena.is_empty() {
            return "No arena results yet.".dimmed().to_string();
        }

        let mut output = String::new();
        output.push_str(&Self::section_header("Arena Results"));
        for (model, answer) in arena.iter() {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} ──", sanitize(model)).yellow().bold(),
                Self::content(answer)
            ));
        }
        output
    }

    /// Per-document lengths and keywords that the chat summary omits
    pub fn comparison_details(report: &ComparisonReport) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header("Documents"));

        for (i, doc) in report.documents.iter().enumerate() {
            let length = report
                .document_lengths()
                .get(i)
                .map(|l| format!("{} chars", l))
                .unwrap_or_else(|| "length unknown".to_string());
            output.push_str(&format!(
                "  {} {} ({})\n",
                format!("#{}", doc.id).yellow(),
                sanitize(&doc.title),
                length.dimmed()
            ));
            if let Some(keywords) = report.comparison.top_keywords.get(i) {
                if !keywords.is_empty() {
                    output.push_str(&format!(
                        "      {} {}\n",
                        "keywords:".dimmed(),
                        sanitize(&keywords.join(", "))
                    ));
                }
            }
        }

        Self::bullet_section(&mut output, "Similarities:", &report.comparison.similarities);
        Self::bullet_section(&mut output, "Differences:", &report.comparison.differences);
        output
    }

    /// Raw dispatch outcome as pretty JSON
    pub fn format_json(outcome: &DispatchOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Catalog listing with the current selection marked
    pub fn documents(documents: &[Document], session: &ConversationSession) -> String {
        if documents.is_empty() {
            return "No documents available.".dimmed().to_string();
        }

        let selection = session.selection();
        documents
            .iter()
            .map(|doc| {
                let selected = selection.document == Some(doc.id);
                let compared = selection.compare.contains(&doc.id);
                let marker = match (selected, compared) {
                    (true, true) => "*+".green().bold(),
                    (true, false) => "* ".green().bold(),
                    (false, true) => " +".cyan().bold(),
                    (false, false) => "  ".normal(),
                };
                format!(
                    "{} {:>5}  {}",
                    marker,
                    doc.id.to_string().yellow(),
                    sanitize(&doc.filename)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Mode, selection and session sizes
    pub fn status(session: &ConversationSession) -> String {
        let selection = session.selection();
        let document = selection
            .document
            .map(|id| id.to_string())
            .unwrap_or_else(|| "none".to_string());
        let compare = if selection.compare.is_empty() {
            "none".to_string()
        } else {
            selection
                .compare
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let mut output = String::new();
        output.push_str(&format!(
            "{} {} ({})\n",
            "Mode:".cyan().bold(),
            session.mode(),
            session.mode().description()
        ));
        output.push_str(&format!("{} {}\n", "Document:".cyan().bold(), document));
        output.push_str(&format!("{} {}\n", "Compare:".cyan().bold(), compare));
        output.push_str(&format!(
            "{} {}\n",
            "Turns:".cyan().bold(),
            session.turns().len()
        ));
        output.push_str(&format!(
            "{} {}",
            "Arena results:".cyan().bold(),
            session.arena().len()
        ));
        output
    }

    pub fn modes(current: QueryMode) -> String {
        QueryMode::ALL
            .iter()
            .map(|mode| {
                let marker = if *mode == current { "*" } else { " " };
                format!(
                    "  {} {:<15} {}",
                    marker.green(),
                    mode.to_string(),
                    mode.description().dimmed()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn bullet_section(output: &mut String, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        output.push_str(&format!("\n{}\n", title.cyan().bold()));
        for item in items {
            output.push_str(&format!("  * {}\n", sanitize(item)));
        }
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
