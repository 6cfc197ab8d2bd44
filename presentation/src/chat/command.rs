//! Slash-command parsing for the chat REPL

use docqa_domain::{DocumentId, QueryMode};

/// A parsed `/command` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    ShowModes,
    SetMode(QueryMode),
    SelectDocument(Option<DocumentId>),
    SetCompare(Vec<DocumentId>),
    ToggleCompare(DocumentId),
    Documents,
    Status,
    History,
    Arena,
    Clear,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  /mode [MODE]          Show modes, or switch (single, kb, compare, arena)
  /doc <ID|none>        Select the document for single and arena questions
  /compare <ID> <ID>... Set the documents to compare (none clears)
  /toggle <ID>          Add or remove one document from the compare set
  /docs                 Refresh and list documents
  /status               Show mode and selection
  /history              Show the conversation
  /arena                Show the latest arena results
  /clear                Reset the conversation
  /help, /h, /?         Show this help
  /quit, /exit, /q      Exit chat";

impl ReplCommand {
    /// Parse a line starting with `/`
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match (name, args.as_slice()) {
            ("/quit" | "/exit" | "/q", _) => Ok(ReplCommand::Quit),
            ("/help" | "/h" | "/?", _) => Ok(ReplCommand::Help),
            ("/mode", []) => Ok(ReplCommand::ShowModes),
            ("/mode", [mode]) => mode.parse().map(ReplCommand::SetMode),
            ("/doc", ["none"]) => Ok(ReplCommand::SelectDocument(None)),
            ("/doc", [id]) => parse_id(id).map(|id| ReplCommand::SelectDocument(Some(id))),
            ("/compare", ["none"]) => Ok(ReplCommand::SetCompare(Vec::new())),
            ("/compare", ids) if !ids.is_empty() => ids
                .iter()
                .map(|id| parse_id(id))
                .collect::<Result<Vec<_>, _>>()
                .map(ReplCommand::SetCompare),
            ("/toggle", [id]) => parse_id(id).map(ReplCommand::ToggleCompare),
            ("/docs", []) => Ok(ReplCommand::Documents),
            ("/status", []) => Ok(ReplCommand::Status),
            ("/history", []) => Ok(ReplCommand::History),
            ("/arena", []) => Ok(ReplCommand::Arena),
            ("/clear", []) => Ok(ReplCommand::Clear),
            ("/mode" | "/doc" | "/compare" | "/toggle", _) => {
                Err(format!("Invalid arguments for {}. Type /help for usage", name))
            }
            _ => Err(format!(
                "Unknown command: {}. Type /help for available commands",
                name
            )),
        }
    }
}

fn parse_id(raw: &str) -> Result<DocumentId, String> {
    raw.trim_start_matches('#')
        .parse()
        .map_err(|_| format!("Invalid document id: {}", raw))
}
