//! REPL (Read-Eval-Print Loop) for interactive chat

use super::command::{HELP, ReplCommand};
use crate::ConsoleFormatter;
use crate::ReplConfig;
use colored::Colorize;
use docqa_application::{Completion, SessionController};
use docqa_domain::Document;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Interactive chat REPL
pub struct ChatRepl {
    controller: SessionController,
    config: ReplConfig,
    documents: Vec<Document>,
}

impl ChatRepl {
    /// Create a new ChatRepl around a configured session controller
    pub fn new(controller: SessionController) -> Self {
        Self {
            controller,
            config: ReplConfig::default(),
            documents: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();
        self.refresh_documents().await;

        loop {
            let prompt = format!("[{}] >>> ", self.controller.session().mode());
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    self.process_question(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = self.config.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            docqa - Document Q&A             │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        for turn in self.controller.session().turns() {
            println!("{}", ConsoleFormatter::turn(turn));
        }
        println!();
        println!("{}", ConsoleFormatter::status(self.controller.session()));
        println!();
        println!("Type /help for commands.");
        println!();
    }

    async fn refresh_documents(&mut self) {
        match self.controller.documents().await {
            Ok(documents) => {
                self.documents = documents;
                println!(
                    "{}",
                    ConsoleFormatter::documents(&self.documents, self.controller.session())
                );
                println!();
            }
            Err(e) => {
                eprintln!("{} Could not load documents: {}", "warning:".yellow().bold(), e);
            }
        }
    }

    fn warn_if_unknown(&self, document: &docqa_domain::DocumentId) {
        if !self.documents.is_empty() && !self.documents.iter().any(|d| d.id == *document) {
            eprintln!(
                "{} Document {} is not in the catalog (try /docs)",
                "warning:".yellow().bold(),
                document
            );
        }
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, line: &str) -> bool {
        let command = match ReplCommand::parse(line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                return false;
            }
        };

        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => {
                println!();
                println!("{}", HELP);
                println!();
            }
            ReplCommand::ShowModes => {
                println!();
                println!("{}", ConsoleFormatter::modes(self.controller.session().mode()));
                println!();
            }
            ReplCommand::SetMode(mode) => self.controller.set_mode(mode),
            ReplCommand::SelectDocument(document) => {
                if let Some(id) = &document {
                    self.warn_if_unknown(id);
                }
                self.controller.select_document(document);
            }
            ReplCommand::SetCompare(ids) => {
                for id in &ids {
                    self.warn_if_unknown(id);
                }
                self.controller.set_compare_documents(ids);
            }
            ReplCommand::ToggleCompare(id) => {
                self.warn_if_unknown(&id);
                self.controller.toggle_compare_document(id);
            }
            ReplCommand::Documents => self.refresh_documents().await,
            ReplCommand::Status => {
                println!();
                println!("{}", ConsoleFormatter::status(self.controller.session()));
                println!();
            }
            ReplCommand::History => {
                println!();
                println!("{}", ConsoleFormatter::history(self.controller.session().turns()));
                println!();
            }
            ReplCommand::Arena => {
                println!("{}", ConsoleFormatter::arena(self.controller.session().arena()));
            }
            ReplCommand::Clear => self.controller.clear(),
        }
        false
    }

    async fn process_question(&mut self, question: &str) {
        println!();

        // Warnings and arena failures are printed by the session observer
        match self.controller.submit(question).await {
            Ok(Completion::Recorded { turn, .. })
            | Ok(Completion::FailureRecorded { turn, .. }) => {
                println!("{}", ConsoleFormatter::turn(&turn));
            }
            Ok(Completion::ArenaReplaced(_)) => {
                println!("{}", ConsoleFormatter::arena(self.controller.session().arena()));
            }
            Ok(Completion::FailureNotified(_)) | Ok(Completion::Discarded) | Err(_) => {}
        }
        println!();
    }
}
