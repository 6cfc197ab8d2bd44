//! Console presentation of session events
//!
//! Shows a spinner while a backend call is outstanding and prints transient
//! warnings and notifications that are not part of the conversation.

use crate::output::markdown::sanitize;
use colored::Colorize;
use docqa_application::{SessionEvent, SessionObserver};
use docqa_domain::QueryMode;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Renders [`SessionEvent`]s to the terminal
pub struct ProgressReporter {
    show_progress: bool,
    show_session_notices: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            show_progress: true,
            show_session_notices: false,
            spinner: Mutex::new(None),
        }
    }

    /// Set whether to show the dispatch spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Also print mode, selection and reset notices (interactive use)
    pub fn with_session_notices(mut self, show: bool) -> Self {
        self.show_session_notices = show;
        self
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn waiting_message(mode: QueryMode) -> &'static str {
        match mode {
            QueryMode::Single => "Reading the document...",
            QueryMode::KnowledgeBase => "Searching the knowledge base...",
            QueryMode::Compare => "Comparing documents...",
            QueryMode::Arena => "Asking the arena models...",
        }
    }

    fn start_spinner(&self, mode: QueryMode) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(Self::waiting_message(mode));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(previous) = slot.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn stop_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(pb) = slot.take() {
                pb.finish_and_clear();
            }
        }
    }

    fn notice(&self, message: String) {
        if self.show_session_notices {
            println!("{} {}", "->".cyan(), message);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionObserver for ProgressReporter {
    fn on_event(&self, event: &SessionEvent) {
        match event {
            SessionEvent::DispatchStarted { mode } => {
                if self.show_progress {
                    self.start_spinner(*mode);
                }
            }
            SessionEvent::DispatchFinished { .. } => self.stop_spinner(),
            SessionEvent::Warning { message } => {
                eprintln!("{} {}", "warning:".yellow().bold(), sanitize(message));
            }
            SessionEvent::Notification { message } => {
                eprintln!("{} {}", "x".red(), sanitize(message));
            }
            SessionEvent::ModeChanged { to, .. } => {
                self.notice(format!("Mode: {} ({})", to.to_string().bold(), to.description()));
            }
            SessionEvent::SelectionChanged(selection) => {
                let document = selection
                    .document
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "none".to_string());
                self.notice(format!(
                    "Document: {}, compare set: {} selected",
                    document,
                    selection.compare.len()
                ));
            }
            SessionEvent::HistoryCleared => self.notice("Conversation cleared".to_string()),
            SessionEvent::StaleCompletionDiscarded { .. } => self.stop_spinner(),
            SessionEvent::TurnAppended(_)
            | SessionEvent::ArenaUpdated { .. }
            | SessionEvent::ArenaCleared => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_event(&SessionEvent::DispatchStarted {
            mode: QueryMode::Compare,
        });
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_event(&SessionEvent::DispatchFinished {
            mode: QueryMode::Compare,
            success: true,
        });
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_no_spinner_when_progress_disabled() {
        let reporter = ProgressReporter::new().with_progress(false);
        reporter.on_event(&SessionEvent::DispatchStarted {
            mode: QueryMode::Single,
        });
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
