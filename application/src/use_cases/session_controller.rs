//! Session Controller
//!
//! Owns the [`ConversationSession`] and is the only thing that mutates it.
//! Manages mode switches and selections, validates submissions, dispatches
//! queries, and folds results (or failures) back into the session. Every
//! state change is reported to a [`SessionObserver`].
//!
//! # Submission lifecycle
//!
//! ```text
//! begin(question) ──► PendingQuery ──► QueryDispatcher::dispatch ──► complete(pending, result)
//!      │                                                                  │
//!      ├─ Busy / Validation error (nothing recorded)                     ├─ Recorded / ArenaReplaced
//!      └─ user turn appended (chat modes)                                ├─ FailureRecorded / FailureNotified
//!                                                                        └─ Discarded (stale ticket)
//! ```
//!
//! Only one query is in flight at a time. `begin` while busy fails with
//! [`SubmitError::Busy`]. `clear()` and `set_mode()` abandon the in-flight
//! query, and its completion is discarded when it arrives.

use crate::config::SessionParams;
use crate::ports::qa_backend::{BackendError, QaBackend};
use crate::ports::session_observer::{NoSessionObserver, SessionEvent, SessionObserver};
use crate::use_cases::dispatch_query::{DispatchOutcome, QueryDispatcher, QueryRequest};
use docqa_domain::{
    ArenaAnswers, ConversationSession, ConversationTurn, Document, DocumentId, QueryMode,
    PREVIEW_CHARS, Question, ResponseFormatter, ValidationError,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why a submission was not dispatched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("A query is already in progress")]
    Busy,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A dispatched query awaiting its result.
///
/// Hand the request to [`QueryDispatcher::dispatch`] and the result back to
/// [`SessionController::complete`].
#[derive(Debug, Clone)]
pub struct PendingQuery {
    ticket: u64,
    request: QueryRequest,
}

impl PendingQuery {
    pub fn request(&self) -> &QueryRequest {
        &self.request
    }

    pub fn mode(&self) -> QueryMode {
        self.request.mode()
    }
}

/// What a completed query did to the session
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// The formatted result was appended as an assistant turn
    Recorded {
        turn: ConversationTurn,
        outcome: DispatchOutcome,
    },
    /// Arena results were replaced
    ArenaReplaced(ArenaAnswers),
    /// A chat-mode failure was appended as an error turn
    FailureRecorded {
        turn: ConversationTurn,
        error: BackendError,
    },
    /// An arena failure was reported as a notification only
    FailureNotified(BackendError),
    /// The query was abandoned before it completed; the session is untouched
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    ticket: u64,
    mode: QueryMode,
}

pub struct SessionController {
    session: ConversationSession,
    dispatcher: QueryDispatcher,
    params: SessionParams,
    observer: Arc<dyn SessionObserver>,
    in_flight: Option<InFlight>,
    next_ticket: u64,
}

impl SessionController {
    pub fn new(backend: Arc<dyn QaBackend>, params: SessionParams) -> Self {
        Self {
            session: ConversationSession::new(params.initial_mode),
            dispatcher: QueryDispatcher::new(backend),
            params,
            observer: Arc::new(NoSessionObserver),
            in_flight: None,
            next_ticket: 1,
        }
    }

    /// Set the observer that receives session events.
    pub fn with_observer(mut self, observer: Arc<dyn SessionObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    /// A handle for running dispatches outside the controller's borrow
    pub fn dispatcher(&self) -> QueryDispatcher {
        self.dispatcher.clone()
    }

    /// Whether a query is outstanding; the view should hold new submissions
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub async fn documents(&self) -> Result<Vec<Document>, BackendError> {
        self.dispatcher.list_documents().await
    }

    // ==================== Mode & Selection ====================

    /// Switch the active mode. Always discards arena results; keeps turns.
    pub fn set_mode(&mut self, mode: QueryMode) {
        self.abandon_in_flight();
        let from = self.session.set_mode(mode);
        info!("Mode changed: {} -> {}", from, mode);
        self.emit(SessionEvent::ModeChanged { from, to: mode });
        self.emit(SessionEvent::ArenaCleared);
    }

    pub fn select_document(&mut self, id: Option<DocumentId>) {
        self.session.select_document(id);
        self.emit_selection();
    }

    pub fn set_compare_documents(&mut self, ids: impl IntoIterator<Item = DocumentId>) {
        self.session.set_compare_documents(ids);
        self.emit_selection();
    }

    /// Returns `true` if the document is part of the compare set afterwards
    pub fn toggle_compare_document(&mut self, id: DocumentId) -> bool {
        let selected = self.session.toggle_compare_document(id);
        self.emit_selection();
        selected
    }

    /// Reset the conversation to the greeting and discard arena results
    pub fn clear(&mut self) {
        self.abandon_in_flight();
        self.session.clear();
        info!("Conversation cleared");
        self.emit(SessionEvent::HistoryCleared);
        self.emit(SessionEvent::ArenaCleared);
    }

    // ==================== Submission ====================

    /// Submit a question and wait for its result
    pub async fn submit(&mut self, input: &str) -> Result<Completion, SubmitError> {
        let pending = self.begin(input)?;
        let result = self.dispatcher.dispatch(pending.request()).await;
        Ok(self.complete(pending, result))
    }

    /// Validate and register a submission without awaiting the backend.
    ///
    /// On success the user turn is already recorded (chat modes only) and the
    /// returned request carries the context window that includes it.
    pub fn begin(&mut self, input: &str) -> Result<PendingQuery, SubmitError> {
        if let Some(in_flight) = self.in_flight {
            warn!("Rejected submission: {} query still in flight", in_flight.mode);
            self.emit(SessionEvent::Warning {
                message: SubmitError::Busy.to_string(),
            });
            return Err(SubmitError::Busy);
        }

        let mode = self.session.mode();
        let mut request = match Question::parse(input)
            .and_then(|question| QueryRequest::for_mode(mode, self.session.selection(), question))
        {
            Ok(request) => request,
            Err(e) => {
                debug!("Submission blocked: {}", e);
                self.emit(SessionEvent::Warning {
                    message: e.to_string(),
                });
                return Err(e.into());
            }
        };

        if mode.is_chat_bearing() {
            let turn = ConversationTurn::user(request.question().content());
            self.session.append(turn.clone());
            self.emit(SessionEvent::TurnAppended(turn));
            request.attach_history(
                self.session
                    .history()
                    .context_window(self.params.context_window),
            );
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight = Some(InFlight { ticket, mode });

        info!(
            "Submitted {} query #{}: {}",
            mode,
            ticket,
            request.question().preview(PREVIEW_CHARS)
        );
        self.emit(SessionEvent::DispatchStarted { mode });

        Ok(PendingQuery { ticket, request })
    }

    /// Fold a dispatch result back into the session.
    ///
    /// Chat modes record either the formatted answer or an error turn. Arena
    /// replaces its result set on success; on failure it only notifies and
    /// leaves previous results in place.
    pub fn complete(
        &mut self,
        pending: PendingQuery,
        result: Result<DispatchOutcome, BackendError>,
    ) -> Completion {
        let mode = pending.mode();
        match self.in_flight {
            Some(in_flight) if in_flight.ticket == pending.ticket => {}
            _ => {
                debug!("Discarding stale {} completion #{}", mode, pending.ticket);
                self.emit(SessionEvent::StaleCompletionDiscarded { mode });
                return Completion::Discarded;
            }
        }
        self.in_flight = None;
        self.emit(SessionEvent::DispatchFinished {
            mode,
            success: result.is_ok(),
        });

        match result {
            Ok(outcome) => self.record_outcome(outcome),
            Err(error) if mode.is_chat_bearing() => {
                let content = ResponseFormatter::failure(&error.to_string());
                let turn = ConversationTurn::assistant(content);
                self.session.append(turn.clone());
                self.emit(SessionEvent::TurnAppended(turn.clone()));
                Completion::FailureRecorded { turn, error }
            }
            Err(error) => {
                self.emit(SessionEvent::Notification {
                    message: format!("Arena request failed: {}", error),
                });
                Completion::FailureNotified(error)
            }
        }
    }

    fn record_outcome(&mut self, outcome: DispatchOutcome) -> Completion {
        let content = match &outcome {
            DispatchOutcome::Answer(answer) => ResponseFormatter::answer(answer),
            DispatchOutcome::Comparison(report) => ResponseFormatter::comparison(report),
            DispatchOutcome::Arena(answers) => {
                let models = answers.answers.len();
                self.session.replace_arena(answers.clone());
                info!("Arena results replaced ({} models)", models);
                self.emit(SessionEvent::ArenaUpdated { models });
                return Completion::ArenaReplaced(answers.clone());
            }
        };

        let turn = ConversationTurn::assistant(content);
        self.session.append(turn.clone());
        self.emit(SessionEvent::TurnAppended(turn.clone()));
        Completion::Recorded { turn, outcome }
    }

    fn abandon_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            info!(
                "Abandoning in-flight {} query #{}",
                in_flight.mode, in_flight.ticket
            );
        }
    }

    fn emit_selection(&self) {
        self.emit(SessionEvent::SelectionChanged(self.session.selection().clone()));
    }

    fn emit(&self, event: SessionEvent) {
        self.observer.on_event(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{BackendCall, ScriptedBackend};
    use docqa_domain::{
        Comparison, ComparisonReport, DocumentRef, ERROR_MARKER, GREETING, LengthComparison,
        QaAnswer, Role,
    };
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<SessionEvent>>,
    }

    impl RecordingObserver {
        fn events(&self) -> Vec<SessionEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl SessionObserver for RecordingObserver {
        fn on_event(&self, event: &SessionEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    fn controller(backend: ScriptedBackend) -> (SessionController, Arc<ScriptedBackend>) {
        let backend = Arc::new(backend);
        let controller = SessionController::new(backend.clone(), SessionParams::default());
        (controller, backend)
    }

    fn observed(
        backend: ScriptedBackend,
    ) -> (SessionController, Arc<ScriptedBackend>, Arc<RecordingObserver>) {
        let (controller, backend) = controller(backend);
        let observer = Arc::new(RecordingObserver::default());
        (controller.with_observer(observer.clone()), backend, observer)
    }

    fn comparison_report() -> ComparisonReport {
        ComparisonReport {
            documents: vec![
                DocumentRef {
                    id: DocumentId::new(1),
                    title: "d1".to_string(),
                },
                DocumentRef {
                    id: DocumentId::new(2),
                    title: "d2".to_string(),
                },
            ],
            comparison: Comparison {
                length_comparison: LengthComparison {
                    document_lengths: vec![200, 300],
                    total_length: 500,
                },
                ..Default::default()
            },
            ai_analysis: "X".to_string(),
        }
    }

    fn arena_answers(pairs: &[(&str, &str)]) -> ArenaAnswers {
        ArenaAnswers::new(pairs.iter().map(|(m, a)| (m.to_string(), a.to_string())))
    }

    #[tokio::test]
    async fn single_answer_is_appended_verbatim() {
        let (mut controller, _) =
            controller(ScriptedBackend::new().with_answer(Ok(QaAnswer::new("Q", "A"))));
        controller.select_document(Some(DocumentId::new(1)));

        let completion = controller.submit("Q").await.unwrap();

        let turns = controller.session().turns();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[1], ConversationTurn::user("Q"));
        assert_eq!(turns[2], ConversationTurn::assistant("A"));
        assert!(matches!(completion, Completion::Recorded { .. }));
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn context_window_ends_with_new_question() {
        let (mut controller, backend) =
            controller(ScriptedBackend::new().with_answer(Ok(QaAnswer::new("Q", "A"))));

        controller.set_mode(QueryMode::KnowledgeBase);
        for i in 0..4 {
            controller.submit(&format!("question {}", i)).await.unwrap();
        }

        let calls = backend.calls();
        let BackendCall::KnowledgeBase { history, question } = calls.last().unwrap() else {
            panic!("expected knowledge-base call");
        };
        assert_eq!(question, "question 3");
        assert_eq!(history.len(), 6);
        assert_eq!(history.last().unwrap().role, Role::User);
        assert_eq!(history.last().unwrap().content, "question 3");
        assert!(history.iter().all(|m| m.content != GREETING));
    }

    #[tokio::test]
    async fn first_question_context_includes_greeting() {
        let (mut controller, backend) =
            controller(ScriptedBackend::new().with_answer(Ok(QaAnswer::new("Q", "A"))));
        controller.select_document(Some(DocumentId::new(2)));

        controller.submit("Q").await.unwrap();

        let calls = backend.calls();
        let BackendCall::Single { history, .. } = &calls[0] else {
            panic!("expected single-document call");
        };
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].content, GREETING);
        assert_eq!(history[1].content, "Q");
    }

    #[tokio::test]
    async fn comparison_is_formatted_into_turn() {
        let (mut controller, backend) =
            controller(ScriptedBackend::new().with_comparison(Ok(comparison_report())));
        controller.set_mode(QueryMode::Compare);
        controller.set_compare_documents([DocumentId::new(1), DocumentId::new(2)]);

        controller.submit("How do they differ?").await.unwrap();

        let content = controller.session().turns().last().unwrap().content().to_string();
        let x = content.find('X').unwrap();
        let count = content.find("document count: 2").unwrap();
        let total = content.find("total length: 500").unwrap();
        assert!(x < count && count < total);
        assert_eq!(
            backend.calls(),
            vec![BackendCall::Compare {
                documents: vec![DocumentId::new(1), DocumentId::new(2)],
                question: "How do they differ?".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn arena_replaces_results_without_touching_history() {
        let (mut controller, _) = controller(
            ScriptedBackend::new().with_arena(Ok(arena_answers(&[
                ("model-a", "foo"),
                ("model-b", "bar"),
            ]))),
        );
        controller.set_mode(QueryMode::Arena);
        controller.select_document(Some(DocumentId::new(1)));

        let completion = controller.submit("Which is best?").await.unwrap();

        let arena = controller.session().arena();
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get("model-a"), Some("foo"));
        assert_eq!(arena.get("model-b"), Some("bar"));
        assert_eq!(controller.session().turns().len(), 1);
        assert!(matches!(completion, Completion::ArenaReplaced(_)));
    }

    #[tokio::test]
    async fn arena_result_replaces_previous_mapping() {
        let (mut controller, _) =
            controller(ScriptedBackend::new().with_arena(Ok(arena_answers(&[("model-a", "foo")]))));
        controller.set_mode(QueryMode::Arena);
        controller.select_document(Some(DocumentId::new(1)));

        let pending = controller.begin("first").unwrap();
        controller.complete(
            pending,
            Ok(DispatchOutcome::Arena(arena_answers(&[("model-z", "stale")]))),
        );
        controller.submit("second").await.unwrap();

        let arena = controller.session().arena();
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get("model-z"), None);
    }

    #[tokio::test]
    async fn chat_failure_records_one_error_turn() {
        for mode in [QueryMode::Single, QueryMode::KnowledgeBase, QueryMode::Compare] {
            let failure = BackendError::Transport("connection refused".to_string());
            let (mut controller, _) = controller(
                ScriptedBackend::new()
                    .with_answer(Err(failure.clone()))
                    .with_comparison(Err(failure.clone())),
            );
            controller.set_mode(mode);
            controller.select_document(Some(DocumentId::new(1)));
            controller.set_compare_documents([DocumentId::new(1), DocumentId::new(2)]);

            let completion = controller.submit("Q").await.unwrap();

            let turns = controller.session().turns();
            assert_eq!(turns.len(), 3, "{}", mode);
            let last = turns.last().unwrap();
            assert_eq!(last.role(), Role::Assistant);
            assert!(last.content().starts_with(ERROR_MARKER));
            assert!(last.content().contains("connection refused"));
            assert!(matches!(completion, Completion::FailureRecorded { .. }));
        }
    }

    #[tokio::test]
    async fn arena_failure_only_notifies() {
        let (mut controller, _, observer) = observed(
            ScriptedBackend::new().with_arena(Err(BackendError::Status {
                status: 502,
                message: "upstream down".to_string(),
            })),
        );
        controller.set_mode(QueryMode::Arena);
        controller.select_document(Some(DocumentId::new(1)));
        let pending = controller.begin("first").unwrap();
        controller.complete(
            pending,
            Ok(DispatchOutcome::Arena(arena_answers(&[("model-a", "kept")]))),
        );
        let before = controller.session().arena().clone();

        let completion = controller.submit("second").await.unwrap();

        assert!(matches!(completion, Completion::FailureNotified(_)));
        assert_eq!(controller.session().arena(), &before);
        assert_eq!(controller.session().turns().len(), 1);
        assert!(observer.events().iter().any(|e| matches!(
            e,
            SessionEvent::Notification { message } if message.contains("upstream down")
        )));
    }

    #[tokio::test]
    async fn validation_failure_touches_nothing() {
        let (mut controller, backend, observer) = observed(ScriptedBackend::new());

        let err = controller.submit("Q").await.unwrap_err();
        assert_eq!(err, SubmitError::Validation(ValidationError::MissingDocument));

        controller.set_mode(QueryMode::Compare);
        controller.set_compare_documents([DocumentId::new(1)]);
        let err = controller.submit("Q").await.unwrap_err();
        assert_eq!(
            err,
            SubmitError::Validation(ValidationError::InsufficientDocuments { selected: 1 })
        );

        assert_eq!(controller.session().turns().len(), 1);
        assert!(backend.calls().is_empty());
        assert!(!controller.is_busy());
        let warnings = observer
            .events()
            .into_iter()
            .filter(|e| matches!(e, SessionEvent::Warning { .. }))
            .count();
        assert_eq!(warnings, 2);
    }

    #[tokio::test]
    async fn empty_question_is_rejected() {
        let (mut controller, backend) = controller(ScriptedBackend::new());
        controller.set_mode(QueryMode::KnowledgeBase);

        let err = controller.submit("   ").await.unwrap_err();

        assert_eq!(err, SubmitError::Validation(ValidationError::EmptyQuestion));
        assert!(backend.calls().is_empty());
        assert_eq!(controller.session().turns().len(), 1);
    }

    #[test]
    fn second_submission_while_busy_is_rejected() {
        let (mut controller, _) = controller(ScriptedBackend::new());
        controller.set_mode(QueryMode::KnowledgeBase);

        let _pending = controller.begin("first").unwrap();
        assert!(controller.is_busy());

        assert_eq!(controller.begin("second").unwrap_err(), SubmitError::Busy);
        assert_eq!(controller.session().turns().len(), 2);
    }

    #[test]
    fn completion_after_clear_is_discarded() {
        let (mut controller, _, observer) = observed(ScriptedBackend::new());
        controller.set_mode(QueryMode::KnowledgeBase);

        let pending = controller.begin("Q").unwrap();
        controller.clear();
        assert!(!controller.is_busy());

        let completion =
            controller.complete(pending, Ok(DispatchOutcome::Answer(QaAnswer::new("Q", "late"))));

        assert_eq!(completion, Completion::Discarded);
        assert_eq!(controller.session().turns().len(), 1);
        assert_eq!(controller.session().turns()[0].content(), GREETING);
        assert!(observer.events().contains(&SessionEvent::StaleCompletionDiscarded {
            mode: QueryMode::KnowledgeBase
        }));
    }

    #[test]
    fn completion_after_mode_switch_is_discarded() {
        let (mut controller, _) = controller(ScriptedBackend::new());
        controller.set_mode(QueryMode::Arena);
        controller.select_document(Some(DocumentId::new(1)));

        let pending = controller.begin("Q").unwrap();
        controller.set_mode(QueryMode::Arena);
        let completion = controller.complete(
            pending,
            Ok(DispatchOutcome::Arena(arena_answers(&[("model-a", "late")]))),
        );

        assert_eq!(completion, Completion::Discarded);
        assert!(controller.session().arena().is_empty());
    }

    #[test]
    fn new_submission_allowed_after_abandon() {
        let (mut controller, _) = controller(ScriptedBackend::new());
        controller.set_mode(QueryMode::KnowledgeBase);

        let stale = controller.begin("first").unwrap();
        controller.clear();
        let current = controller.begin("second").unwrap();

        let late = Err(BackendError::Transport("timed out".to_string()));
        assert_eq!(controller.complete(stale, late), Completion::Discarded);
        assert!(controller.is_busy());
        let completion =
            controller.complete(current, Ok(DispatchOutcome::Answer(QaAnswer::new("second", "A"))));
        assert!(matches!(completion, Completion::Recorded { .. }));
    }

    #[tokio::test]
    async fn set_mode_clears_arena_and_keeps_turns() {
        let (mut controller, _, observer) = observed(
            ScriptedBackend::new()
                .with_answer(Ok(QaAnswer::new("Q", "A")))
                .with_arena(Ok(arena_answers(&[("model-a", "foo")]))),
        );
        controller.select_document(Some(DocumentId::new(1)));
        controller.submit("Q").await.unwrap();
        controller.set_mode(QueryMode::Arena);
        controller.submit("Q").await.unwrap();
        assert!(!controller.session().arena().is_empty());

        controller.set_mode(QueryMode::Single);

        assert!(controller.session().arena().is_empty());
        assert_eq!(controller.session().turns().len(), 3);
        let events = observer.events();
        let tail = &events[events.len() - 2..];
        assert_eq!(
            tail,
            &[
                SessionEvent::ModeChanged {
                    from: QueryMode::Arena,
                    to: QueryMode::Single
                },
                SessionEvent::ArenaCleared,
            ]
        );
    }

    #[tokio::test]
    async fn clear_resets_to_greeting_and_empties_arena() {
        let (mut controller, _) = controller(
            ScriptedBackend::new()
                .with_answer(Ok(QaAnswer::new("Q", "A")))
                .with_arena(Ok(arena_answers(&[("model-a", "foo")]))),
        );
        controller.select_document(Some(DocumentId::new(1)));
        controller.submit("Q").await.unwrap();
        controller.set_mode(QueryMode::Arena);
        controller.submit("Q").await.unwrap();

        controller.clear();

        let turns = controller.session().turns();
        assert_eq!(turns, &[ConversationTurn::assistant(GREETING)]);
        assert!(controller.session().arena().is_empty());
    }

    #[tokio::test]
    async fn events_follow_dispatch_lifecycle() {
        let (mut controller, _, observer) =
            observed(ScriptedBackend::new().with_answer(Ok(QaAnswer::new("Q", "A"))));
        controller.set_mode(QueryMode::KnowledgeBase);

        controller.submit("Q").await.unwrap();

        let events = observer.events();
        let lifecycle: Vec<_> = events
            .iter()
            .filter(|e| {
                !matches!(
                    e,
                    SessionEvent::ModeChanged { .. } | SessionEvent::ArenaCleared
                )
            })
            .cloned()
            .collect();
        assert_eq!(
            lifecycle,
            vec![
                SessionEvent::TurnAppended(ConversationTurn::user("Q")),
                SessionEvent::DispatchStarted {
                    mode: QueryMode::KnowledgeBase
                },
                SessionEvent::DispatchFinished {
                    mode: QueryMode::KnowledgeBase,
                    success: true
                },
                SessionEvent::TurnAppended(ConversationTurn::assistant("A")),
            ]
        );
    }

    #[tokio::test]
    async fn external_dispatch_round_trip() {
        let (mut controller, _) =
            controller(ScriptedBackend::new().with_answer(Ok(QaAnswer::new("Q", "A"))));
        controller.set_mode(QueryMode::KnowledgeBase);

        let pending = controller.begin("Q").unwrap();
        let dispatcher = controller.dispatcher();
        let result = tokio::spawn(async move {
            let result = dispatcher.dispatch(pending.request()).await;
            (pending, result)
        });
        let (pending, result) = result.await.unwrap();

        let completion = controller.complete(pending, result);

        assert!(matches!(completion, Completion::Recorded { .. }));
        assert_eq!(controller.session().turns().len(), 3);
    }

    #[tokio::test]
    async fn documents_pass_through_to_backend() {
        let (controller, backend) = controller(
            ScriptedBackend::new().with_documents(vec![Document::new(1_i64, "a.pdf")]),
        );

        let documents = controller.documents().await.unwrap();

        assert_eq!(documents, vec![Document::new(1_i64, "a.pdf")]);
        assert_eq!(backend.calls(), vec![BackendCall::ListDocuments]);
    }
}
