//! Conversation controller — owns the conversation state and applies
//! every transition of the session/message protocol.
//!
//! Transitions are synchronous and split in two halves around each
//! network call (`begin_*` / `complete_*`), so the async driver never
//! holds the state across an `.await`.
//!
//! ```text
//! Initializing ──ok──▶ Ready ──submit──▶ Sending ──reply/error──▶ Ready
//!      │                 ▲                  │
//!      └──err──▶ Errored ┴──── reset ───────┘
//! ```

use newschat_types::{
    ChatError, Result,
    event::{ChatEvent, Notification},
    message::{Message, MessageId},
    reply::AssistantReply,
    session::Session,
};
use crate::event_bus::EventBus;
use crate::format::format_reply;

pub const PLACEHOLDER_WELCOME: &str =
    "Hello! I'm your news assistant. Ask me anything about recent news!";
pub const INIT_FAILED_BANNER: &str =
    "Failed to connect to the chat service. Please refresh the page to try again.";
pub const CONNECTION_LOST_BANNER: &str = "Connection lost. Trying to reconnect...";
const RESET_FAILED: &str = "Failed to reset chat. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first session
    Initializing,
    Ready,
    /// One message is in flight
    Sending,
    /// The first session could not be started
    Errored,
}

/// Everything the presentation layer renders
#[derive(Debug, Clone)]
pub struct ConversationState {
    messages: Vec<Message>,
    session: Option<Session>,
    phase: Phase,
    resetting: bool,
    connection_error: Option<String>,
}

impl ConversationState {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn awaiting_response(&self) -> bool {
        self.phase == Phase::Sending
    }

    pub fn is_resetting(&self) -> bool {
        self.resetting
    }

    /// Persistent banner text, if any
    pub fn connection_error(&self) -> Option<&str> {
        self.connection_error.as_deref()
    }

    /// Sending or resetting; input is locked
    pub fn is_busy(&self) -> bool {
        self.awaiting_response() || self.resetting
    }

    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::Ready && !self.resetting && self.session.is_some()
    }
}

/// Proof of an outstanding send, handed back on completion
#[derive(Debug)]
pub struct SendTicket {
    epoch: u64,
    session_id: String,
    text: String,
}

impl SendTicket {
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

pub struct ConversationController {
    state: ConversationState,
    draft: String,
    /// Bumped every time the session slot changes
    epoch: u64,
    next_id: u64,
    event_bus: EventBus,
}

impl ConversationController {
    pub fn new(event_bus: EventBus) -> Self {
        let mut controller = Self {
            state: ConversationState {
                messages: Vec::new(),
                session: None,
                phase: Phase::Initializing,
                resetting: false,
                connection_error: None,
            },
            draft: String::new(),
            epoch: 0,
            next_id: 0,
            event_bus,
        };
        let id = controller.next_id();
        controller
            .state
            .messages
            .push(Message::assistant(id, PLACEHOLDER_WELCOME));
        controller
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Pending input buffer
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut String {
        &mut self.draft
    }

    /// State and input buffer borrowed together, for rendering
    pub fn view_mut(&mut self) -> (&ConversationState, &mut String) {
        (&self.state, &mut self.draft)
    }

    fn next_id(&mut self) -> MessageId {
        self.next_id += 1;
        MessageId(self.next_id)
    }

    fn push(&mut self, message: Message) {
        self.state.messages.push(message);
    }

    fn changed(&self) {
        self.event_bus.emit(ChatEvent::StateChanged);
    }

    /// Replace the session and start the history over with `welcome`.
    fn install_session(&mut self, session: Session, welcome: String) {
        self.epoch += 1;
        let id = self.next_id();
        self.state.messages = vec![Message::assistant(id, welcome)];
        self.state.session = Some(session);
        self.state.connection_error = None;
    }

    fn clear_session(&mut self) {
        self.epoch += 1;
        self.state.session = None;
    }

    // ─── Initialization ──────────────────────────────────────

    pub fn complete_initialize(&mut self, result: Result<Session>) {
        if self.state.phase != Phase::Initializing {
            log::warn!("Ignoring session start result outside initialization");
            return;
        }

        match result {
            Ok(session) => {
                log::info!("Chat session started: {}", session.id);
                let welcome = format!("{} (Session: {}...)", PLACEHOLDER_WELCOME, session.short_id());
                self.install_session(session, welcome);
                self.state.phase = Phase::Ready;
            }
            Err(e) => {
                log::error!("Failed to initialize chat session: {}", e);
                self.state.phase = Phase::Errored;
                self.state.connection_error = Some(INIT_FAILED_BANNER.to_string());
                self.event_bus.notify(Notification::error(
                    "Connection Error",
                    "Unable to connect to the chat service",
                ));
            }
        }
        self.changed();
    }

    // ─── Message exchange ────────────────────────────────────

    /// Append the user's message and hand out a ticket for the request.
    ///
    /// Returns `None` without touching state when `text` is blank, a
    /// request or reset is already in flight, or there is no session.
    /// The user message is never rolled back, whatever the outcome.
    pub fn begin_submit(&mut self, text: &str) -> Option<SendTicket> {
        if text.trim().is_empty() || !self.state.accepts_input() {
            return None;
        }
        let session_id = self.state.session.as_ref()?.id.clone();

        let id = self.next_id();
        self.push(Message::user(id, text));
        self.draft.clear();
        self.state.phase = Phase::Sending;
        log::debug!("Sending message in session {}", session_id);
        self.changed();

        Some(SendTicket {
            epoch: self.epoch,
            session_id,
            text: text.to_string(),
        })
    }

    /// Apply the outcome of a send. Returns false if the result belongs to
    /// a session that has since been replaced, in which case nothing changes.
    pub fn complete_submit(
        &mut self,
        ticket: SendTicket,
        result: Result<AssistantReply>,
    ) -> bool {
        if ticket.epoch != self.epoch || self.state.phase != Phase::Sending {
            log::debug!(
                "Discarding late response for session {}",
                ticket.session_id
            );
            return false;
        }

        self.state.phase = Phase::Ready;
        match result {
            Ok(reply) => {
                log::info!("Received answer with {} source(s)", reply.citations.len());
                let id = self.next_id();
                let text = format_reply(&reply);
                self.push(Message::assistant(id, text).with_citations(reply.citations));
                self.state.connection_error = None;
            }
            Err(e) => {
                log::error!("Chat API error: {}", e);
                match &e {
                    ChatError::SessionExpired => self.clear_session(),
                    ChatError::ConnectionLost(_) => {
                        self.state.connection_error = Some(CONNECTION_LOST_BANNER.to_string());
                    }
                    _ => {}
                }
                self.event_bus.notify(Notification::error("Error", e.user_message()));
            }
        }
        self.changed();
        true
    }

    // ─── Reset ───────────────────────────────────────────────

    /// Mark a reset as in flight. Refused while initializing or while
    /// another reset is pending.
    pub fn begin_reset(&mut self) -> bool {
        if self.state.phase == Phase::Initializing || self.state.resetting {
            return false;
        }
        self.state.resetting = true;
        self.changed();
        true
    }

    pub fn complete_reset(&mut self, result: Result<Session>) {
        if !self.state.resetting {
            log::warn!("Ignoring reset result with no reset pending");
            return;
        }
        self.state.resetting = false;

        match result {
            Ok(session) => {
                log::info!("Chat reset, new session: {}", session.id);
                let welcome = format!(
                    "Chat reset. New session started ({}...). How can I help you today?",
                    session.short_id()
                );
                self.install_session(session, welcome);
                self.state.phase = Phase::Ready;
            }
            Err(e) => {
                log::error!("Failed to reset chat: {}", e);
                self.event_bus.notify(Notification::error("Error", RESET_FAILED));
            }
        }
        self.changed();
    }

    // ─── Diagnostics ─────────────────────────────────────────

    pub fn report_health(&self, result: Result<serde_json::Value>) {
        match result {
            Ok(data) => {
                log::info!("Backend health check: {}", data);
                self.event_bus.notify(Notification::success(
                    "Connection Test",
                    format!("Connected to backend: {}", data),
                ));
            }
            Err(e) => {
                log::error!("Connection test failed: {}", e);
                self.event_bus
                    .notify(Notification::error("Connection Test Failed", e.to_string()));
            }
        }
    }
}
