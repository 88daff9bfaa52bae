//! Port traits — the hexagonal architecture boundary.
//!
//! Defined here in `newschat-core` (pure Rust); the browser adapter lives
//! in `newschat-platform`. The core never imports platform code.

use async_trait::async_trait;
use newschat_types::{reply::AssistantReply, session::Session, Result};

/// The news assistant backend, as seen by the conversation controller.
///
/// Implementations perform no retries; every call maps to exactly one
/// request.
#[async_trait(?Send)]
pub trait ChatApiPort {
    /// Create a new server-side session.
    ///
    /// Every failure is a `ChatError::Connection`.
    async fn start_session(&self) -> Result<Session>;

    /// Submit one user message within `session_id`.
    async fn send_message(&self, session_id: &str, text: &str) -> Result<AssistantReply>;

    /// Reachability probe. Not part of the conversation protocol.
    async fn health(&self) -> Result<serde_json::Value>;
}
