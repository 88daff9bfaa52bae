use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reply::SourceCitation;

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Assistant,
}

/// Locally generated message id. Monotonic within one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

/// A single entry in the conversation
#[derive(Debug, Clone)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    pub origin: Origin,
    pub created_at: DateTime<Utc>,
    /// Sources the assistant text was rendered from; always empty for user messages
    pub citations: Vec<SourceCitation>,
}

impl Message {
    pub fn user(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            content: text.into(),
            origin: Origin::User,
            created_at: Utc::now(),
            citations: Vec::new(),
        }
    }

    pub fn assistant(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            content: text.into(),
            origin: Origin::Assistant,
            created_at: Utc::now(),
            citations: Vec::new(),
        }
    }

    pub fn with_citations(mut self, citations: Vec<SourceCitation>) -> Self {
        self.citations = citations;
        self
    }

    pub fn is_user(&self) -> bool {
        self.origin == Origin::User
    }

    /// Local wall-clock time as shown next to the message, e.g. `09:41`
    pub fn time_label(&self) -> String {
        self.created_at
            .with_timezone(&chrono::Local)
            .format("%H:%M")
            .to_string()
    }
}
