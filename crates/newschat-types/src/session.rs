use serde::{Deserialize, Serialize};

const SHORT_ID_LEN: usize = 8;

/// A server-issued chat session.
///
/// Sessions are never mutated in place: a reset or an expiry replaces
/// the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(rename = "sessionId")]
    pub id: String,
    /// Timestamp as reported by the server, kept verbatim
    #[serde(default, deserialize_with = "crate::api::null_as_default")]
    pub created_at: String,
}

impl Session {
    pub fn new(id: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: created_at.into(),
        }
    }

    /// First eight characters of the id, for display
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(SHORT_ID_LEN) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }
}
