//! Wire types for the news assistant HTTP API.
//!
//! Field names follow the backend's camelCase JSON. Everything the
//! backend may omit is optional here.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ChatError, ConnectionCause};
use crate::reply::{AssistantReply, SourceCitation};
use crate::session::Session;

/// Body of `POST /chat/{sessionId}/message`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageBody {
    pub message: String,
}

/// Response of `POST /chat/{sessionId}/message`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,
    #[serde(default)]
    pub hits: Option<Vec<Hit>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Hit {
    #[serde(default)]
    pub payload: Option<HitPayload>,
    #[serde(default)]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HitPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Error body some non-2xx responses carry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Treats an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a successful `/chat/start` body.
///
/// A body that does not parse, or carries an empty `sessionId`, means the
/// backend is not in a usable state and is reported like a server error.
pub fn decode_session(body: &str) -> crate::Result<Session> {
    let unusable = || ChatError::Connection(ConnectionCause::ServerError { status: 200 });
    let session: Session = serde_json::from_str(body).map_err(|_| unusable())?;
    if session.id.is_empty() {
        return Err(unusable());
    }
    Ok(session)
}

/// Parse a successful `/chat/{id}/message` body.
pub fn decode_reply(body: &str) -> crate::Result<AssistantReply> {
    serde_json::from_str::<ChatResponse>(body)
        .map(AssistantReply::from)
        .map_err(|_| ChatError::RequestFailed {
            status: 200,
            message: None,
        })
}

impl From<Hit> for SourceCitation {
    fn from(hit: Hit) -> Self {
        let payload = hit.payload.unwrap_or_default();
        SourceCitation {
            title: payload.title,
            url: payload.url,
            excerpt: payload.content,
            score: hit.score,
        }
    }
}

impl From<ChatResponse> for AssistantReply {
    fn from(resp: ChatResponse) -> Self {
        AssistantReply {
            answer: resp.answer,
            citations: resp
                .hits
                .unwrap_or_default()
                .into_iter()
                .map(SourceCitation::from)
                .collect(),
        }
    }
}
