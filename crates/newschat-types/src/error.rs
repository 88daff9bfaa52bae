use thiserror::Error;

use crate::api::ErrorBody;

pub const GENERIC_SEND_FAILURE: &str = "Sorry, I encountered an error. Please try again.";

/// Why a session could not be started
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionCause {
    #[error("no response from server: {0}")]
    NoResponse(String),

    #[error("server error: HTTP {status}")]
    ServerError { status: u16 },

    #[error("request setup error: {0}")]
    RequestSetup(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Unable to reach the chat service: {0}")]
    Connection(ConnectionCause),

    #[error("Chat session not found")]
    SessionExpired,

    #[error("Service unavailable")]
    ServiceUnavailable,

    #[error("Request failed with HTTP {status}")]
    RequestFailed {
        status: u16,
        message: Option<String>,
    },

    #[error("Connection lost: {0}")]
    ConnectionLost(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Serialization(e.to_string())
    }
}

/// What went wrong at the transport level, before any API meaning is
/// attached. Produced by the HTTP adapter, classified here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// Request was sent but nothing came back (offline, CORS, timeout)
    NoResponse(String),
    /// Server answered outside 2xx
    Status { status: u16, body: String },
    /// The request could not be built
    Setup(String),
}

impl ChatError {
    /// Failures of calls that only establish reachability (session start,
    /// health check) are all connection errors.
    pub fn from_connection(failure: TransportFailure) -> Self {
        let cause = match failure {
            TransportFailure::NoResponse(msg) => ConnectionCause::NoResponse(msg),
            TransportFailure::Status { status, .. } => ConnectionCause::ServerError { status },
            TransportFailure::Setup(msg) => ConnectionCause::RequestSetup(msg),
        };
        ChatError::Connection(cause)
    }

    /// Classify a failed message submission by response status.
    pub fn from_send(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::NoResponse(msg) => ChatError::ConnectionLost(msg),
            TransportFailure::Status { status: 404, .. } => ChatError::SessionExpired,
            TransportFailure::Status { status: 503, .. } => ChatError::ServiceUnavailable,
            TransportFailure::Status { status, body } => ChatError::RequestFailed {
                status,
                message: server_message(&body),
            },
            TransportFailure::Setup(_) => ChatError::RequestFailed {
                status: 0,
                message: None,
            },
        }
    }

    /// Text shown to the user in a one-shot notification
    pub fn user_message(&self) -> String {
        match self {
            ChatError::SessionExpired => {
                "Chat session not found. Please refresh the page to start a new chat.".to_string()
            }
            ChatError::ServiceUnavailable => {
                "The service is currently unavailable. Please try again later.".to_string()
            }
            ChatError::RequestFailed {
                message: Some(message),
                ..
            } => message.clone(),
            ChatError::ConnectionLost(_) => {
                "Unable to connect to the server. Please check your internet connection."
                    .to_string()
            }
            _ => GENERIC_SEND_FAILURE.to_string(),
        }
    }
}

/// `message` field of a JSON error body, if there is a non-empty one
fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
}
