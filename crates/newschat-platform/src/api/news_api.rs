//! News assistant HTTP adapter.
//!
//! Uses browser `fetch()` via gloo-net for WASM compatibility. Each call
//! is bounded by the configured timeout; on expiry the request is aborted
//! and reported as "no response".

use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use web_sys::{AbortController, RequestCredentials};

use newschat_core::ports::ChatApiPort;
use newschat_types::{
    ChatError, Result,
    api::{SendMessageBody, decode_reply, decode_session},
    config::ClientConfig,
    error::TransportFailure,
    reply::AssistantReply,
    session::Session,
};

/// Client for the `/api/chat` endpoints of the news assistant backend.
pub struct NewsApiClient {
    config: ClientConfig,
    api_base: String,
}

impl NewsApiClient {
    pub fn new(config: ClientConfig) -> Self {
        let api_base = config.api_base();
        Self { config, api_base }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn start_url(&self) -> String {
        format!("{}/chat/start", self.api_base)
    }

    pub fn message_url(&self, session_id: &str) -> String {
        format!("{}/chat/{}/message", self.api_base, session_id)
    }

    fn credentials(&self) -> RequestCredentials {
        if self.config.include_credentials {
            RequestCredentials::Include
        } else {
            RequestCredentials::Omit
        }
    }

    fn post(&self, url: &str) -> RequestBuilder {
        Request::post(url)
            .header("Content-Type", "application/json")
            .credentials(self.credentials())
    }

    /// Run one request to completion and return the response body.
    ///
    /// `build` receives the abort signal to attach. Non-2xx responses come
    /// back as `TransportFailure::Status` with the body text.
    async fn exchange<F>(&self, url: &str, build: F) -> std::result::Result<String, TransportFailure>
    where
        F: FnOnce(&web_sys::AbortSignal) -> std::result::Result<Request, gloo_net::Error>,
    {
        let abort = AbortController::new()
            .map_err(|e| TransportFailure::Setup(format!("{:?}", e)))?;
        let request = build(&abort.signal()).map_err(|e| TransportFailure::Setup(e.to_string()))?;

        let call = Box::pin(async move {
            let response = request
                .send()
                .await
                .map_err(|e| TransportFailure::NoResponse(e.to_string()))?;
            let status = response.status();
            let ok = response.ok();
            let body = response
                .text()
                .await
                .map_err(|e| TransportFailure::NoResponse(e.to_string()))?;
            if ok {
                Ok(body)
            } else {
                Err(TransportFailure::Status { status, body })
            }
        });
        let timeout = TimeoutFuture::new(self.config.timeout_ms.min(u32::MAX as u64) as u32);

        match future::select(call, timeout).await {
            Either::Left((result, _)) => {
                if let Err(failure) = &result {
                    log::error!("API error - {}: {:?}", url, failure);
                }
                result
            }
            Either::Right(((), _)) => {
                abort.abort();
                log::error!("API error - no response from {} within {}ms", url, self.config.timeout_ms);
                Err(TransportFailure::NoResponse(format!(
                    "timeout after {}ms",
                    self.config.timeout_ms
                )))
            }
        }
    }
}

#[async_trait(?Send)]
impl ChatApiPort for NewsApiClient {
    async fn start_session(&self) -> Result<Session> {
        let url = self.start_url();
        let body = self
            .exchange(&url, |signal| self.post(&url).abort_signal(Some(signal)).build())
            .await
            .map_err(ChatError::from_connection)?;

        let session = decode_session(&body)
            .inspect_err(|_| log::error!("Unusable session response from {}", url))?;
        log::info!("API response: {} -> session {}", url, session.id);
        Ok(session)
    }

    async fn send_message(&self, session_id: &str, text: &str) -> Result<AssistantReply> {
        let url = self.message_url(session_id);
        let payload = SendMessageBody {
            message: text.to_string(),
        };
        let body = self
            .exchange(&url, |signal| {
                self.post(&url).abort_signal(Some(signal)).json(&payload)
            })
            .await
            .map_err(ChatError::from_send)?;

        let reply = decode_reply(&body)
            .inspect_err(|_| log::error!("Malformed chat response from {}", url))?;
        log::info!("API response: {} -> {} citation(s)", url, reply.citations.len());
        Ok(reply)
    }

    async fn health(&self) -> Result<serde_json::Value> {
        let url = self.config.health_url();
        let body = self
            .exchange(&url, |signal| {
                Request::get(&url)
                    .credentials(self.credentials())
                    .abort_signal(Some(signal))
                    .build()
            })
            .await
            .map_err(ChatError::from_connection)?;
        Ok(serde_json::from_str(&body)?)
    }
}
