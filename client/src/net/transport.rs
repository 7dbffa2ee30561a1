//! HTTP transport for the chat exchange.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Everywhere else the widget never sends, so only the trait and the
//! transport-agnostic [`exchange`] are compiled.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use super::api::{decode_reply, encode_request};
use super::types::ChatError;
use crate::state::chat::PendingRequest;

/// Posts a JSON body to the chat endpoint and returns the raw response body.
///
/// Futures are `?Send` because the browser build runs on a single-threaded
/// event loop with `!Send` JS handles.
#[async_trait::async_trait(?Send)]
pub trait ChatTransport {
    async fn post(&self, endpoint: &str, body: String) -> Result<String, ChatError>;
}

/// Run one request/response exchange for a pending send.
///
/// No timeout and no retry: the returned future resolves once the transport
/// does.
pub async fn exchange<T>(transport: &T, endpoint: &str, pending: &PendingRequest) -> Result<String, ChatError>
where
    T: ChatTransport + ?Sized,
{
    let body = encode_request(&pending.payload)?;
    let raw = transport.post(endpoint, body).await?;
    decode_reply(&raw)
}

/// Browser `fetch` transport.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl ChatTransport for GlooTransport {
    async fn post(&self, endpoint: &str, body: String) -> Result<String, ChatError> {
        let resp = gloo_net::http::Request::post(endpoint)
            .header("Content-Type", super::types::CHAT_CONTENT_TYPE)
            .body(body)
            .map_err(|e| ChatError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Request(e.to_string()))?;
        resp.text().await.map_err(|e| ChatError::Request(e.to_string()))
    }
}
