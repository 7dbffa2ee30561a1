//! Wire-protocol DTOs and errors for the chat endpoint.
//!
//! DESIGN
//! ======
//! One request shape and one reply shape. Anything the endpoint returns that
//! does not decode into [`ChatReply`] is a failure, whatever the HTTP status.

use serde::{Deserialize, Serialize};

/// `Content-Type` header sent with every chat request.
pub const CHAT_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Body of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Normalized user text.
    pub message: String,
}

/// Successful reply from the chat endpoint. Extra fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Errors produced while exchanging a message with the chat endpoint.
///
/// Every variant collapses to the same user-visible reply; the detail only
/// reaches the diagnostic log.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("chat request failed: {0}")]
    Request(String),

    /// The request body could not be serialized.
    #[error("chat request encode failed: {0}")]
    Encode(String),

    /// The response body was not a JSON object with a string `response`.
    #[error("chat reply decode failed: {0}")]
    Decode(String),
}
