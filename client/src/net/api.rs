//! Encoding and decoding of chat endpoint bodies.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a malformed reply only
//! turns into the generic failure message in the conversation.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatError, ChatReply, ChatRequest};

/// Serialize the outbound payload into the `{"message": ...}` body.
pub fn encode_request(message: &str) -> Result<String, ChatError> {
    let body = ChatRequest { message: message.to_owned() };
    serde_json::to_string(&body).map_err(|e| ChatError::Encode(e.to_string()))
}

/// Extract the `response` field from a raw reply body.
///
/// The text is returned untouched; trimming happens when the reply is
/// appended to the conversation.
pub fn decode_reply(body: &str) -> Result<String, ChatError> {
    serde_json::from_str::<ChatReply>(body)
        .map(|reply| reply.response)
        .map_err(|e| ChatError::Decode(e.to_string()))
}
