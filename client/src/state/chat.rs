//! Chat widget state and its update function.
//!
//! DESIGN
//! ======
//! All widget state lives in one plain struct that only changes through
//! [`ChatState::apply`] (or the three methods it dispatches to). Sending is a
//! two-phase operation: [`ChatState::begin_send`] records the user message and
//! hands back a [`PendingRequest`]; whoever performs the HTTP call delivers the
//! outcome with [`ChatState::settle`]. The component wraps the struct in an
//! `RwSignal`, so everything here is testable without rendering.
//!
//! ORDERING
//! ========
//! A request's user message is appended before the request exists and its
//! bot message after it settles. Overlapping requests (only possible under
//! [`SendPolicy::AllowConcurrent`]) append their replies in settle order.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SendPolicy;
use crate::net::types::ChatError;
use crate::util::normalize::normalize_outbound;

/// Bot reply shown for every failed exchange.
pub const CHAT_ERROR_REPLY: &str = "Lo siento, ocurrió un error. Intenta de nuevo más tarde.";

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single conversation entry. Never modified after it is appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { sender: Sender::User, text: text.into() }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { sender: Sender::Bot, text: text.into() }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Identifies one accepted send until it settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle for a send that has been accepted but not yet answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: RequestId,
    /// Normalized text to put in the request body.
    pub payload: String,
}

/// Inputs to [`ChatState::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatAction {
    /// The input field changed.
    EditDraft(String),
    /// The user pressed send.
    Send,
    /// A request finished, successfully or not.
    Settled { id: RequestId, outcome: Result<String, ChatError> },
}

/// Draft, conversation and in-flight requests of one widget instance.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    draft: String,
    policy: SendPolicy,
    in_flight: Vec<RequestId>,
    next_request: u64,
}

impl ChatState {
    pub fn new(policy: SendPolicy) -> Self {
        Self { policy, ..Self::default() }
    }

    /// Conversation, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn policy(&self) -> SendPolicy {
        self.policy
    }

    /// True while at least one accepted request has not settled.
    pub fn loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Whether [`ChatState::begin_send`] would accept the current draft.
    pub fn can_send(&self) -> bool {
        if self.draft.trim().is_empty() {
            return false;
        }
        !(self.policy == SendPolicy::BlockWhilePending && self.loading())
    }

    /// Single entry point for every state transition.
    ///
    /// Returns the pending request when the action started one.
    pub fn apply(&mut self, action: ChatAction) -> Option<PendingRequest> {
        match action {
            ChatAction::EditDraft(text) => {
                self.update_draft(text);
                None
            }
            ChatAction::Send => self.begin_send(),
            ChatAction::Settled { id, outcome } => {
                self.settle(id, outcome);
                None
            }
        }
    }

    /// Replace the draft verbatim.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// First phase of a send.
    ///
    /// Returns `None` without touching anything when the draft is blank, or
    /// when the policy blocks sending while a request is pending (the draft is
    /// kept in that case).
    pub fn begin_send(&mut self) -> Option<PendingRequest> {
        if !self.can_send() {
            return None;
        }

        let text = std::mem::take(&mut self.draft);
        let payload = normalize_outbound(&text);
        self.messages.push(ChatMessage::user(text));

        let id = RequestId(self.next_request);
        self.next_request += 1;
        self.in_flight.push(id);

        Some(PendingRequest { id, payload })
    }

    /// Second phase of a send: record the reply or the failure.
    ///
    /// Returns `false` and changes nothing if `id` is not in flight.
    pub fn settle(&mut self, id: RequestId, outcome: Result<String, ChatError>) -> bool {
        let Some(pos) = self.in_flight.iter().position(|pending| *pending == id) else {
            log::warn!("ignoring settle for unknown chat request {id}");
            return false;
        };
        self.in_flight.remove(pos);

        let reply = match outcome {
            Ok(text) => text.trim().to_owned(),
            Err(e) => {
                log::error!("chat request {id} failed: {e}");
                CHAT_ERROR_REPLY.to_owned()
            }
        };
        self.messages.push(ChatMessage::bot(reply));
        true
    }
}
