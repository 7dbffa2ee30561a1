use super::*;
use crate::state::chat::{CHAT_ERROR_REPLY, ChatMessage, ChatState};
use futures::executor::block_on;
use std::sync::Mutex;

// =========================================================================
// MockTransport
// =========================================================================

struct MockTransport {
    reply: Result<String, ChatError>,
    seen: Mutex<Vec<(String, String)>>,
}

impl MockTransport {
    fn replying(body: &str) -> Self {
        Self { reply: Ok(body.to_owned()), seen: Mutex::new(Vec::new()) }
    }

    fn failing(err: ChatError) -> Self {
        Self { reply: Err(err), seen: Mutex::new(Vec::new()) }
    }
}

#[async_trait::async_trait(?Send)]
impl ChatTransport for MockTransport {
    async fn post(&self, endpoint: &str, body: String) -> Result<String, ChatError> {
        self.seen.lock().unwrap().push((endpoint.to_owned(), body));
        self.reply.clone()
    }
}

const ENDPOINT: &str = "http://mock.test/chat";

fn run_send(state: &mut ChatState, transport: &MockTransport, text: &str) {
    state.update_draft(text);
    let pending = state.begin_send().expect("pending request");
    assert!(state.loading());
    let outcome = block_on(exchange(transport, ENDPOINT, &pending));
    assert!(state.loading());
    state.settle(pending.id, outcome);
}

// =========================================================================
// exchange
// =========================================================================

#[test]
fn exchange_posts_normalized_payload_to_endpoint() {
    let transport = MockTransport::replying(r#"{"response":"hola"}"#);
    let mut state = ChatState::default();
    run_send(&mut state, &transport, "Hola, Mundo!!");

    let seen = transport.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, ENDPOINT);
    assert_eq!(seen[0].1, r#"{"message":"hola mundo"}"#);
}

#[test]
fn exchange_success_appends_trimmed_reply() {
    let transport = MockTransport::replying(r#"{"response": "  Hi there  "}"#);
    let mut state = ChatState::default();
    run_send(&mut state, &transport, "hi");

    assert_eq!(state.messages(), &[ChatMessage::user("hi"), ChatMessage::bot("Hi there")]);
    assert!(!state.loading());
}

#[test]
fn exchange_transport_failure_appends_error_reply() {
    let transport = MockTransport::failing(ChatError::Request("NetworkError".to_owned()));
    let mut state = ChatState::default();
    run_send(&mut state, &transport, "hola");

    assert_eq!(state.messages()[1].text, CHAT_ERROR_REPLY);
    assert!(!state.loading());
}

#[test]
fn exchange_malformed_body_appends_error_reply() {
    let transport = MockTransport::replying("Internal Server Error");
    let mut state = ChatState::default();
    run_send(&mut state, &transport, "hola");

    assert_eq!(state.messages()[1].text, CHAT_ERROR_REPLY);
    assert!(!state.loading());
}

#[test]
fn exchange_returns_decode_error_for_wrong_shape() {
    let transport = MockTransport::replying(r#"{"response": 42}"#);
    let mut state = ChatState::default();
    state.update_draft("x");
    let pending = state.begin_send().expect("pending request");
    let result = block_on(exchange(&transport, ENDPOINT, &pending));
    assert!(matches!(result, Err(ChatError::Decode(_))));
}
