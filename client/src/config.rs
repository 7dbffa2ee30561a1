//! Chat widget configuration.
//!
//! DESIGN
//! ======
//! The widget never hardcodes where it sends messages. The host process reads
//! the values from its environment and the shell writes them into `<meta>`
//! tags, so the hydrated browser build picks up exactly what was rendered.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CHAT_ENDPOINT: &str = "http://127.0.0.1:5000/chat";

/// `<meta name=...>` carrying the chat endpoint URL.
pub const ENDPOINT_META: &str = "chat-endpoint";
/// `<meta name=...>` carrying the send policy.
pub const SEND_POLICY_META: &str = "chat-send-policy";

/// Errors produced while parsing widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown send policy '{0}' (expected 'allow-concurrent' or 'block-while-pending')")]
    UnknownSendPolicy(String),
}

/// What to do when the user sends while an earlier request is still pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SendPolicy {
    /// Every send issues its own request; replies land in completion order.
    #[default]
    AllowConcurrent,
    /// Sends are refused until the in-flight request settles.
    BlockWhilePending,
}

impl SendPolicy {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim() {
            "allow-concurrent" => Ok(Self::AllowConcurrent),
            "block-while-pending" => Ok(Self::BlockWhilePending),
            other => Err(ConfigError::UnknownSendPolicy(other.to_owned())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllowConcurrent => "allow-concurrent",
            Self::BlockWhilePending => "block-while-pending",
        }
    }
}

/// Values injected into the chat widget at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub endpoint: String,
    pub send_policy: SendPolicy,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_CHAT_ENDPOINT.to_owned(), send_policy: SendPolicy::default() }
    }
}

impl ChatConfig {
    /// Build config from raw optional values, applying defaults for absent or
    /// blank entries.
    pub fn from_values(endpoint: Option<&str>, send_policy: Option<&str>) -> Result<Self, ConfigError> {
        let endpoint = endpoint
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_CHAT_ENDPOINT)
            .to_owned();
        let send_policy = match send_policy.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => SendPolicy::parse(raw)?,
            None => SendPolicy::default(),
        };
        Ok(Self { endpoint, send_policy })
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `CHAT_ENDPOINT`: default `http://127.0.0.1:5000/chat`
    /// - `CHAT_SEND_POLICY`: `allow-concurrent` (default) or `block-while-pending`
    pub fn from_env() -> Result<Self, ConfigError> {
        let endpoint = std::env::var("CHAT_ENDPOINT").ok();
        let send_policy = std::env::var("CHAT_SEND_POLICY").ok();
        Self::from_values(endpoint.as_deref(), send_policy.as_deref())
    }

    /// Read the config the shell rendered into the page head.
    ///
    /// Falls back to defaults when a tag is missing or unparseable.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let endpoint = read_meta(ENDPOINT_META);
        let send_policy = read_meta(SEND_POLICY_META);
        Self::from_values(endpoint.as_deref(), send_policy.as_deref()).unwrap_or_else(|e| {
            log::warn!("invalid chat config in document, using defaults: {e}");
            Self::default()
        })
    }
}

#[cfg(feature = "hydrate")]
fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{name}\"]");
    let element = document.query_selector(&selector).ok()??;
    element.get_attribute("content")
}
