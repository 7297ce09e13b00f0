//! Chat-completion client behind the free-form "ask" feature.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ChatConfig;
use crate::error::{Error, Result};
use crate::transform::EMPTY_INPUT;

/// Reply returned when no API key is configured; no network call is made.
pub const MISSING_KEY_MESSAGE: &str = "You are missing the api key.";

/// One turn in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// Caller-owned message history. The client appends to it but never stores
/// one itself, so each UI session can scope its own history.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message {
            role: "user".to_string(),
            content: content.into(),
        });
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message {
            role: "assistant".to_string(),
            content: content.into(),
        });
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl ChatClient {
    pub fn new(config: &ChatConfig) -> Self {
        ChatClient {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Ask the assistant about `input` in the context of `conversation`.
    ///
    /// Empty input is rejected; a missing key short-circuits with
    /// [`MISSING_KEY_MESSAGE`]. A transport or shape failure becomes the
    /// reply text rather than an error, and either way the reply is
    /// appended to the conversation.
    pub async fn ask(&self, conversation: &mut Conversation, input: &str) -> Result<String> {
        if input.is_empty() {
            return Err(Error::validation(EMPTY_INPUT));
        }
        let Some(key) = self.api_key.as_deref() else {
            return Ok(MISSING_KEY_MESSAGE.to_string());
        };
        conversation.push_user(input);

        let reply = match self.call(key, conversation).await {
            Ok(reply) => reply,
            Err(e) => {
                log::warn!("chat completion failed: {e:#}");
                format!("{e:#}")
            }
        };
        conversation.push_assistant(reply.clone());
        Ok(reply)
    }

    async fn call(&self, key: &str, conversation: &Conversation) -> anyhow::Result<String> {
        let request = serde_json::json!({
            "model": self.model,
            "messages": conversation.messages(),
        });
        let response: Value = self
            .http
            .post(&self.endpoint)
            .bearer_auth(key)
            .json(&request)
            .send()
            .await
            .context("chat request failed")?
            .json()
            .await
            .context("chat response was not JSON")?;

        response["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .context("chat response had no message content")
    }
}
