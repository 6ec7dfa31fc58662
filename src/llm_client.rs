use crate::config::Config;
use crate::error::ChatError;
use crate::types::{ChatCompletion, Message};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// Seam between the driver and the network so tests can script the model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmClientTrait {
    async fn chat_once(&self, messages: &[Message], tools: &Value) -> anyhow::Result<Message>;
}

#[derive(Clone)]
pub struct LlmClient {
    url: String,
    api_key: String,
    model: String,
    http: reqwest::Client,
}

impl LlmClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            url: config.completions_url(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            http,
        })
    }

    pub fn request_body(&self, messages: &[Message], tools: &Value) -> Value {
        serde_json::json!({
            "model": self.model,
            "messages": messages,
            "tools": tools,
            "tool_choice": "auto",
            "temperature": 0,
        })
    }

    /// One POST, no retries. Returns the first choice's message.
    pub async fn chat_once(&self, messages: &[Message], tools: &Value) -> Result<Message, ChatError> {
        let req = self.request_body(messages, tools);
        debug!(url = %self.url, messages = messages.len(), "sending chat completion request");

        // .json() also sets Content-Type: application/json
        let resp = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .await
            .map_err(|source| ChatError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = resp.status();
        let response_text = resp.text().await.map_err(|source| ChatError::Transport {
            url: self.url.clone(),
            source,
        })?;
        debug!(%status, bytes = response_text.len(), "received chat completion response");

        if !status.is_success() {
            return Err(ChatError::Http {
                status,
                body: response_text,
            });
        }

        let completion: ChatCompletion = serde_json::from_str(&response_text)?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or(ChatError::EmptyChoices)
    }
}

#[async_trait]
impl LlmClientTrait for LlmClient {
    async fn chat_once(&self, messages: &[Message], tools: &Value) -> anyhow::Result<Message> {
        Ok(LlmClient::chat_once(self, messages, tools).await?)
    }
}
