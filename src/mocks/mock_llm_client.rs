use crate::error::ChatError;
use crate::llm_client::LlmClientTrait;
use crate::types::{Message, ToolCall};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

enum Scripted {
    Reply(Message),
    Status(StatusCode, String),
}

/// Scripted stand-in for the chat endpoint that records every transcript it
/// was sent.
#[derive(Clone, Default)]
pub struct MockLlmClient {
    responses: Arc<Mutex<VecDeque<Scripted>>>,
    call_history: Arc<Mutex<Vec<Vec<Message>>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_text_response(&self, content: &str) {
        self.push(Scripted::Reply(Message::assistant_text(content)));
    }

    pub fn add_tool_call_response(&self, tool_name: &str, args: &str) {
        self.add_tool_calls_response(vec![ToolCall::function("call-1", tool_name, args)]);
    }

    pub fn add_tool_calls_response(&self, calls: Vec<ToolCall>) {
        self.push(Scripted::Reply(Message::assistant_tool_calls(calls)));
    }

    pub fn add_response(&self, message: Message) {
        self.push(Scripted::Reply(message));
    }

    pub fn add_status_response(&self, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.push(Scripted::Status(status, body.to_string()));
    }

    pub fn get_call_history(&self) -> Vec<Vec<Message>> {
        self.call_history.lock().unwrap().clone()
    }

    fn push(&self, response: Scripted) {
        self.responses.lock().unwrap().push_back(response);
    }
}

#[async_trait]
impl LlmClientTrait for MockLlmClient {
    async fn chat_once(&self, messages: &[Message], _tools: &Value) -> Result<Message> {
        // Store the call for verification
        self.call_history.lock().unwrap().push(messages.to_vec());

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Reply(msg)) => Ok(msg),
            Some(Scripted::Status(status, body)) => Err(ChatError::Http { status, body }.into()),
            None => Err(anyhow::anyhow!("No mock response available")),
        }
    }
}
