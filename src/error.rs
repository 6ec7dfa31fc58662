//! Typed errors for the chat client and the tool registry.

use reqwest::StatusCode;
use thiserror::Error;

/// Failures of a single chat-completions round trip. There are no retries, so
/// every variant ends the run.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Connection refused, DNS failure, timeout and similar.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("HTTP {status} from chat completions endpoint: {body}")]
    Http { status: StatusCode, body: String },

    #[error("failed to decode chat completion response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("chat completion response contained no choices")]
    EmptyChoices,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}
