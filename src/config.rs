use clap::Parser;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://192.168.0.201:8080/v1";
pub const DEFAULT_MODEL: &str = "local";
// llama.cpp ignores the key, but some proxies insist on the header
pub const DEFAULT_API_KEY: &str = "sk-no-key";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_QUESTION: &str = "What time is it in Tokyo right now?";

/// Minimal tool-calling test against an OpenAI-compatible chat server.
#[derive(Parser, Debug)]
#[command(name = "toolcall-smoke", version)]
pub struct Cli {
    /// Question sent as the user message
    #[arg(default_value = DEFAULT_QUESTION)]
    pub question: String,

    /// Base URL of the OpenAI-compatible API (without /chat/completions)
    #[arg(long, env = "LLAMA_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Model identifier sent in the request body
    #[arg(long, env = "LLAMA_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Bearer token for the Authorization header
    #[arg(long, env = "LLAMA_API", default_value = DEFAULT_API_KEY, hide_env_values = true)]
    pub api_key: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "LLAMA_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything the client and driver need, resolved once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    pub timeout: Duration,
    pub question: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            question: DEFAULT_QUESTION.to_string(),
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            base_url: cli.base_url.clone(),
            model: cli.model.clone(),
            api_key: cli.api_key.clone(),
            timeout: Duration::from_secs(cli.timeout_secs),
            question: cli.question.clone(),
        }
    }
}

impl Config {
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
