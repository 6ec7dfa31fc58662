pub mod agent;
pub mod config;
pub mod error;
pub mod llm_client;
pub mod session;
pub mod tool_registry;
pub mod tools;
pub mod types;

#[cfg(test)]
mod mocks;
#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use config::{Cli, Config};
pub use error::{ChatError, ToolError};
pub use llm_client::{LlmClient, LlmClientTrait};
pub use session::Transcript;
pub use tool_registry::ToolRegistry;
