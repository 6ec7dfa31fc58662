use crate::error::ToolError;
use crate::llm_client::LlmClientTrait;
use crate::session::Transcript;
use crate::tool_registry::{ToolArguments, ToolRegistry};
use crate::types::{Message, ToolCall};
use serde_json::Map;
use std::io::Write;
use tracing::{debug, info, instrument, warn};

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant. When a tool is useful, call it with valid JSON. \
     Return final answers concisely.";

/// Drives the fixed two-round exchange: ask, run requested tools, ask again.
pub struct Agent {
    llm: Box<dyn LlmClientTrait + Send + Sync>,
    tools: ToolRegistry,
}

impl Agent {
    pub fn new(llm: Box<dyn LlmClientTrait + Send + Sync>, tools: ToolRegistry) -> Self {
        Self { llm, tools }
    }

    /// Runs both rounds and returns the final assistant content, if any.
    ///
    /// The transcript must be empty; it is seeded with the system prompt and
    /// `question`. Every request, assistant reply and tool result ends up in it.
    #[instrument(name = "run", skip_all, fields(id = %transcript.id))]
    pub async fn run(&self, question: &str, transcript: &mut Transcript) -> anyhow::Result<Option<String>> {
        transcript.push(Message::system(SYSTEM_PROMPT));
        transcript.push(Message::user(question));

        info!(round = 1, "requesting assistant response");
        let first = self
            .llm
            .chat_once(transcript.messages(), self.tools.schemas())
            .await?;

        // assistant message first, then one tool message per call
        let tool_messages = self.run_tool_calls(first.tool_calls())?;
        transcript.push(first);
        info!(tool_results = tool_messages.len(), "tool calls handled");
        for msg in tool_messages {
            transcript.push(msg);
        }

        info!(round = 2, messages = transcript.len(), "requesting final answer");
        let last = self
            .llm
            .chat_once(transcript.messages(), self.tools.schemas())
            .await?;
        let answer = last.content().map(str::to_string);
        transcript.push(last);

        Ok(answer)
    }

    /// Runs both rounds and writes the answer block to `out`. Nothing is
    /// written unless both rounds succeed.
    pub async fn run_and_print<W: Write>(
        &self,
        question: &str,
        transcript: &mut Transcript,
        out: &mut W,
    ) -> anyhow::Result<()> {
        let answer = self.run(question, transcript).await?;
        writeln!(out, "\nASSISTANT:\n {}", answer.unwrap_or_default())?;
        out.flush()?;
        Ok(())
    }

    /// One tool message per function call, in the order the model asked.
    /// Calls of any other type are skipped.
    pub fn run_tool_calls(&self, calls: &[ToolCall]) -> Result<Vec<Message>, ToolError> {
        let mut out = Vec::with_capacity(calls.len());
        for call in calls {
            if !call.is_function() {
                debug!(id = ?call.id, call_type = ?call.call_type, "skipping non-function tool call");
                continue;
            }
            out.push(self.run_tool_call(call)?);
        }
        Ok(out)
    }

    fn run_tool_call(&self, call: &ToolCall) -> Result<Message, ToolError> {
        let name = call.name();
        let args = match ToolArguments::parse(call.arguments()) {
            ToolArguments::Malformed { raw, reason } => {
                warn!(tool = %name, %raw, %reason, "unparsable tool arguments, using {{}}");
                Map::new()
            }
            other => other.into_map(),
        };

        info!(tool = %name, id = ?call.id, "executing tool");
        let result = self.tools.execute(name, &args)?;
        debug!(tool = %name, %result, "tool finished");

        Ok(Message::Tool {
            tool_call_id: call.id.clone(),
            content: result.to_string(),
        })
    }
}
