use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const FUNCTION_CALL_TYPE: &str = "function";

/// A tool call as the server sent it. Only `id`, `type` and `function` are
/// interpreted; anything else rides along in `extra` so the call goes back
/// to the server unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ToolCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub call_type: Option<String>, // "function"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<FunctionCall>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ToolCall {
    pub fn function(id: &str, name: &str, arguments: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            call_type: Some(FUNCTION_CALL_TYPE.to_string()),
            function: Some(FunctionCall {
                name: name.to_string(),
                arguments: Some(arguments.to_string()),
            }),
            extra: Map::new(),
        }
    }

    pub fn is_function(&self) -> bool {
        self.call_type.as_deref() == Some(FUNCTION_CALL_TYPE)
    }

    /// Function name, empty when the call carries no `function` object.
    pub fn name(&self) -> &str {
        self.function.as_ref().map_or("", |f| f.name.as_str())
    }

    pub fn arguments(&self) -> Option<&str> {
        self.function.as_ref().and_then(|f| f.arguments.as_deref())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FunctionCall {
    #[serde(default)]
    pub name: String,
    // raw JSON string; some servers omit it for argument-less calls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
}

/// One entry of the transcript, tagged on `role` the way the
/// chat-completions API encodes it.
///
/// Assistant messages keep every field the server sent (`reasoning_content`
/// and the like) in `extra`, so appending one to the transcript and sending
/// it back is lossless.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    System {
        content: String,
    },
    User {
        content: String,
    },
    Assistant {
        #[serde(default)]
        content: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tool_calls: Option<Vec<ToolCall>>,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    Tool {
        // echoes the call's id, null when the call had none
        tool_call_id: Option<String>,
        content: String,
    },
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Message::System {
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Message::User {
            content: content.into(),
        }
    }

    pub fn assistant_text(content: impl Into<String>) -> Self {
        Message::Assistant {
            content: Some(content.into()),
            tool_calls: None,
            extra: Map::new(),
        }
    }

    pub fn assistant_tool_calls(calls: Vec<ToolCall>) -> Self {
        Message::Assistant {
            content: None,
            tool_calls: Some(calls),
            extra: Map::new(),
        }
    }

    pub fn tool(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Message::Tool {
            tool_call_id: Some(tool_call_id.into()),
            content: content.into(),
        }
    }

    pub fn role(&self) -> &'static str {
        match self {
            Message::System { .. } => "system",
            Message::User { .. } => "user",
            Message::Assistant { .. } => "assistant",
            Message::Tool { .. } => "tool",
        }
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            Message::System { content }
            | Message::User { content }
            | Message::Tool { content, .. } => Some(content),
            Message::Assistant { content, .. } => content.as_deref(),
        }
    }

    /// Tool calls requested by an assistant message; empty for every other role.
    pub fn tool_calls(&self) -> &[ToolCall] {
        match self {
            Message::Assistant {
                tool_calls: Some(calls),
                ..
            } => calls,
            _ => &[],
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ChatCompletion {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Choice {
    pub message: Message,
}
