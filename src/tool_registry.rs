use crate::error::ToolError;
use serde_json::{Map, Value, json};

pub const GET_TIME: &str = "get_time";

/// Whatever a tool hands back; sent to the model JSON-encoded.
pub type ToolResult = Value;

/// A tool as advertised to the model.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value, // JSON Schema
}

impl ToolSpec {
    /// Chat-completions `tools` entry for this tool.
    pub fn schema(&self) -> Value {
        json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters,
            }
        })
    }
}

/// Outcome of decoding `function.arguments` from a tool call.
#[derive(Clone, Debug, PartialEq)]
pub enum ToolArguments {
    Parsed(Map<String, Value>),
    /// Absent or empty string.
    Missing,
    /// Not JSON, or JSON that isn't an object.
    Malformed { raw: String, reason: String },
}

impl ToolArguments {
    pub fn parse(raw: Option<&str>) -> Self {
        let raw = match raw.map(str::trim) {
            None | Some("") => return ToolArguments::Missing,
            Some(raw) => raw,
        };
        match serde_json::from_str::<Map<String, Value>>(raw) {
            Ok(map) => ToolArguments::Parsed(map),
            Err(e) => ToolArguments::Malformed {
                raw: raw.to_string(),
                reason: e.to_string(),
            },
        }
    }

    /// Arguments to execute with; anything unusable becomes an empty mapping.
    pub fn into_map(self) -> Map<String, Value> {
        match self {
            ToolArguments::Parsed(map) => map,
            ToolArguments::Missing | ToolArguments::Malformed { .. } => Map::new(),
        }
    }
}

#[derive(Clone)]
pub struct ToolRegistry {
    specs: Vec<ToolSpec>,
    schemas: Value,
}

impl ToolRegistry {
    pub fn new() -> Self {
        let specs = vec![ToolSpec {
            name: GET_TIME,
            description: "Get the current local time for a city.",
            parameters: json!({
                "type": "object",
                "properties": {
                    "city": { "type": "string" }
                },
                "required": ["city"]
            }),
        }];
        // Single source of truth for the "tools" array the model sees
        let schemas = Value::Array(specs.iter().map(ToolSpec::schema).collect());
        Self { specs, schemas }
    }

    pub fn specs(&self) -> &[ToolSpec] {
        &self.specs
    }

    pub fn schemas(&self) -> &Value {
        &self.schemas
    }

    pub fn execute(&self, name: &str, args: &Map<String, Value>) -> Result<ToolResult, ToolError> {
        match name {
            GET_TIME => Ok(json!(crate::tools::get_time(args))),
            _ => Err(ToolError::UnknownTool(name.to_string())),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
