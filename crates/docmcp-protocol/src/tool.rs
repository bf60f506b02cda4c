use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, ProtocolResult};

/// The tools this server can execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolName {
    Search,
    Fetch,
}

impl ToolName {
    pub const ALL: [ToolName; 2] = [ToolName::Search, ToolName::Fetch];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Fetch => "fetch",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = ProtocolError;

    /// Tool names are matched exactly; `Search` is not `search`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "search" => Ok(Self::Search),
            "fetch" => Ok(Self::Fetch),
            other => Err(ProtocolError::UnknownTool(other.to_string())),
        }
    }
}

/// JSON-schema description of one input property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

impl PropertySchema {
    pub fn string(description: impl Into<String>) -> Self {
        Self { kind: "string".into(), description: description.into() }
    }
}

/// JSON-schema object describing a tool's input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSchema {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: BTreeMap<String, PropertySchema>,
    pub required: Vec<String>,
}

impl InputSchema {
    /// An object schema with a single required property.
    pub fn single_required(name: &str, property: PropertySchema) -> Self {
        Self {
            kind: "object".into(),
            properties: BTreeMap::from([(name.to_string(), property)]),
            required: vec![name.to_string()],
        }
    }
}

/// A tool entry in the capability announcement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: InputSchema,
}

impl ToolDescriptor {
    pub fn for_tool(tool: ToolName) -> Self {
        match tool {
            ToolName::Search => Self {
                name: tool.as_str().into(),
                description: "Search for Pokemon, programming topics, or Azure information. \
                              Use keywords to find relevant content."
                    .into(),
                input_schema: InputSchema::single_required(
                    "query",
                    PropertySchema::string(
                        "Search keywords (e.g., 'pikachu', 'python', 'azure functions')",
                    ),
                ),
            },
            ToolName::Fetch => Self {
                name: tool.as_str().into(),
                description: "Get complete details about a specific topic by its ID".into(),
                input_schema: InputSchema::single_required(
                    "id",
                    PropertySchema::string("Document ID from search results"),
                ),
            },
        }
    }
}

/// Every tool, in announcement order.
pub fn manifest() -> Vec<ToolDescriptor> {
    ToolName::ALL.into_iter().map(ToolDescriptor::for_tool).collect()
}

/// Body of a `search` call. A missing `query` is the empty query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

/// Body of a `fetch` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    pub id: String,
}

/// Raw tool arguments: the decoded JSON object of a request body.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Decode a request body into a JSON object.
///
/// Anything that is not a JSON object (empty body, invalid JSON, arrays,
/// scalars) is rejected.
pub fn decode_arguments(body: &[u8]) -> ProtocolResult<JsonObject> {
    serde_json::from_slice(body).map_err(|e| ProtocolError::Deserialization(e.to_string()))
}

/// A decoded, typed tool invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolCall {
    Search(SearchRequest),
    Fetch(FetchRequest),
}

impl ToolCall {
    pub fn from_arguments(tool: ToolName, args: JsonObject) -> ProtocolResult<Self> {
        let value = serde_json::Value::Object(args);
        let call = match tool {
            ToolName::Search => Self::Search(serde_json::from_value(value).map_err(de_err)?),
            ToolName::Fetch => Self::Fetch(serde_json::from_value(value).map_err(de_err)?),
        };
        Ok(call)
    }

    pub fn tool(&self) -> ToolName {
        match self {
            Self::Search(_) => ToolName::Search,
            Self::Fetch(_) => ToolName::Fetch,
        }
    }
}

fn de_err(e: serde_json::Error) -> ProtocolError {
    ProtocolError::Deserialization(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_name_parse() {
        assert_eq!("search".parse::<ToolName>().unwrap(), ToolName::Search);
        assert_eq!("fetch".parse::<ToolName>().unwrap(), ToolName::Fetch);
        let err = "Search".parse::<ToolName>().unwrap_err();
        assert!(matches!(err, ProtocolError::UnknownTool(name) if name == "Search"));
    }

    #[test]
    fn manifest_order_and_names() {
        let tools = manifest();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["search", "fetch"]);
    }

    #[test]
    fn search_descriptor_wire_shape() {
        let value = serde_json::to_value(ToolDescriptor::for_tool(ToolName::Search)).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "search",
                "description": "Search for Pokemon, programming topics, or Azure information. Use keywords to find relevant content.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Search keywords (e.g., 'pikachu', 'python', 'azure functions')"
                        }
                    },
                    "required": ["query"]
                }
            })
        );
    }

    #[test]
    fn fetch_descriptor_wire_shape() {
        let value = serde_json::to_value(ToolDescriptor::for_tool(ToolName::Fetch)).unwrap();
        assert_eq!(value["inputSchema"]["required"], json!(["id"]));
        assert_eq!(
            value["inputSchema"]["properties"]["id"]["description"],
            "Document ID from search results"
        );
        assert_eq!(value["description"], "Get complete details about a specific topic by its ID");
    }

    #[test]
    fn search_request_defaults_query() {
        let req: SearchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.query, "");
    }

    #[test]
    fn search_request_rejects_wrong_type() {
        assert!(serde_json::from_str::<SearchRequest>(r#"{"query": 5}"#).is_err());
    }

    #[test]
    fn fetch_request_requires_id() {
        assert!(serde_json::from_str::<FetchRequest>("{}").is_err());
        let req: FetchRequest = serde_json::from_str(r#"{"id":"python-basics"}"#).unwrap();
        assert_eq!(req.id, "python-basics");
    }

    #[test]
    fn decode_arguments_requires_object() {
        assert!(decode_arguments(br#"{"query":"x"}"#).is_ok());
        let rejected: [&[u8]; 6] = [b"", b"not json", b"[]", b"\"query\"", b"42", b"null"];
        for bad in rejected {
            assert!(
                matches!(decode_arguments(bad), Err(ProtocolError::Deserialization(_))),
                "accepted {:?}",
                String::from_utf8_lossy(bad)
            );
        }
    }

    #[test]
    fn tool_call_from_arguments() {
        let args = decode_arguments(br#"{"query":"pikachu","extra":true}"#).unwrap();
        let call = ToolCall::from_arguments(ToolName::Search, args).unwrap();
        assert_eq!(call, ToolCall::Search(SearchRequest { query: "pikachu".into() }));
        assert_eq!(call.tool(), ToolName::Search);

        let args = decode_arguments(br#"{"query":"pikachu"}"#).unwrap();
        assert!(ToolCall::from_arguments(ToolName::Fetch, args).is_err());
    }
}
