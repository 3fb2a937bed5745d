use serde::{self, Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ImageUrl {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum MessageContent {
    String(String),
    Array(Vec<MessageContentPart>),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MessageSystemUser {
    pub content: MessageContent,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MessageAssistant {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tool_calls: Option<Vec<Value>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MessageTool {
    pub tool_call_id: String,
    pub content: MessageContent,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Message {
    User(MessageSystemUser),
    System(MessageSystemUser),
    Assistant(MessageAssistant),
    Tool(MessageTool),
}

impl Message {
    pub fn system(text: impl Into<String>) -> Self {
        Message::System(MessageSystemUser {
            content: MessageContent::String(text.into()),
        })
    }

    pub fn user(text: impl Into<String>) -> Self {
        Message::User(MessageSystemUser {
            content: MessageContent::String(text.into()),
        })
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Message::Assistant(MessageAssistant {
            content: Some(text.into()),
            tool_calls: None,
        })
    }

    pub fn tool(tool_call_id: impl Into<String>, text: impl Into<String>) -> Self {
        Message::Tool(MessageTool {
            tool_call_id: tool_call_id.into(),
            content: MessageContent::String(text.into()),
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatCompletionCreate {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stop: Option<Vec<String>>,
    #[serde(flatten, default)]
    pub extra: Map<String, Value>,
}
