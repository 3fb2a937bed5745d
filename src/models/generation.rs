use serde::{self, Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Usage;
use super::response::ChatCompletion;

// Assistant reply. Provider-specific fields such as `tool_calls` live in
// `additional_kwargs` exactly as the provider sent them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct AiMessage {
    pub content: String,
    #[serde(default)]
    pub additional_kwargs: Map<String, Value>,
}

impl AiMessage {
    pub fn tool_calls(&self) -> Option<&Vec<Value>> {
        self.additional_kwargs
            .get(crate::consts::TOOL_CALLS_KEY)
            .and_then(Value::as_array)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ChatGeneration {
    #[serde(default)]
    pub message: Option<AiMessage>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub generation_info: Option<Map<String, Value>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LlmOutput {
    #[serde(default)]
    pub token_usage: Option<Usage>,
    pub model_name: String,
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ChatResult {
    pub generations: Vec<Vec<ChatGeneration>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub llm_output: Option<LlmOutput>,
}

impl ChatResult {
    pub fn messages(&self) -> impl Iterator<Item = &AiMessage> {
        self.generations
            .iter()
            .flatten()
            .filter_map(|generation| generation.message.as_ref())
    }
}

impl From<ChatCompletion> for ChatResult {
    fn from(completion: ChatCompletion) -> Self {
        let batch = completion
            .choices
            .into_iter()
            .map(|choice| {
                let generation_info = choice.finish_reason.map(|reason| {
                    let mut info = Map::new();
                    info.insert("finish_reason".to_string(), Value::String(reason));
                    info
                });
                ChatGeneration {
                    message: Some(AiMessage {
                        content: choice.message.content.unwrap_or_default(),
                        additional_kwargs: choice.message.extra,
                    }),
                    generation_info,
                }
            })
            .collect();

        ChatResult {
            generations: vec![batch],
            llm_output: Some(LlmOutput {
                token_usage: completion.usage,
                model_name: completion.model,
                id: Some(completion.id),
            }),
        }
    }
}
