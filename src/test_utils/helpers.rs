use std::io::Write;

use serde_json::{Map, Value, json};

use crate::llm_request::GenerateOptions;
use crate::models::generation::{AiMessage, ChatGeneration, ChatResult};
use crate::models::request;
use tempfile::NamedTempFile;

pub fn create_test_messages(user_message: &str) -> Vec<request::Message> {
    vec![
        request::Message::system("You are a helpful assistant."),
        request::Message::user(user_message),
    ]
}

pub fn create_test_options() -> GenerateOptions {
    let mut options = GenerateOptions::new();
    options.insert("temperature".to_string(), json!(0.0));
    options.insert(
        "tools".to_string(),
        json!([{
            "type": "function",
            "function": {
                "name": "get_weather",
                "parameters": {
                    "type": "object",
                    "properties": {"city": {"type": "string"}},
                    "required": ["city"]
                }
            }
        }]),
    );
    options
}

pub fn create_tool_call(id: &str, arguments: Value) -> Value {
    json!({
        "id": id,
        "type": "function",
        "function": {
            "name": "get_weather",
            "arguments": arguments
        }
    })
}

pub fn create_result_with_tool_calls(tool_calls: Vec<Value>) -> ChatResult {
    let mut additional_kwargs = Map::new();
    additional_kwargs.insert("tool_calls".to_string(), Value::Array(tool_calls));

    ChatResult {
        generations: vec![vec![ChatGeneration {
            message: Some(AiMessage {
                content: String::new(),
                additional_kwargs,
            }),
            generation_info: None,
        }]],
        llm_output: None,
    }
}

pub fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("model_factory_")
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config");
    file
}
