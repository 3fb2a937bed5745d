//! Repair of tool-call arguments that arrive as JSON text instead of objects.

use async_trait::async_trait;
use serde_json::Value;

use crate::consts::TOOL_CALLS_KEY;
use crate::errors::ClientError;
use crate::llm_client::ChatModel;
use crate::llm_request::GenerateOptions;
use crate::models::generation::ChatResult;
use crate::models::request;

// Structured arguments are left alone; strings that are not valid JSON are
// kept verbatim.
pub fn patch_tool_call_arguments(result: &mut ChatResult) {
    for batch in &mut result.generations {
        for generation in batch {
            let Some(message) = generation.message.as_mut() else {
                continue;
            };
            let Some(tool_calls) = message
                .additional_kwargs
                .get_mut(TOOL_CALLS_KEY)
                .and_then(Value::as_array_mut)
            else {
                continue;
            };
            for tool_call in tool_calls {
                patch_arguments(tool_call);
            }
        }
    }
}

fn patch_arguments(tool_call: &mut Value) {
    let Some(arguments) = tool_call
        .get_mut("function")
        .and_then(|function| function.get_mut("arguments"))
    else {
        return;
    };

    let parsed = match &*arguments {
        Value::String(raw) => serde_json::from_str::<Value>(raw),
        _ => return,
    };

    match parsed {
        Ok(value) => *arguments = value,
        Err(e) => log::debug!("keeping unparseable tool call arguments as text: {}", e),
    }
}

pub struct PatchedChatModel<M> {
    inner: M,
}

impl<M: ChatModel> PatchedChatModel<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    pub fn into_inner(self) -> M {
        self.inner
    }
}

#[async_trait]
impl<M: ChatModel> ChatModel for PatchedChatModel<M> {
    fn model_name(&self) -> &str {
        self.inner.model_name()
    }

    async fn agenerate(
        &self,
        messages: Vec<request::Message>,
        stop: Option<Vec<String>>,
        options: GenerateOptions,
    ) -> Result<ChatResult, ClientError> {
        let mut result = self.inner.agenerate(messages, stop, options).await?;
        patch_tool_call_arguments(&mut result);
        Ok(result)
    }

    fn generate(
        &self,
        messages: Vec<request::Message>,
        stop: Option<Vec<String>>,
        options: GenerateOptions,
    ) -> Result<ChatResult, ClientError> {
        let mut result = self.inner.generate(messages, stop, options)?;
        patch_tool_call_arguments(&mut result);
        Ok(result)
    }
}
