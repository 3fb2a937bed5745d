use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::consts::DEEPSEEK_DOMAIN_MARKER;
use crate::errors::ClientError;
use crate::llm_client::{ChatModel, OpenAiChatClient};
use crate::llm_request::GenerateOptions;
use crate::models::generation::ChatResult;
use crate::models::request;
use crate::response_patch::PatchedChatModel;

pub type DeepSeekChatClient = PatchedChatModel<OpenAiChatClient>;

pub enum ChatClient {
    Plain(OpenAiChatClient),
    DeepSeek(DeepSeekChatClient),
}

impl ChatClient {
    pub fn is_patched(&self) -> bool {
        matches!(self, ChatClient::DeepSeek(_))
    }

    pub fn config(&self) -> &ClientConfig {
        match self {
            ChatClient::Plain(client) => client.config(),
            ChatClient::DeepSeek(client) => client.inner().config(),
        }
    }
}

#[async_trait]
impl ChatModel for ChatClient {
    fn model_name(&self) -> &str {
        match self {
            ChatClient::Plain(client) => client.model_name(),
            ChatClient::DeepSeek(client) => client.model_name(),
        }
    }

    async fn agenerate(
        &self,
        messages: Vec<request::Message>,
        stop: Option<Vec<String>>,
        options: GenerateOptions,
    ) -> Result<ChatResult, ClientError> {
        match self {
            ChatClient::Plain(client) => client.agenerate(messages, stop, options).await,
            ChatClient::DeepSeek(client) => client.agenerate(messages, stop, options).await,
        }
    }

    fn generate(
        &self,
        messages: Vec<request::Message>,
        stop: Option<Vec<String>>,
        options: GenerateOptions,
    ) -> Result<ChatResult, ClientError> {
        match self {
            ChatClient::Plain(client) => client.generate(messages, stop, options),
            ChatClient::DeepSeek(client) => client.generate(messages, stop, options),
        }
    }
}

/// True when `base_url` points at DeepSeek's official API. The match is a
/// plain case-insensitive substring test anywhere in the URL.
pub fn is_deepseek_official_api(base_url: Option<&str>) -> bool {
    base_url.is_some_and(|url| url.to_lowercase().contains(DEEPSEEK_DOMAIN_MARKER))
}

// Never fails: bad URLs or missing keys surface on the first call.
pub fn create_chat_model(config: ClientConfig) -> ChatClient {
    if is_deepseek_official_api(config.base_url.as_deref()) {
        if config.verbose {
            log::info!(
                "using tool call argument patching for official DeepSeek API (model {})",
                config.model
            );
        }
        return ChatClient::DeepSeek(PatchedChatModel::new(OpenAiChatClient::new(config)));
    }

    ChatClient::Plain(OpenAiChatClient::new(config))
}
