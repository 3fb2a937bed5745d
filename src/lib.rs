pub mod config;
pub mod consts;
pub mod errors;
pub mod factory;
pub mod llm_client;
pub mod llm_request;
pub mod models;
pub mod response_patch;

#[cfg(test)]
mod test_utils;

pub use config::ClientConfig;
pub use errors::ClientError;
pub use factory::{ChatClient, create_chat_model, is_deepseek_official_api};
pub use llm_client::{ChatModel, OpenAiChatClient};
pub use response_patch::{PatchedChatModel, patch_tool_call_arguments};
