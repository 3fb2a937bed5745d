#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use model_factory::config::{ClientConfig, ConfigLoader};
use model_factory::errors::ClientError;
use model_factory::llm_client::ChatModel;
use model_factory::llm_request::GenerateOptions;
use model_factory::models::generation::ChatResult;
use model_factory::models::request;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub messages: Vec<request::Message>,
    pub stop: Option<Vec<String>>,
    pub options: GenerateOptions,
    pub blocking: bool,
}

pub struct MockChatModel {
    model: String,
    responses: Arc<Mutex<VecDeque<Result<ChatResult, ClientError>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockChatModel {
    pub fn new(model: &str) -> Self {
        Self {
            model: model.to_string(),
            responses: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn add_response(&self, response: Result<ChatResult, ClientError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next_response(
        &self,
        messages: Vec<request::Message>,
        stop: Option<Vec<String>>,
        options: GenerateOptions,
        blocking: bool,
    ) -> Result<ChatResult, ClientError> {
        self.calls.lock().unwrap().push(RecordedCall {
            messages,
            stop,
            options,
            blocking,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("MockChatModel has no queued response")
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn agenerate(
        &self,
        messages: Vec<request::Message>,
        stop: Option<Vec<String>>,
        options: GenerateOptions,
    ) -> Result<ChatResult, ClientError> {
        self.next_response(messages, stop, options, false)
    }

    fn generate(
        &self,
        messages: Vec<request::Message>,
        stop: Option<Vec<String>>,
        options: GenerateOptions,
    ) -> Result<ChatResult, ClientError> {
        self.next_response(messages, stop, options, true)
    }
}

pub struct InMemoryConfigLoader {
    config: ClientConfig,
}

impl InMemoryConfigLoader {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl ConfigLoader for InMemoryConfigLoader {
    fn load_config(&self) -> Result<ClientConfig, ClientError> {
        Ok(self.config.clone())
    }
}
