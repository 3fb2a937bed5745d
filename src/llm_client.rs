use std::time::Duration;

use async_trait::async_trait;
use backoff::ExponentialBackoff;
use backoff::ExponentialBackoffBuilder;
use backoff::backoff::Backoff;
use tokio::sync::OnceCell;

use crate::config::ClientConfig;
use crate::consts;
use crate::errors::ClientError;
use crate::llm_request::{self, GenerateOptions};
use crate::models::generation::ChatResult;
use crate::models::request;
use crate::models::response::ChatCompletion;

#[async_trait]
pub trait ChatModel: Send + Sync {
    fn model_name(&self) -> &str;

    async fn agenerate(
        &self,
        messages: Vec<request::Message>,
        stop: Option<Vec<String>>,
        options: GenerateOptions,
    ) -> Result<ChatResult, ClientError>;

    /// Blocks the calling thread until the reply arrives. Inside an async
    /// runtime this fails with `RuntimeError`; use `agenerate` there.
    fn generate(
        &self,
        messages: Vec<request::Message>,
        stop: Option<Vec<String>>,
        options: GenerateOptions,
    ) -> Result<ChatResult, ClientError> {
        let runtime = build_blocking_runtime()?;
        runtime.block_on(self.agenerate(messages, stop, options))
    }
}

pub(crate) fn build_blocking_runtime() -> Result<tokio::runtime::Runtime, ClientError> {
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(ClientError::RuntimeError(
            "blocking generate called from inside an async runtime".to_string(),
        ));
    }

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ClientError::RuntimeError(e.to_string()))
}

pub(crate) fn retry_backoff() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_initial_interval(Duration::from_millis(consts::RETRY_INITIAL_BACKOFF_MS))
        .with_max_interval(Duration::from_millis(consts::RETRY_MAX_BACKOFF_MS))
        .with_multiplier(consts::RETRY_BACKOFF_MULTIPLIER)
        .with_randomization_factor(consts::RETRY_RANDOMIZATION_FACTOR)
        .with_max_elapsed_time(None)
        .build()
}

fn check_content_type(response: &reqwest::Response) -> Result<(), ClientError> {
    let expected_content_type = mime::APPLICATION_JSON;
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let matches = content_type
        .parse::<mime::Mime>()
        .is_ok_and(|parsed| parsed.essence_str() == expected_content_type.essence_str());
    if !matches {
        return Err(ClientError::ApiError(format!(
            "content-type: {content_type}, expected: {expected_content_type}"
        )));
    }
    Ok(())
}

pub struct OpenAiChatClient {
    config: ClientConfig,
    base_url: String,
    api_key: Option<String>,
    http_client: OnceCell<reqwest::Client>,
}

impl OpenAiChatClient {
    pub fn new(config: ClientConfig) -> Self {
        let base_url = config
            .base_url
            .clone()
            .or_else(|| std::env::var(consts::BASE_URL_ENV).ok())
            .unwrap_or_else(|| consts::DEFAULT_BASE_URL.to_string());
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var(consts::API_KEY_ENV).ok());

        Self {
            config,
            base_url,
            api_key,
            http_client: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_http_client(&self) -> Result<reqwest::Client, ClientError> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.config.timeout))
            .build()
            .map_err(|e| ClientError::ConfigError(e.to_string()))
    }

    async fn http_client(&self) -> Result<&reqwest::Client, ClientError> {
        self.http_client
            .get_or_try_init(|| async { self.build_http_client() })
            .await
    }

    async fn request_chat_completion(
        &self,
        http_client: &reqwest::Client,
        request: &request::ChatCompletionCreate,
    ) -> Result<ChatCompletion, ClientError> {
        let mut builder = http_client
            .post(llm_request::chat_completions_url(&self.base_url))
            .json(request);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(ClientError::from_status(status, &text));
        }

        check_content_type(&response)?;

        let body = response.text().await?;
        let completion: ChatCompletion = serde_json::from_str(&body)?;

        Ok(completion)
    }

    async fn send_with_retries(
        &self,
        http_client: &reqwest::Client,
        request: &request::ChatCompletionCreate,
    ) -> Result<ChatCompletion, ClientError> {
        let mut backoff = retry_backoff();
        let mut attempt: u32 = 0;
        loop {
            match self.request_chat_completion(http_client, request).await {
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    let Some(delay) = backoff.next_backoff() else {
                        return Err(e);
                    };
                    log::warn!(
                        "chat completion attempt {} failed, retrying in {:?}: {}",
                        attempt + 1,
                        delay,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiChatClient {
    fn model_name(&self) -> &str {
        &self.config.model
    }

    async fn agenerate(
        &self,
        messages: Vec<request::Message>,
        stop: Option<Vec<String>>,
        options: GenerateOptions,
    ) -> Result<ChatResult, ClientError> {
        let request = llm_request::build_chat_request(&self.config.model, messages, stop, options)?;
        log::debug!("request: {:?}", request);

        let http_client = self.http_client().await?;
        let completion = self.send_with_retries(http_client, &request).await?;

        Ok(completion.into())
    }

    fn generate(
        &self,
        messages: Vec<request::Message>,
        stop: Option<Vec<String>>,
        options: GenerateOptions,
    ) -> Result<ChatResult, ClientError> {
        let request = llm_request::build_chat_request(&self.config.model, messages, stop, options)?;
        log::debug!("request: {:?}", request);

        // Pooled connections belong to the runtime that opened them, so the
        // blocking path gets its own client for the lifetime of its runtime.
        let http_client = self.build_http_client()?;
        let runtime = build_blocking_runtime()?;
        let completion = runtime.block_on(self.send_with_retries(&http_client, &request))?;

        Ok(completion.into())
    }
}
