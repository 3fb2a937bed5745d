use serde_json::{Map, Value};

use crate::errors::ClientError;
use crate::models::request;

pub type GenerateOptions = Map<String, Value>;

pub(crate) fn validate_messages(messages: &[request::Message]) -> Result<(), ClientError> {
    if messages.is_empty() {
        return Err(ClientError::ValidationError(
            "error: empty messages".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn build_chat_request(
    model: &str,
    messages: Vec<request::Message>,
    stop: Option<Vec<String>>,
    options: GenerateOptions,
) -> Result<request::ChatCompletionCreate, ClientError> {
    validate_messages(&messages)?;

    let mut extra = options;
    // Options must not override what the client itself controls.
    for reserved in ["model", "messages", "stop", "stream"] {
        if extra.remove(reserved).is_some() {
            log::debug!("ignoring reserved option: {}", reserved);
        }
    }

    Ok(request::ChatCompletionCreate {
        model: model.to_string(),
        messages,
        stop,
        extra,
    })
}

pub(crate) fn chat_completions_url(base_url: &str) -> String {
    format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        crate::consts::CHAT_COMPLETIONS_PATH
    )
}
