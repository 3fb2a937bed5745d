use std::fmt;

#[derive(Debug, Clone)]
pub enum ClientError {
    ValidationError(String),
    ApiError(String),
    RateLimitError(String),
    ServerError(String),
    ParseError(String),
    ConfigError(String),
    NetworkError(String),
    RuntimeError(String),
}

impl ClientError {
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ClientError::NetworkError(_)
                | ClientError::RateLimitError(_)
                | ClientError::ServerError(_)
        )
    }

    pub(crate) fn from_status(status: reqwest::StatusCode, text: &str) -> Self {
        let msg = format!("status {status}, text {text}");
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            ClientError::RateLimitError(msg)
        } else if status.is_server_error() {
            ClientError::ServerError(msg)
        } else {
            ClientError::ApiError(msg)
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ClientError::ApiError(msg) => write!(f, "API error: {}", msg),
            ClientError::RateLimitError(msg) => write!(f, "Rate limit error: {}", msg),
            ClientError::ServerError(msg) => write!(f, "Server error: {}", msg),
            ClientError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ClientError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            ClientError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ClientError::RuntimeError(msg) => write!(f, "Runtime error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            ClientError::NetworkError(err.to_string())
        } else if err.is_decode() {
            ClientError::ParseError(err.to_string())
        } else {
            ClientError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::ParseError(err.to_string())
    }
}
