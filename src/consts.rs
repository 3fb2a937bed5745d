pub const DEEPSEEK_DOMAIN_MARKER: &str = "deepseek.com";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const CONFIG_FILE_ENV: &str = "MODEL_FACTORY_CONFIG_FILE";
pub const DEFAULT_CONFIG_FILE: &str = "./config.json";

pub(crate) const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
pub(crate) const TOOL_CALLS_KEY: &str = "tool_calls";

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub(crate) const RETRY_INITIAL_BACKOFF_MS: u64 = 500;
pub(crate) const RETRY_MAX_BACKOFF_MS: u64 = 8_000;
pub(crate) const RETRY_BACKOFF_MULTIPLIER: f64 = 2.0;
pub(crate) const RETRY_RANDOMIZATION_FACTOR: f64 = 0.5;
