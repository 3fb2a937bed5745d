use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::consts;
use crate::errors::ClientError;

#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub model: String,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub max_retries: u32,
    // Request timeout in seconds.
    pub timeout: u64,
    pub verbose: bool,
}

impl ClientConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            base_url: None,
            api_key: None,
            max_retries: consts::DEFAULT_MAX_RETRIES,
            timeout: consts::DEFAULT_TIMEOUT_SECS,
            verbose: false,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("max_retries", &self.max_retries)
            .field("timeout", &self.timeout)
            .field("verbose", &self.verbose)
            .finish()
    }
}

fn default_max_retries() -> u32 {
    consts::DEFAULT_MAX_RETRIES
}

fn default_timeout() -> u64 {
    consts::DEFAULT_TIMEOUT_SECS
}

// On-disk form. The key itself never lives in the file, only the name of
// the environment variable holding it.
#[derive(Debug, Deserialize)]
struct FileConfig {
    model: String,
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    api_key_env: Option<String>,
    #[serde(default = "default_max_retries")]
    max_retries: u32,
    #[serde(default = "default_timeout")]
    timeout: u64,
    #[serde(default)]
    verbose: bool,
}

impl From<FileConfig> for ClientConfig {
    fn from(file: FileConfig) -> Self {
        ClientConfig {
            model: file.model,
            base_url: file.base_url,
            api_key: file.api_key_env.and_then(|name| std::env::var(name).ok()),
            max_retries: file.max_retries,
            timeout: file.timeout,
            verbose: file.verbose,
        }
    }
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<ClientConfig, ClientError>;
}

pub struct FileConfigLoader {
    path: PathBuf,
}

impl FileConfigLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    // `.env` first, so the path variable may come from there.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let path = std::env::var(consts::CONFIG_FILE_ENV)
            .unwrap_or_else(|_| consts::DEFAULT_CONFIG_FILE.to_string());
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load_config(&self) -> Result<ClientConfig, ClientError> {
        let config_str = std::fs::read_to_string(&self.path)
            .map_err(|e| ClientError::ConfigError(format!("{}: {}", self.path.display(), e)))?;
        let file: FileConfig = serde_json::from_str(&config_str)
            .map_err(|e| ClientError::ConfigError(format!("{}: {}", self.path.display(), e)))?;

        Ok(file.into())
    }
}

pub fn load_config() -> Result<ClientConfig, ClientError> {
    let loader = FileConfigLoader::from_env();
    loader.load_config()
}
