//! Endpoint configuration (env file > process environment > defaults).

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ChatError, Result};

pub const API_KEY_VAR: &str = "SOONERAI_API_KEY";
pub const BASE_URL_VAR: &str = "SOONERAI_BASE_URL";
pub const MODEL_VAR: &str = "SOONERAI_MODEL";

pub const DEFAULT_BASE_URL: &str = "https://ai.sooners.us";
pub const DEFAULT_MODEL: &str = "gemma3:4b";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

const ENV_FILE_NAME: &str = ".soonerai.env";

/// Immutable connection settings, built once at startup.
#[derive(Clone)]
pub struct ChatConfig {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatConfig")
            .field("api_key", &"..")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ChatConfig {
    /// Config with the default endpoint and model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `~/.soonerai.env`, or a relative fallback when no home directory is known.
    pub fn default_env_file() -> PathBuf {
        directories::UserDirs::new()
            .map(|dirs| dirs.home_dir().join(ENV_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(ENV_FILE_NAME))
    }

    /// Load the env file (if present) into the process environment, then read
    /// the `SOONERAI_*` variables. Existing variables are never overridden.
    pub fn load(env_file: Option<&Path>) -> Result<Self> {
        let path = env_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_env_file);
        match dotenvy::from_path(&path) {
            Ok(()) => tracing::debug!(path = %path.display(), "loaded env file"),
            Err(err) if err.not_found() => {
                tracing::debug!(path = %path.display(), "no env file")
            }
            Err(err) => {
                return Err(ChatError::Configuration(format!(
                    "Failed to read {}: {err}",
                    path.display()
                )))
            }
        }
        Self::read_env(&path)
    }

    /// Read configuration from process environment variables only.
    pub fn from_env() -> Result<Self> {
        Self::read_env(&Self::default_env_file())
    }

    /// `env_file` is only named in the error when the API key is missing.
    fn read_env(env_file: &Path) -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ChatError::MissingCredential {
                env_file: env_file.to_path_buf(),
            })?;

        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var(BASE_URL_VAR) {
            config = config.with_base_url(url);
        }
        if let Ok(model) = std::env::var(MODEL_VAR) {
            config = config.with_model(model);
        }
        Ok(config)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Chat completions endpoint under the configured base URL.
    pub fn chat_url(&self) -> String {
        format!("{}/api/chat/completions", self.base_url)
    }
}
