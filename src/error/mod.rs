//! Error types for the chat client.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Primary error type for all chat operations.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error(
        "Missing SOONERAI_API_KEY. Create {} with:\n\
         SOONERAI_API_KEY=your_key_here\n\
         SOONERAI_BASE_URL=https://ai.sooners.us\n\
         SOONERAI_MODEL=gemma3:4b",
        .env_file.display()
    )]
    MissingCredential { env_file: PathBuf },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Network error calling {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Unexpected API response: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChatError {
    /// Create an API error from a non-success status and its body text.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_renders_status_and_body() {
        let err = ChatError::api(503, "upstream unavailable");
        assert_eq!(err.to_string(), "Error 503: upstream unavailable");
    }

    #[test]
    fn missing_credential_names_the_env_file() {
        let err = ChatError::MissingCredential {
            env_file: PathBuf::from("/etc/chat/custom.env"),
        };
        let text = err.to_string();
        assert!(text.starts_with("Missing SOONERAI_API_KEY. Create /etc/chat/custom.env with:\n"));
        assert!(text.contains("SOONERAI_API_KEY=your_key_here"));
        assert!(text.contains("SOONERAI_MODEL=gemma3:4b"));
    }

    #[test]
    fn timeout_keeps_sub_second_precision() {
        assert_eq!(
            ChatError::Timeout(Duration::from_millis(200)).to_string(),
            "Timeout after 200ms"
        );
        assert_eq!(
            ChatError::Timeout(Duration::from_secs(90)).to_string(),
            "Timeout after 90s"
        );
    }
}
