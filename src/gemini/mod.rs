pub mod client;
pub mod stub;

pub use client::GeminiClient;
pub use stub::StubGenerator;

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by a text generation backend.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("upstream status {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("invalid response from generation backend")]
    InvalidResponse,
}

impl GeneratorError {
    /// Whether the upstream rejected the configured API key.
    pub fn is_credential_error(&self) -> bool {
        let text = self.to_string();
        text.contains("API key not valid") || text.contains("API key is invalid")
    }
}

/// Narrow seam over a generative text backend so handlers can be
/// exercised with a deterministic stand-in.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_error_detection() {
        let err = GeneratorError::Upstream {
            status: 400,
            message: "API key not valid. Please pass a valid API key.".to_string(),
        };
        assert!(err.is_credential_error());

        let err = GeneratorError::Upstream {
            status: 401,
            message: "API key is invalid".to_string(),
        };
        assert!(err.is_credential_error());

        let err = GeneratorError::Upstream {
            status: 500,
            message: "backend exploded".to_string(),
        };
        assert!(!err.is_credential_error());

        assert!(!GeneratorError::InvalidResponse.is_credential_error());
    }
}
