use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::gemini::{GeneratorError, TextGenerator};

/// Deterministic in-process generator for tests and offline runs.
/// Records how many times `generate` was invoked so callers can
/// assert that validation short-circuits before any backend call.
pub struct StubGenerator {
    reply_text: Option<String>,
    error_message: Option<String>,
    calls: AtomicUsize,
}

impl StubGenerator {
    /// Stub that always answers with the given text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            reply_text: Some(text.into()),
            error_message: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Stub that always fails with an upstream error carrying the
    /// given message.
    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            reply_text: None,
            error_message: Some(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `generate` invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.error_message {
            return Err(GeneratorError::Upstream {
                status: 400,
                message: message.clone(),
            });
        }

        Ok(self
            .reply_text
            .clone()
            .unwrap_or_else(|| "stub generation".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_counts_calls() {
        let stub = StubGenerator::with_text("hello");
        assert_eq!(stub.calls(), 0);

        assert_eq!(stub.generate("p").await.unwrap(), "hello");
        assert_eq!(stub.generate("p").await.unwrap(), "hello");
        assert_eq!(stub.calls(), 2);
    }

    #[tokio::test]
    async fn test_stub_error_carries_message() {
        let stub = StubGenerator::with_error("API key not valid");
        let err = stub.generate("p").await.unwrap_err();
        assert!(err.is_credential_error());
        assert_eq!(stub.calls(), 1);
    }
}
