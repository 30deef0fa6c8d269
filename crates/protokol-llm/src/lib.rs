//! Protokol LLM Provider Layer
//!
//! Pluggable LLM provider implementations for transcript extraction.
//!
//! # Architecture
//!
//! This crate defines the `LlmProvider` trait and its implementations.
//! The extraction layer is generic over a provider so it can run against
//! the hosted Gemini API in production and a deterministic mock in tests.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GeminiProvider`: Google Generative Language API integration
//!
//! # Examples
//!
//! ```
//! use protokol_llm::{LlmProvider, MockProvider};
//!
//! # async fn example() {
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = provider.generate("test prompt").await.unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::GeminiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the model API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Provider could not be constructed
    #[error("Provider initialization failed: {0}")]
    Init(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Trait for LLM provider operations
///
/// The extraction layer only needs one capability: send a prompt, get the
/// model's text back. Providers own credentials and transport details.
#[allow(async_fn_in_trait)]
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a text completion for the given prompt
    async fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Responses can be keyed by the exact prompt or by a substring of it,
/// which is how tests target one extraction routine out of several that
/// share the same transcript text.
///
/// # Examples
///
/// ```
/// use protokol_llm::{LlmProvider, MockProvider};
///
/// # async fn example() {
/// let mut provider = MockProvider::new("default");
/// provider.add_response_containing("bill discussions", "[]");
/// assert_eq!(provider.generate("extract bill discussions").await.unwrap(), "[]");
/// assert_eq!(provider.generate("something else").await.unwrap(), "default");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    contains_rules: Arc<Mutex<Vec<(String, Option<String>)>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            contains_rules: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for an exact prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), response.into());
    }

    /// Add a response for any prompt containing the given substring
    pub fn add_response_containing(
        &mut self,
        needle: impl Into<String>,
        response: impl Into<String>,
    ) {
        self.contains_rules
            .lock()
            .unwrap()
            .push((needle.into(), Some(response.into())));
    }

    /// Return an error for any prompt containing the given substring
    pub fn add_error_containing(&mut self, needle: impl Into<String>) {
        self.contains_rules
            .lock()
            .unwrap()
            .push((needle.into(), None));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProvider for MockProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(response) = self.responses.lock().unwrap().get(prompt) {
            return Ok(response.clone());
        }

        for (needle, response) in self.contains_rules.lock().unwrap().iter() {
            if prompt.contains(needle.as_str()) {
                return match response {
                    Some(r) => Ok(r.clone()),
                    None => Err(LlmError::Other("Mock error".to_string())),
                };
            }
        }

        Ok(self.default_response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate("any prompt").await;
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.generate("hello").await.unwrap(), "world");
        assert_eq!(provider.generate("foo").await.unwrap(), "bar");
        assert_eq!(
            provider.generate("unknown").await.unwrap(),
            "Default mock response"
        );
    }

    #[tokio::test]
    async fn test_mock_provider_contains_rules() {
        let mut provider = MockProvider::new("fallback");
        provider.add_response_containing("committee", "[1]");
        provider.add_error_containing("amendments");

        assert_eq!(
            provider.generate("extract committee decisions").await.unwrap(),
            "[1]"
        );
        assert!(provider.generate("extract amendments now").await.is_err());
        assert_eq!(provider.generate("other").await.unwrap(), "fallback");
    }

    #[tokio::test]
    async fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");
        assert_eq!(provider.call_count(), 0);

        provider.generate("prompt1").await.unwrap();
        assert_eq!(provider.call_count(), 1);

        provider.generate("prompt2").await.unwrap();
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate("test").await.unwrap();

        // Both share the same call count due to Arc
        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
