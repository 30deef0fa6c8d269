//! Gemini Provider Implementation
//!
//! Integration with Google's Generative Language API (hosted Gemini models).
//!
//! The caller of this tool is a batch pipeline that treats every failure as a
//! value in its JSON output, so this provider makes exactly one request per
//! prompt: no retries, no backoff, no client-side timeout. An unresponsive
//! service blocks the invocation until the remote side gives up.
//!
//! # Examples
//!
//! ```no_run
//! use protokol_llm::GeminiProvider;
//!
//! let provider = GeminiProvider::new("api-key").unwrap();
//! // provider.generate(prompt).await sends one generateContent request
//! ```

use crate::{LlmError, LlmProvider};
use serde::{Deserialize, Serialize};

/// Default Generative Language API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Sampling temperature; low for consistent structured output
const TEMPERATURE: f64 = 0.1;

/// Hosted Gemini API provider
pub struct GeminiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

/// Request body for the generateContent API
#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

/// Response from the generateContent API
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiProvider {
    /// Create a new Gemini provider with the default endpoint and model
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Init` if the HTTP client cannot be constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| LlmError::Init(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Override the API endpoint (used by tests against a local server)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// The model identifier this provider sends requests to
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text using the Gemini API
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Network communication fails
    /// - The API returns a non-success status (quota, auth, bad request)
    /// - The response body cannot be parsed or contains no candidates
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        );

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let candidate = body
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("No candidates in response".to_string()))?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect();

        if text.is_empty() {
            return Err(LlmError::InvalidResponse(
                "Candidate contained no text parts".to_string(),
            ));
        }

        Ok(text)
    }
}

impl LlmProvider for GeminiProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        GeminiProvider::generate(self, prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_provider_creation() {
        let provider = GeminiProvider::new("test-key").unwrap();
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(provider.model(), DEFAULT_MODEL);
    }

    #[test]
    fn test_gemini_provider_overrides() {
        let provider = GeminiProvider::new("test-key")
            .unwrap()
            .with_endpoint("http://localhost:8080")
            .with_model("gemini-1.5-pro");
        assert_eq!(provider.endpoint, "http://localhost:8080");
        assert_eq!(provider.model(), "gemini-1.5-pro");
    }

    #[tokio::test]
    async fn test_gemini_error_handling() {
        // Unroutable local endpoint triggers a communication error
        let provider = GeminiProvider::new("test-key")
            .unwrap()
            .with_endpoint("http://127.0.0.1:9");

        let result = provider.generate("test").await;
        match result {
            Err(LlmError::Communication(_)) => {}
            other => panic!("Expected Communication error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "hello".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert!(json["generationConfig"]["temperature"].is_number());
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "first "}, {"text": "second"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(body).unwrap();
        let text: String = parsed.candidates[0]
            .content
            .parts
            .iter()
            .map(|p| p.text.clone())
            .collect();
        assert_eq!(text, "first second");
    }

    #[test]
    fn test_response_without_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
