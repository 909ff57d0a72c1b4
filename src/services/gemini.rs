use crate::services::transport::{GenerationRequest, GenerativeTransport, TransportError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Gemini `generateContent` client
///
/// Handles all communication with the generative language API:
/// - Plain text prompts (bio rewriting)
/// - Structured prompts constrained by a response schema (ranking, learning paths)
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            model,
            client,
        })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    fn build_body(request: &GenerationRequest) -> Value {
        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt }]
            }]
        });

        if let Some(schema) = &request.response_schema {
            body["generationConfig"] = json!({
                "responseMimeType": "application/json",
                "responseSchema": schema,
            });
        }

        body
    }
}

#[async_trait]
impl GenerativeTransport for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, TransportError> {
        if self.api_key.trim().is_empty() {
            return Err(TransportError::MissingCredential);
        }

        let url = self.generate_url();
        tracing::debug!("Calling {} (structured: {})", url, request.response_schema.is_some());

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::build_body(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("error")
                        .and_then(|e| e.get("message"))
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                })
                .unwrap_or(body);
            tracing::error!("Gemini call failed: {} - {}", status, message);
            return Err(TransportError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let json: Value = serde_json::from_str(&body)
            .map_err(|e| TransportError::InvalidResponse(format!("Body is not JSON: {}", e)))?;

        // No candidate (e.g. a blocked prompt) means no text, not an error
        let Some(parts) = json
            .get("candidates")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.as_array())
        else {
            let block_reason = json
                .get("promptFeedback")
                .and_then(|f| f.get("blockReason"))
                .and_then(|r| r.as_str())
                .unwrap_or("none");
            tracing::warn!("Gemini returned no candidate text (block reason: {})", block_reason);
            return Ok(String::new());
        };

        let text: String = parts
            .iter()
            .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
            .collect();

        tracing::debug!("Gemini returned {} bytes of text", text.len());

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_key: &str) -> GeminiClient {
        GeminiClient::new(
            "https://gemini.test/v1beta/".to_string(),
            api_key.to_string(),
            "gemini-test".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_gemini_client_creation() {
        let client = client("test_key");

        assert_eq!(client.model(), "gemini-test");
        assert_eq!(
            client.generate_url(),
            "https://gemini.test/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_body_without_schema_has_no_generation_config() {
        let body = GeminiClient::build_body(&GenerationRequest::text("Rewrite my bio"));

        assert_eq!(body["contents"][0]["parts"][0]["text"], "Rewrite my bio");
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_body_with_schema() {
        let schema = json!({"type": "ARRAY", "items": {"type": "STRING"}});
        let body = GeminiClient::build_body(&GenerationRequest::structured("Rank", schema.clone()));

        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"], schema);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network() {
        let result = client("  ").generate(&GenerationRequest::text("hi")).await;

        assert!(matches!(result, Err(TransportError::MissingCredential)));
    }
}
