use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors a generative backend can report
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned status {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Unauthorized: missing or empty API key")]
    MissingCredential,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// A single prompt plus the shape the reply must take
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    /// When set, the backend is asked for `application/json` matching this schema
    pub response_schema: Option<Value>,
}

impl GenerationRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: None,
        }
    }

    pub fn structured(prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: Some(schema),
        }
    }
}

/// A generative-text endpoint
///
/// Returns the raw reply text. Decoding it against the requested schema is the
/// caller's job.
#[async_trait]
pub trait GenerativeTransport: Send + Sync {
    /// Model identifier, for logs and health output
    fn model(&self) -> &str;

    async fn generate(&self, request: &GenerationRequest) -> Result<String, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_constructors() {
        let plain = GenerationRequest::text("hello");
        assert!(plain.response_schema.is_none());

        let structured = GenerationRequest::structured("hello", json!({"type": "ARRAY"}));
        assert_eq!(structured.response_schema, Some(json!({"type": "ARRAY"})));
    }

    #[test]
    fn test_error_messages() {
        let err = TransportError::ApiError {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "API returned status 503: overloaded");
        assert_eq!(
            TransportError::MissingCredential.to_string(),
            "Unauthorized: missing or empty API key"
        );
    }
}
