use crate::core::decode::DecodeError;
use crate::services::TransportError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Why a result was degraded instead of coming from the model
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Degradation {
    #[error("no API key configured")]
    MissingCredential,

    #[error("transport failure: {message}")]
    Transport { message: String },

    #[error("provider returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("request timed out")]
    Timeout {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        after_ms: Option<u64>,
    },

    #[error("empty reply")]
    EmptyResponse,

    #[error("reply is not JSON: {message}")]
    MalformedJson { message: String },

    #[error("reply does not match schema: {message}")]
    SchemaMismatch { message: String },
}

impl Degradation {
    pub fn timeout(after: Duration) -> Self {
        Self::Timeout {
            after_ms: Some(u64::try_from(after.as_millis()).unwrap_or(u64::MAX)),
        }
    }
}

impl From<TransportError> for Degradation {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::MissingCredential => Self::MissingCredential,
            TransportError::ApiError { status, message } => Self::Status { status, message },
            TransportError::RequestError(e) if e.is_timeout() => Self::Timeout { after_ms: None },
            TransportError::RequestError(e) => Self::Transport { message: e.to_string() },
            TransportError::InvalidResponse(message) => Self::SchemaMismatch { message },
        }
    }
}

impl From<DecodeError> for Degradation {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::MalformedJson(e) => Self::MalformedJson { message: e.to_string() },
            DecodeError::SchemaMismatch(message) => Self::SchemaMismatch { message },
        }
    }
}

/// A result that is always usable, plus the reason it was degraded if it was
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub value: T,
    pub degraded: Option<Degradation>,
}

impl<T> Outcome<T> {
    pub fn fresh(value: T) -> Self {
        Self { value, degraded: None }
    }

    pub fn degraded(value: T, reason: Degradation) -> Self {
        Self {
            value,
            degraded: Some(reason),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_classify() {
        assert_eq!(
            Degradation::from(TransportError::MissingCredential),
            Degradation::MissingCredential
        );
        assert_eq!(
            Degradation::from(TransportError::ApiError {
                status: 429,
                message: "quota".to_string()
            }),
            Degradation::Status {
                status: 429,
                message: "quota".to_string()
            }
        );
    }

    #[test]
    fn test_decode_errors_classify() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(
            Degradation::from(DecodeError::MalformedJson(json_err)),
            Degradation::MalformedJson { .. }
        ));
    }

    #[test]
    fn test_degradation_wire_shape() {
        let json = serde_json::to_value(Degradation::timeout(Duration::from_secs(2))).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "timeout", "after_ms": 2000}));
    }

    #[test]
    fn test_timeout_saturates_huge_durations() {
        assert_eq!(
            Degradation::timeout(Duration::MAX),
            Degradation::Timeout { after_ms: Some(u64::MAX) }
        );
    }

    #[test]
    fn test_outcome_helpers() {
        let fresh = Outcome::fresh(1);
        assert!(!fresh.is_degraded());

        let degraded = Outcome::degraded(2, Degradation::EmptyResponse);
        assert!(degraded.is_degraded());
        assert_eq!(degraded.into_value(), 2);
    }
}
