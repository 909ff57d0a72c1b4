use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::UserProfile;

/// Request to rank partners or synthesize a learning path
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CandidatesRequest {
    #[validate(custom(function = "validate_current_user"))]
    #[serde(alias = "current_user", rename = "currentUser")]
    pub current_user: UserProfile,
    #[serde(default)]
    pub pool: Vec<UserProfile>,
}

/// Request to rewrite a profile bio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImproveBioRequest {
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

fn validate_current_user(user: &UserProfile) -> Result<(), ValidationError> {
    if user.id.trim().is_empty() {
        return Err(ValidationError::new("empty_user_id"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_blank_current_user_id() {
        let req: CandidatesRequest = serde_json::from_str(
            r#"{"currentUser": {"id": " ", "name": "Nobody"}, "pool": []}"#,
        )
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_pool_defaults_to_empty() {
        let req: CandidatesRequest =
            serde_json::from_str(r#"{"currentUser": {"id": "1", "name": "Alex"}}"#).unwrap();

        assert!(req.validate().is_ok());
        assert!(req.pool.is_empty());
    }
}
