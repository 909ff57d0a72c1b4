use serde::{Deserialize, Serialize};
use crate::core::Degradation;
use crate::models::domain::{LearningPathStep, SkillMatch};

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankCandidatesResponse {
    pub matches: Vec<SkillMatch>,
    /// Why the neutral fallback was used, if it was
    pub degraded: Option<Degradation>,
}

/// Response for the learning path endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPathResponse {
    pub steps: Vec<LearningPathStep>,
    pub degraded: Option<Degradation>,
}

/// Combined dashboard response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub matches: Vec<SkillMatch>,
    #[serde(rename = "matchesDegraded")]
    pub matches_degraded: Option<Degradation>,
    pub steps: Vec<LearningPathStep>,
    #[serde(rename = "stepsDegraded")]
    pub steps_degraded: Option<Degradation>,
}

/// Response for the bio endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImproveBioResponse {
    pub bio: String,
    pub degraded: Option<Degradation>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
