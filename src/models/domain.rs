use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Self-assessed proficiency attached to an offered skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// A skill a user offers to teach
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    /// Free-text grouping such as "Software Development"
    pub category: String,
    #[serde(rename = "isVerified", default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endorsements: Option<u32>,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: SkillLevel, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            category: category.into(),
            is_verified: None,
            endorsements: None,
        }
    }

    /// Helper to get is_verified as a bool, defaulting to false
    pub fn verified(&self) -> bool {
        self.is_verified.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProfileStatus {
    #[default]
    Student,
    Professional,
}

/// Where the profile was imported from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProfileSource {
    LinkedIn,
    GitHub,
    Discord,
    Instagram,
    #[default]
    #[serde(rename = "SkillSwap Native")]
    SkillSwapNative,
}

/// Snapshot of a SkillSwap member as supplied by the UI shell
///
/// Desired skills are plain names rather than full [`Skill`] records: they are
/// neither leveled nor verified yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub university: String,
    #[serde(rename = "graduationYear", default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<String>,
    #[serde(default)]
    pub status: ProfileStatus,
    #[serde(default)]
    pub source: ProfileSource,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(rename = "offeredSkills", default)]
    pub offered_skills: Vec<Skill>,
    #[serde(rename = "desiredSkills", default)]
    pub desired_skills: Vec<String>,
    #[serde(default)]
    pub credits: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(rename = "totalSwaps", default)]
    pub total_swaps: u32,
    /// Everything else the UI keeps on a profile (portfolio, education,
    /// activity history, ...). Never read here, but returned untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Names of the skills this user offers, in profile order
    pub fn offered_skill_names(&self) -> Vec<String> {
        self.offered_skills.iter().map(|s| s.name.clone()).collect()
    }
}

/// A ranked skill-swap partner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub user: UserProfile,
    /// 0-100 compatibility, from the model or the neutral fallback
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "matchReason")]
    pub match_reason: String,
    #[serde(rename = "commonGround")]
    pub common_ground: Vec<String>,
}

/// One sub-goal of a learning path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPathStep {
    pub title: String,
    pub description: String,
    /// Pool member suggested as mentor. Not validated against the pool.
    #[serde(rename = "suggestedUserId", default, skip_serializing_if = "Option::is_none")]
    pub suggested_user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserializes_ui_shape() {
        let json = r#"{
            "id": "1",
            "name": "Alex Rivera",
            "major": "Computer Science",
            "university": "Tech State University",
            "graduationYear": "2024",
            "status": "Student",
            "source": "GitHub",
            "offeredSkills": [
                {"name": "React", "level": "Advanced", "category": "Software Development", "isVerified": true, "endorsements": 12}
            ],
            "desiredSkills": ["Figma"],
            "credits": 12,
            "rating": 4.8,
            "totalSwaps": 15
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.id, "1");
        assert_eq!(profile.source, ProfileSource::GitHub);
        assert_eq!(profile.offered_skills[0].level, SkillLevel::Advanced);
        assert!(profile.offered_skills[0].verified());
        assert_eq!(profile.offered_skills[0].endorsements, Some(12));
        assert_eq!(profile.desired_skills, vec!["Figma"]);
        assert_eq!(profile.offered_skill_names(), vec!["React"]);
    }

    #[test]
    fn test_unmodelled_fields_round_trip() {
        let json = serde_json::json!({
            "id": "2",
            "name": "Sarah Chen",
            "githubUrl": "https://github.com/sarah",
            "isAmbassador": true,
            "portfolio": [{"title": "Design system", "description": "Tokens and components"}]
        });

        let profile: UserProfile = serde_json::from_value(json.clone()).unwrap();
        let back = serde_json::to_value(&profile).unwrap();

        assert_eq!(profile.extra.len(), 3);
        assert_eq!(back["githubUrl"], json["githubUrl"]);
        assert_eq!(back["isAmbassador"], true);
        assert_eq!(back["portfolio"], json["portfolio"]);
    }

    #[test]
    fn test_native_source_wire_name() {
        let source: ProfileSource = serde_json::from_str(r#""SkillSwap Native""#).unwrap();
        assert_eq!(source, ProfileSource::SkillSwapNative);
    }

    #[test]
    fn test_step_without_mentor() {
        let step: LearningPathStep =
            serde_json::from_str(r#"{"title": "Basics", "description": "Learn frames"}"#).unwrap();
        assert!(step.suggested_user_id.is_none());
    }
}
