use crate::models::{SkillMatch, UserProfile};

/// Neutral score given to every candidate when the model is unavailable
pub const FALLBACK_SCORE: f64 = 50.0;
pub const FALLBACK_REASON: &str = "Potential match based on skill categories.";
pub const FALLBACK_COMMON_GROUND: &str = "Collaborative Learning";

/// Rank a pool without the model
///
/// Total and deterministic: one neutral result per member, in pool order, no
/// filtering.
pub fn fallback_rank(pool: &[UserProfile]) -> Vec<SkillMatch> {
    pool.iter()
        .map(|user| SkillMatch {
            user: user.clone(),
            match_score: FALLBACK_SCORE,
            match_reason: FALLBACK_REASON.to_string(),
            common_ground: vec![FALLBACK_COMMON_GROUND.to_string()],
        })
        .collect()
}
