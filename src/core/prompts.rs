//! Prompt text and response schemas sent to the generative model.
//!
//! Schemas use the upper-case OpenAPI subset accepted by `generateContent`.

use crate::core::pool::{MentorView, RankingView};
use crate::models::UserProfile;
use crate::services::GenerationRequest;
use serde_json::{json, Value};

/// Schema for ranking replies: one record per candidate
pub fn match_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "userId": { "type": "STRING" },
                "score": { "type": "NUMBER" },
                "reason": { "type": "STRING" },
                "commonGround": { "type": "ARRAY", "items": { "type": "STRING" } }
            },
            "required": ["userId", "score", "reason", "commonGround"]
        }
    })
}

/// Schema for learning path replies
pub fn path_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "description": { "type": "STRING" },
                "suggestedUserId": { "type": "STRING" }
            },
            "required": ["title", "description"]
        }
    })
}

/// Ranking request for an already prepared pool
///
/// Fit is bidirectional: what the candidate offers against what the current
/// user wants, and what the current user offers against what the candidate
/// wants.
pub fn match_request(current_user: &UserProfile, pool: &[UserProfile]) -> GenerationRequest {
    let offered = json!(current_user.offered_skills).to_string();
    let desired = json!(current_user.desired_skills).to_string();
    let candidates: Vec<RankingView<'_>> = pool.iter().map(RankingView::from).collect();
    let candidates = json!(candidates).to_string();

    let prompt = format!(
        r#"Analyze how well this user could swap skills with each member of a pool of potential partners.

Current User:
Offered: {offered}
Desired: {desired}

Pool:
{candidates}

Task: Rank the pool members by two-way fit: how well each member's offered skills cover the current user's desired skills, AND how well the current user's offered skills cover that member's desired skills.
For every member return its "userId", a match "score" from 0 to 100, a concise "reason" explaining why this swap is valuable, and "commonGround": a list of shared interests or overlapping technical domains."#
    );

    GenerationRequest::structured(prompt, match_schema())
}

/// Learning path request: decompose the skill gap into ordered steps
pub fn path_request(current_user: &UserProfile, pool: &[UserProfile]) -> GenerationRequest {
    let desired = json!(current_user.desired_skills).to_string();
    let offered = json!(current_user.offered_skill_names()).to_string();
    let mentors: Vec<MentorView<'_>> = pool.iter().map(MentorView::from).collect();
    let mentors = json!(mentors).to_string();

    let prompt = format!(
        r#"Design a short learning path for a student on a skill-swapping platform.

Wants to learn: {desired}
Already knows: {offered}

Available mentors:
{mentors}

Task: Break the gap between what the student knows and what they want to learn into 3 or 4 ordered steps. Give each step a short "title" and a one or two sentence "description". When a mentor's offered skills cover a step, set "suggestedUserId" to that mentor's id; otherwise leave it out."#
    );

    GenerationRequest::structured(prompt, path_schema())
}

/// Plain text bio rewrite request
pub fn bio_request(bio: &str, skills: &[String]) -> GenerationRequest {
    GenerationRequest::text(format!(
        "Suggest a more professional and engaging bio based on these skills: {}. Current bio: \"{}\"",
        skills.join(", "),
        bio
    ))
}
