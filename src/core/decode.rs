use crate::models::{LearningPathStep, SkillMatch, UserProfile};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors raised when a model reply does not honour the requested schema
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Response is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Response does not match schema: {0}")]
    SchemaMismatch(String),
}

/// One ranking record as returned by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub score: f64,
    pub reason: String,
    #[serde(rename = "commonGround")]
    pub common_ground: Vec<String>,
}

/// A blank reply reads as `[]`: the model had nothing to return.
fn parse_array(text: &str) -> Result<Value, DecodeError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Value::Array(Vec::new()));
    }

    let value: Value = serde_json::from_str(text)?;
    if !value.is_array() {
        return Err(DecodeError::SchemaMismatch("expected a top-level array".into()));
    }
    Ok(value)
}

/// Strictly decode a ranking reply
///
/// Either every record is well formed or the whole reply is rejected. Scores
/// must be finite and within 0-100.
pub fn decode_match_records(text: &str) -> Result<Vec<MatchRecord>, DecodeError> {
    let value = parse_array(text)?;

    let records: Vec<MatchRecord> = serde_json::from_value(value)
        .map_err(|e| DecodeError::SchemaMismatch(e.to_string()))?;

    if let Some(bad) = records
        .iter()
        .find(|r| !r.score.is_finite() || !(0.0..=100.0).contains(&r.score))
    {
        return Err(DecodeError::SchemaMismatch(format!(
            "score {} for user {} is outside 0-100",
            bad.score, bad.user_id
        )));
    }

    Ok(records)
}

/// Strictly decode a learning path reply
///
/// A blank `suggestedUserId` is treated as absent.
pub fn decode_path_steps(text: &str) -> Result<Vec<LearningPathStep>, DecodeError> {
    let value = parse_array(text)?;

    let mut steps: Vec<LearningPathStep> = serde_json::from_value(value)
        .map_err(|e| DecodeError::SchemaMismatch(e.to_string()))?;

    for step in &mut steps {
        if step.suggested_user_id.as_deref().is_some_and(|id| id.trim().is_empty()) {
            step.suggested_user_id = None;
        }
    }

    Ok(steps)
}

/// Map decoded records back onto pool members
///
/// Records whose id is not in the pool are dropped, as are repeats of an id
/// already emitted. Reply order is kept.
pub fn resolve_matches(records: Vec<MatchRecord>, pool: &[UserProfile]) -> Vec<SkillMatch> {
    let by_id: HashMap<&str, &UserProfile> = pool.iter().map(|p| (p.id.as_str(), p)).collect();
    let mut emitted: HashSet<String> = HashSet::with_capacity(records.len());
    let mut matches = Vec::with_capacity(records.len());

    for record in records {
        let Some(user) = by_id.get(record.user_id.as_str()) else {
            tracing::debug!("Dropping match for unknown user {}", record.user_id);
            continue;
        };

        if !emitted.insert(record.user_id.clone()) {
            tracing::debug!("Dropping repeated match for user {}", record.user_id);
            continue;
        }

        matches.push(SkillMatch {
            user: (*user).clone(),
            match_score: record.score,
            match_reason: record.reason,
            common_ground: record.common_ground,
        });
    }

    matches
}
