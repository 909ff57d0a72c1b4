use crate::models::{Skill, UserProfile};
use serde::Serialize;
use std::collections::HashSet;

/// Build the candidate pool for a request
///
/// This is the first stage of every request: the acting user is never their
/// own candidate, and a repeated id keeps only its first occurrence. Pool
/// order is otherwise preserved.
pub fn prepare_pool(current_user: &UserProfile, pool: &[UserProfile]) -> Vec<UserProfile> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(pool.len());
    let mut prepared = Vec::with_capacity(pool.len());

    for candidate in pool {
        if candidate.id == current_user.id || !seen.insert(candidate.id.as_str()) {
            continue;
        }
        prepared.push(candidate.clone());
    }

    prepared
}

/// Candidate as shown to the model when ranking
#[derive(Debug, Serialize)]
pub struct RankingView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub offered: &'a [Skill],
    pub desired: &'a [String],
}

impl<'a> From<&'a UserProfile> for RankingView<'a> {
    fn from(profile: &'a UserProfile) -> Self {
        Self {
            id: &profile.id,
            name: &profile.name,
            offered: &profile.offered_skills,
            desired: &profile.desired_skills,
        }
    }
}

/// Reduced candidate view for learning path requests: skill names only
#[derive(Debug, Serialize)]
pub struct MentorView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub offered: Vec<&'a str>,
}

impl<'a> From<&'a UserProfile> for MentorView<'a> {
    fn from(profile: &'a UserProfile) -> Self {
        Self {
            id: &profile.id,
            name: &profile.name,
            offered: profile.offered_skills.iter().map(|s| s.name.as_str()).collect(),
        }
    }
}
