use crate::core::{
    decode::{decode_match_records, decode_path_steps, resolve_matches},
    fallback::fallback_rank,
    outcome::{Degradation, Outcome},
    pool::prepare_pool,
    prompts::{bio_request, match_request, path_request},
};
use crate::models::{LearningPathStep, SkillMatch, UserProfile};
use crate::services::{GenerationRequest, GenerativeTransport};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Ranking and learning path results fetched together for the dashboard
#[derive(Debug, Clone)]
pub struct DashboardInsights {
    pub matches: Outcome<Vec<SkillMatch>>,
    pub path: Outcome<Vec<LearningPathStep>>,
}

/// Skill-swap matching orchestrator
///
/// Every operation is a single request/decode pipeline that degrades instead of
/// failing:
/// 1. Exclude the current user from the pool
/// 2. Build prompt and response schema
/// 3. Call the generative backend, bounded by `request_timeout`
/// 4. Strictly decode the reply and resolve ids against the pool
///
/// Any failure in steps 3-4 yields the operation's fallback value and a
/// [`Degradation`] describing why.
#[derive(Clone)]
pub struct Matcher {
    transport: Arc<dyn GenerativeTransport>,
    request_timeout: Duration,
}

impl Matcher {
    pub fn new(transport: Arc<dyn GenerativeTransport>, request_timeout: Duration) -> Self {
        Self {
            transport,
            request_timeout,
        }
    }

    pub fn with_default_timeout(transport: Arc<dyn GenerativeTransport>) -> Self {
        Self::new(transport, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn model(&self) -> &str {
        self.transport.model()
    }

    async fn dispatch(&self, request: &GenerationRequest) -> Result<String, Degradation> {
        match tokio::time::timeout(self.request_timeout, self.transport.generate(request)).await {
            Ok(reply) => Ok(reply?),
            Err(_) => Err(Degradation::timeout(self.request_timeout)),
        }
    }

    /// Rank `pool` as skill-swap partners for `current_user`
    ///
    /// Never fails. When the model cannot be used, every candidate gets the
    /// neutral fallback ranking.
    pub async fn rank_candidates(&self, current_user: &UserProfile, pool: &[UserProfile]) -> Vec<SkillMatch> {
        self.rank_candidates_outcome(current_user, pool).await.into_value()
    }

    pub async fn rank_candidates_outcome(
        &self,
        current_user: &UserProfile,
        pool: &[UserProfile],
    ) -> Outcome<Vec<SkillMatch>> {
        let pool = prepare_pool(current_user, pool);

        if pool.is_empty() {
            debug!("No candidates for {}, skipping ranking request", current_user.id);
            return Outcome::fresh(Vec::new());
        }

        let request = match_request(current_user, &pool);
        let ranked = match self.dispatch(&request).await {
            Ok(text) => decode_match_records(&text).map_err(Degradation::from),
            Err(reason) => Err(reason),
        };

        match ranked {
            Ok(records) => {
                let returned = records.len();
                let matches = resolve_matches(records, &pool);
                info!(
                    "Ranked {} of {} candidates for user {} ({} records returned)",
                    matches.len(),
                    pool.len(),
                    current_user.id,
                    returned
                );
                Outcome::fresh(matches)
            }
            Err(reason) => {
                warn!("Ranking for user {} degraded to fallback: {}", current_user.id, reason);
                Outcome::degraded(fallback_rank(&pool), reason)
            }
        }
    }

    /// Draft an ordered learning path toward `current_user`'s desired skills
    ///
    /// Never fails. Returns no steps when the model cannot be used.
    pub async fn synthesize_path(&self, current_user: &UserProfile, pool: &[UserProfile]) -> Vec<LearningPathStep> {
        self.synthesize_path_outcome(current_user, pool).await.into_value()
    }

    pub async fn synthesize_path_outcome(
        &self,
        current_user: &UserProfile,
        pool: &[UserProfile],
    ) -> Outcome<Vec<LearningPathStep>> {
        let pool = prepare_pool(current_user, pool);
        let request = path_request(current_user, &pool);

        let steps = match self.dispatch(&request).await {
            Ok(text) => decode_path_steps(&text).map_err(Degradation::from),
            Err(reason) => Err(reason),
        };

        match steps {
            Ok(steps) => {
                info!("Synthesized {} learning path steps for user {}", steps.len(), current_user.id);
                Outcome::fresh(steps)
            }
            Err(reason) => {
                warn!("Learning path for user {} unavailable: {}", current_user.id, reason);
                Outcome::degraded(Vec::new(), reason)
            }
        }
    }

    /// Suggest a more engaging bio; returns `bio` unchanged on any failure
    pub async fn improve_bio(&self, bio: &str, skills: &[String]) -> String {
        self.improve_bio_outcome(bio, skills).await.into_value()
    }

    pub async fn improve_bio_outcome(&self, bio: &str, skills: &[String]) -> Outcome<String> {
        match self.dispatch(&bio_request(bio, skills)).await {
            Ok(text) if !text.trim().is_empty() => Outcome::fresh(text.trim().to_string()),
            Ok(_) => {
                warn!("Bio rewrite returned no text, keeping original");
                Outcome::degraded(bio.to_string(), Degradation::EmptyResponse)
            }
            Err(reason) => {
                warn!("Bio rewrite failed, keeping original: {}", reason);
                Outcome::degraded(bio.to_string(), reason)
            }
        }
    }

    /// Rank and synthesize concurrently; each half degrades on its own
    pub async fn dashboard_insights(&self, current_user: &UserProfile, pool: &[UserProfile]) -> DashboardInsights {
        let (matches, path) = tokio::join!(
            self.rank_candidates_outcome(current_user, pool),
            self.synthesize_path_outcome(current_user, pool),
        );

        DashboardInsights { matches, path }
    }
}
