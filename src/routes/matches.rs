use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::Matcher;
use crate::models::{
    CandidatesRequest, DashboardResponse, ErrorResponse, HealthResponse, ImproveBioRequest,
    ImproveBioResponse, LearningPathResponse, RankCandidatesResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_candidates))
        .route("/matches/path", web::post().to(synthesize_path))
        .route("/matches/dashboard", web::post().to(dashboard))
        .route("/profile/bio", web::post().to(improve_bio));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.matcher.model().to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Rank skill-swap partners
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "currentUser": { "id": "1", "name": "...", "offeredSkills": [...], "desiredSkills": [...] },
///   "pool": [ { "id": "2", ... } ]
/// }
/// ```
///
/// Always answers 200 once validated; `degraded` says whether the neutral
/// fallback ranking was used.
async fn rank_candidates(
    state: web::Data<AppState>,
    req: web::Json<CandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return validation_failed(errors);
    }

    tracing::info!(
        "Ranking {} candidates for user {}",
        req.pool.len(),
        req.current_user.id
    );

    let outcome = state
        .matcher
        .rank_candidates_outcome(&req.current_user, &req.pool)
        .await;

    HttpResponse::Ok().json(RankCandidatesResponse {
        matches: outcome.value,
        degraded: outcome.degraded,
    })
}

/// Draft a learning path
///
/// POST /api/v1/matches/path
///
/// Same body as `/matches/rank`. On failure `steps` is empty and `degraded`
/// is set.
async fn synthesize_path(
    state: web::Data<AppState>,
    req: web::Json<CandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let outcome = state
        .matcher
        .synthesize_path_outcome(&req.current_user, &req.pool)
        .await;

    HttpResponse::Ok().json(LearningPathResponse {
        steps: outcome.value,
        degraded: outcome.degraded,
    })
}

/// Ranking and learning path in one round-trip
///
/// POST /api/v1/matches/dashboard
async fn dashboard(
    state: web::Data<AppState>,
    req: web::Json<CandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let insights = state
        .matcher
        .dashboard_insights(&req.current_user, &req.pool)
        .await;

    HttpResponse::Ok().json(DashboardResponse {
        matches: insights.matches.value,
        matches_degraded: insights.matches.degraded,
        steps: insights.path.value,
        steps_degraded: insights.path.degraded,
    })
}

/// Rewrite a profile bio
///
/// POST /api/v1/profile/bio
///
/// Request body:
/// ```json
/// { "bio": "string", "skills": ["string"] }
/// ```
async fn improve_bio(
    state: web::Data<AppState>,
    req: web::Json<ImproveBioRequest>,
) -> impl Responder {
    let outcome = state.matcher.improve_bio_outcome(&req.bio, &req.skills).await;

    HttpResponse::Ok().json(ImproveBioResponse {
        bio: outcome.value,
        degraded: outcome.degraded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Degradation, FALLBACK_SCORE};
    use crate::services::{GenerationRequest, GenerativeTransport, TransportError};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Arc;

    struct OfflineTransport;

    #[async_trait]
    impl GenerativeTransport for OfflineTransport {
        fn model(&self) -> &str {
            "offline"
        }

        async fn generate(&self, _request: &GenerationRequest) -> Result<String, TransportError> {
            Err(TransportError::MissingCredential)
        }
    }

    fn state() -> AppState {
        AppState {
            matcher: Matcher::with_default_timeout(Arc::new(OfflineTransport)),
        }
    }

    #[actix_web::test]
    async fn test_health_reports_model() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.status, "healthy");
        assert_eq!(body.model, "offline");
    }

    #[actix_web::test]
    async fn test_rank_degrades_with_reason() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/matches/rank")
            .set_json(json!({
                "currentUser": {"id": "1", "name": "Alex"},
                "pool": [{"id": "1", "name": "Alex"}, {"id": "2", "name": "Sarah"}]
            }))
            .to_request();
        let body: RankCandidatesResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.matches.len(), 1);
        assert_eq!(body.matches[0].user.id, "2");
        assert_eq!(body.matches[0].match_score, FALLBACK_SCORE);
        assert_eq!(body.degraded, Some(Degradation::MissingCredential));
    }

    #[actix_web::test]
    async fn test_rank_returns_full_profile_of_match() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let sarah = json!({
            "id": "2",
            "name": "Sarah",
            "githubUrl": "https://github.com/sarah",
            "isAmbassador": true,
            "education": [{"institution": "Design Academy", "degree": "BA", "year": "2023"}],
            "portfolio": [{"title": "Design system", "description": "Tokens and components"}]
        });
        let req = test::TestRequest::post()
            .uri("/matches/rank")
            .set_json(json!({"currentUser": {"id": "1", "name": "Alex"}, "pool": [sarah.clone()]}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let user = &body["matches"][0]["user"];
        assert_eq!(user["githubUrl"], sarah["githubUrl"]);
        assert_eq!(user["isAmbassador"], true);
        assert_eq!(user["education"], sarah["education"]);
        assert_eq!(user["portfolio"], sarah["portfolio"]);
    }

    #[actix_web::test]
    async fn test_rank_rejects_blank_user() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/matches/rank")
            .set_json(json!({"currentUser": {"id": "", "name": "?"}, "pool": []}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_bio_echoes_on_failure() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/profile/bio")
            .set_json(json!({"bio": "X", "skills": ["a"]}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["bio"], "X");
        assert_eq!(body["degraded"]["kind"], "missing_credential");
    }
}
