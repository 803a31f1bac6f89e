use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{Matcher, ShareCard};
use crate::models::{ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse};
use crate::services::Catalog;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matcher: Matcher,
    pub default_limit: u16,
    pub max_limit: u16,
    pub og_image_endpoint: String,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        festivals: state.catalog.len(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "answers": {
///     "genres": ["House"],
///     "budget": { "min": 100, "max": 400 },
///     "months": ["July"],
///     "region": "Europe",
///     "vibes": ["Beach"],
///     "duration": "weekend",
///     "camping": true
///   },
///   "limit": 10
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = req
        .limit
        .unwrap_or(state.default_limit)
        .min(state.max_limit) as usize;

    let result = state
        .matcher
        .find_matches(&req.answers, state.catalog.festivals(), limit);

    let share_image_url = result
        .matches
        .first()
        .map(|top| ShareCard::from_match(top).image_url(&state.og_image_endpoint));

    tracing::info!(
        "Returning {} matches (from {} ranked, {} excluded)",
        result.matches.len(),
        result.total_results,
        result.excluded
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        matches: result.matches,
        total_results: result.total_results,
        catalog_size: result.total_candidates,
        excluded: result.excluded,
        share_image_url,
    })
}
