use crate::config::SearchSettings;
use crate::core::{build_overpass_query, Recommender};
use crate::models::{
    ErrorResponse, HealthResponse, Position, RecommendRequest, RecommendResponse, UserSession,
};
use crate::services::{OverpassClient, SessionStore};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub overpass: Arc<OverpassClient>,
    pub sessions: Arc<dyn SessionStore>,
    pub recommender: Recommender,
    pub search: SearchSettings,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route(
            "/recommendations/find",
            web::post().to(find_recommendations),
        );
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find recommendations endpoint
///
/// POST /api/v1/recommendations/find
///
/// Request body:
/// ```json
/// {
///   "latitude": 25.0330,
///   "longitude": 121.5654,
///   "category": "beverage",
///   "limit": 5,
///   "userId": "string"
/// }
/// ```
///
/// When `userId` is present the stored session supplies the category if the
/// request omits one, and the request's position and category are written
/// back for the next call.
async fn find_recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    // The core assumes pre-validated positions; reject out-of-range here
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_recommendations: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let position = Position::new(req.latitude, req.longitude);
    let limit = req
        .limit
        .unwrap_or(state.search.max_results)
        .min(state.search.max_limit);

    let mut category = req.category.clone();
    if let Some(user_id) = &req.user_id {
        if category.is_none() {
            if let Some(session) = state.sessions.get(user_id).await {
                category = session.category;
            }
        }

        let session = UserSession {
            position: Some(position),
            category: category.clone(),
        };
        state.sessions.put(user_id, session).await;
    }

    tracing::info!(
        "Searching venues near ({}, {}) with category: {:?}",
        req.latitude,
        req.longitude,
        category
    );

    let query = build_overpass_query(
        state.recommender.catalog(),
        &position,
        state.search.radius_meters,
        category.as_deref(),
    );
    let records = state.overpass.search(&query).await;

    tracing::debug!("Found {} candidate nodes", records.len());

    let outcome = state
        .recommender
        .rank(records, &position, category.as_deref(), limit);

    tracing::info!(
        "Returning {} recommendations (from {} candidates)",
        outcome.recommendations.len(),
        outcome.total_candidates
    );

    HttpResponse::Ok().json(RecommendResponse {
        recommendations: outcome.recommendations,
        total_candidates: outcome.total_candidates,
        category,
    })
}
