use crate::error::ServiceError;
use crate::models::HealthResponse;
use crate::routes::AppState;
use actix_web::{web, HttpResponse, Responder};

/// Configure health and matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/{volunteer_id}", web::get().to(get_matches))
        .route("/events/{event_id}/candidates", web::get().to(get_candidates));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let healthy = state.service.store().health_check().await.unwrap_or(false);

    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Ranked events for a volunteer
///
/// GET /api/v1/matches/{volunteer_id}
///
/// Responds with a JSON array of events, each carrying `matchScore` and
/// `matchedSkills`, best match first. The volunteer is notified of the top
/// match as a side effect.
async fn get_matches(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let volunteer_id = path.into_inner();

    tracing::info!("Finding matches for volunteer: {}", volunteer_id);

    let matches = state.service.matches_for_volunteer(volunteer_id).await?;

    Ok(HttpResponse::Ok().json(matches))
}

/// Volunteers whose skills overlap an event's requirements
///
/// GET /api/v1/events/{event_id}/candidates
async fn get_candidates(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let event_id = path.into_inner();

    let candidates = state.service.candidates_for_event(event_id).await?;

    tracing::debug!("Found {} candidate volunteers for event {}", candidates.len(), event_id);

    Ok(HttpResponse::Ok().json(candidates))
}
