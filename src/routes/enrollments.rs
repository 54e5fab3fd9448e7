use crate::error::ServiceError;
use crate::models::{EnrollResponse, EnrollmentOutcome};
use crate::routes::AppState;
use actix_web::{web, HttpResponse};
use serde_json::json;

/// Configure enrollment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route(
            "/volunteers/{volunteer_id}/enrollments/{event_id}",
            web::post().to(enroll),
        )
        .route(
            "/volunteers/{volunteer_id}/enrollments",
            web::get().to(get_enrolled_events),
        )
        .route("/volunteers/{volunteer_id}/history", web::get().to(get_history))
        .route("/volunteers/{volunteer_id}/browse", web::get().to(get_browse_events))
        .route("/volunteers/{volunteer_id}/next-event", web::get().to(get_next_event));
}

/// Enroll a volunteer in an event
///
/// POST /api/v1/volunteers/{volunteer_id}/enrollments/{event_id}
///
/// 201 when a record is created, 200 when the volunteer already holds an
/// Upcoming or Attended record for the event.
async fn enroll(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, ServiceError> {
    let (volunteer_id, event_id) = path.into_inner();

    let outcome = state.service.enroll(volunteer_id, event_id).await?;

    let (mut builder, created, message) = match outcome {
        EnrollmentOutcome::Created => (HttpResponse::Created(), true, "Enrolled"),
        EnrollmentOutcome::AlreadyEnrolled => (HttpResponse::Ok(), false, "Already enrolled"),
    };

    Ok(builder.json(EnrollResponse {
        volunteer_id,
        event_id,
        created,
        message: message.to_string(),
    }))
}

/// Upcoming events a volunteer is enrolled in
///
/// GET /api/v1/volunteers/{volunteer_id}/enrollments
async fn get_enrolled_events(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let volunteer_id = path.into_inner();

    let events = state.service.enrolled_events(volunteer_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "events": events })))
}

/// Every history record for a volunteer with its status
///
/// GET /api/v1/volunteers/{volunteer_id}/history
async fn get_history(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let history = state.service.history(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({ "volunteer_history": history })))
}

/// Upcoming events the volunteer is not signed up for
///
/// GET /api/v1/volunteers/{volunteer_id}/browse
async fn get_browse_events(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let events = state.service.browse_events(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({ "events": events })))
}

/// GET /api/v1/volunteers/{volunteer_id}/next-event
///
/// `nextEvent` is null when nothing is scheduled.
async fn get_next_event(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let next_event = state.service.next_event(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({ "nextEvent": next_event })))
}
