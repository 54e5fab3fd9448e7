use crate::error::ServiceError;
use crate::models::{CreateNotificationRequest, NotificationsResponse};
use crate::routes::AppState;
use actix_web::{web, HttpResponse};
use validator::Validate;

/// Configure notification routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/notifications", web::get().to(get_all_notifications))
        .route("/notifications", web::post().to(create_notification))
        .route("/notifications/{user_id}", web::get().to(get_user_notifications));
}

/// GET /api/v1/notifications
async fn get_all_notifications(state: web::Data<AppState>) -> Result<HttpResponse, ServiceError> {
    let notifications = state.service.store().list_all_notifications().await?;

    Ok(HttpResponse::Ok().json(NotificationsResponse { notifications }))
}

/// GET /api/v1/notifications/{user_id}
async fn get_user_notifications(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let notifications = state
        .service
        .store()
        .list_notifications(path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(NotificationsResponse { notifications }))
}

/// Store a notification
///
/// POST /api/v1/notifications
///
/// Request body:
/// ```json
/// {
///   "userId": 1,
///   "message": "string"
/// }
/// ```
async fn create_notification(
    state: web::Data<AppState>,
    req: web::Json<CreateNotificationRequest>,
) -> Result<HttpResponse, ServiceError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for notification request: {:?}", errors);
        return Err(ServiceError::Validation(errors.to_string()));
    }

    let notification = state
        .service
        .store()
        .insert_notification(req.user_id, &req.message)
        .await?;

    Ok(HttpResponse::Created().json(notification))
}
