// Route exports
pub mod enrollments;
pub mod matches;
pub mod notifications;

use crate::services::MatchService;
use actix_web::web;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<MatchService>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(enrollments::configure)
            .configure(notifications::configure),
    );
}
