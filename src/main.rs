use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use volunteer_match::config::{NotificationSink, Settings, StoreBackend};
use volunteer_match::core::{MatchEngine, Matcher};
use volunteer_match::error::{handle_json_payload_error, handle_path_error};
use volunteer_match::routes::{self, AppState};
use volunteer_match::services::{
    EventCache, MatchService, MemoryStore, Notifier, PostgresStore, SeedData, Store, StoreNotifier,
    WebhookNotifier,
};

fn io_error(message: String) -> std::io::Error {
    std::io::Error::other(message)
}

async fn build_store(settings: &Settings) -> std::io::Result<Arc<dyn Store>> {
    match settings.store.backend {
        StoreBackend::Memory => {
            let store = match &settings.store.seed_path {
                Some(path) => {
                    let seed = SeedData::from_file(path).map_err(|e| io_error(e.to_string()))?;
                    info!(
                        "Seeded memory store with {} volunteers and {} events",
                        seed.volunteers.len(),
                        seed.events.len()
                    );
                    MemoryStore::from_seed(seed)
                }
                None => MemoryStore::new(),
            };
            info!("Using in-memory store");
            Ok(Arc::new(store))
        }
        StoreBackend::Postgres => {
            let db = &settings.database;
            let store = PostgresStore::from_settings(
                &db.url,
                db.max_connections,
                db.min_connections,
                db.acquire_timeout_secs,
                db.idle_timeout_secs,
            )
            .await
            .map_err(|e| {
                error!("Failed to connect to PostgreSQL: {}", e);
                io_error(e.to_string())
            })?;
            info!("PostgreSQL store initialized");
            Ok(Arc::new(store))
        }
    }
}

fn build_notifier(settings: &Settings, store: Arc<dyn Store>) -> std::io::Result<Arc<dyn Notifier>> {
    let notifications = &settings.notifications;

    match notifications.sink {
        NotificationSink::Store => Ok(Arc::new(StoreNotifier::new(store))),
        NotificationSink::Webhook => {
            let url = notifications
                .webhook_url
                .clone()
                .ok_or_else(|| io_error("notifications.webhook_url is required for the webhook sink".to_string()))?;
            info!("Delivering notifications to {}", url);
            let notifier = WebhookNotifier::new(url, Duration::from_secs(notifications.timeout_secs))
                .map_err(|e| io_error(e.to_string()))?;
            Ok(Arc::new(notifier))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Configuration first so its logging section can seed the subscriber
    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();

    // LOG_LEVEL / LOG_FORMAT override the configured values
    let log_level = std::env::var("LOG_LEVEL").unwrap_or(logging.level);
    let log_format = std::env::var("LOG_FORMAT").unwrap_or(logging.format);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting volunteer matching service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        io_error(format!("Configuration error: {}", e))
    })?;

    info!("Configuration loaded successfully");

    let store = build_store(&settings).await?;
    let notifier = build_notifier(&settings, store.clone())?;

    let matcher = Matcher::new(settings.matching.score_threshold);
    let engine = MatchEngine::new(
        matcher,
        notifier,
        Duration::from_millis(settings.matching.notify_timeout_ms),
    );

    info!("Matcher initialized with threshold > {}", matcher.threshold());

    let events = EventCache::new(
        store.clone(),
        Duration::from_secs(settings.cache.events_ttl_secs),
        settings.cache.events_fallback,
    );

    let app_state = AppState {
        service: Arc::new(MatchService::new(store, events, engine)),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_keeps_message() {
        let err = io_error("Configuration error: missing url".to_string());
        assert_eq!(err.kind(), std::io::ErrorKind::Other);
        assert_eq!(err.to_string(), "Configuration error: missing url");
    }
}
