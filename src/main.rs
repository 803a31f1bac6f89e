use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use festival_matcher::config::Settings;
use festival_matcher::routes::{self, AppState};
use festival_matcher::{Catalog, Matcher};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting festival matcher service...");

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    info!("Configuration loaded successfully");

    // Load the festival catalog once; workers share it read-only
    let catalog = Catalog::load(&settings.catalog.path).map_err(|e| {
        error!("Failed to load festival catalog from {}: {}", settings.catalog.path, e);
        std::io::Error::other(format!("Catalog error: {}", e))
    })?;

    let catalog = Arc::new(catalog);

    // Initialize matcher with configured weights
    let matcher = Matcher::with_tuning(settings.weights(), settings.tuning());

    info!("Matcher initialized with weights: {:?}", matcher.weights());

    // Build application state
    let app_state = AppState {
        catalog,
        matcher,
        default_limit: settings.matching.default_limit(),
        max_limit: settings.matching.max_limit(),
        og_image_endpoint: settings.share.og_image_endpoint.clone(),
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
            .app_data(routes::json_config())
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
