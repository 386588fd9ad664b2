use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use farefinder::config::{LoggingSettings, Settings};
use farefinder::error::handle_query_payload_error;
use farefinder::routes::{self, AppState};
use farefinder::services::{DocumentStore, PostgresStore, UnavailableStore};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingSettings) {
    // RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

/// Connect to the document store, degrading instead of failing when it is unreachable
async fn connect_store(settings: &Settings) -> Arc<dyn DocumentStore> {
    match PostgresStore::connect(&settings.database).await {
        Ok(store) => {
            info!("Document store connected");
            Arc::new(store)
        }
        Err(e) => {
            error!("Error connecting to document store ({}), running in degraded mode", e);
            match PostgresStore::connect_lazy(&settings.database) {
                Ok(store) => Arc::new(store),
                Err(e) => {
                    error!("Invalid document store settings: {}", e);
                    Arc::new(UnavailableStore::new(e.to_string()))
                }
            }
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_tracing(&logging);

    info!("Starting Farefinder service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Configuration loaded successfully");

    let store = connect_store(&settings).await;
    let app_state = AppState::new(store, settings.search.origin_city.clone());

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
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
