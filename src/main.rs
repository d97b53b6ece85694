use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web::Data};
use anyhow::Context;
use status_unlock_api::config::Config;
use status_unlock_api::openapi::ApiDoc;
use status_unlock_api::store::{MongoStatusStore, StatusStore};
use status_unlock_api::{routes, telemetry};
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Status & Unlock Service Entry Point
///
/// Loads configuration (including `.env`), connects to MongoDB and launches
/// the Actix-web HTTP server with:
/// - REST endpoints under `/api`
/// - Swagger UI for API documentation
/// - Permissive CORS and per-request access logging
///
/// # Endpoints
/// - API: `/api/`, `/api/status`, `/api/unlock`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI document: `/api-docs/openapi.json`
///
/// # Lifecycle
/// An unreachable store aborts startup. The MongoDB client is shut down after
/// the server stops.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;
    telemetry::init(&config.log_filter);

    let mongo = MongoStatusStore::connect(&config)
        .await
        .context("failed to connect to MongoDB")?;
    let store: Arc<dyn StatusStore> = Arc::new(mongo.clone());

    info!(host = %config.host, port = config.port, "starting HTTP server");

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .wrap(routes::cors())
            .app_data(Data::from(store.clone()))
            .configure(routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    mongo.shutdown().await;
    Ok(())
}
