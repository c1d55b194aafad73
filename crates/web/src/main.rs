use std::sync::Arc;

use anyhow::Context;
use storage::{Database, RecordStore, SharedStore};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod routes;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::fighters::handlers::select_fighters,
        features::fighters::handlers::list_fighters,
        features::fights::handlers::list_fights,
        features::rankings::handlers::get_ranking_table,
        features::rankings::handlers::get_division_ranking,
    ),
    components(
        schemas(
            storage::dto::fighter::FighterName,
            storage::dto::ranking::RankingSnapshot,
            storage::models::Fighter,
            storage::models::FighterStats,
            storage::models::Fight,
            storage::models::RankingEntry,
            storage::models::Division,
        )
    ),
    tags(
        (name = "fighters", description = "Fighter selection endpoints"),
        (name = "fights", description = "Historical fight endpoints"),
        (name = "rankings", description = "Division ranking endpoints"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting fight stats API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!("Connecting to database at: {}", config.database_location());
    let db = Database::new(&config.database_url, config.pool)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Ensuring database schema");
    db.ensure_schema()
        .await
        .context("Failed to create database schema")?;
    tracing::info!("Database schema ready");

    let store: SharedStore = Arc::new(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let app = routes::router(store)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    axum::serve(listener, app).await?;

    Ok(())
}
