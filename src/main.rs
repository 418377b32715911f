//!
//! Users service for the Amora platform.
//! Reads configuration from TOML file (~/.config/amora-users/config.toml).

use std::sync::Arc;
use std::time::Duration;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use amora_users::application::users::{AgeLimits, UserService};
use amora_users::config::AppConfig;
use amora_users::infrastructure::database::migrator::Migrator;
use amora_users::infrastructure::database::repositories::UserRepository;
use amora_users::infrastructure::http::{
    build_http_client, FreeAreaHttpClient, GeoHttpClient, PrivateAreaHttpClient,
};
use amora_users::{create_api_router, default_config_path, init_database, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("USERS_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Amora Users Service...");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    info!("Database: {}", db_config.url);

    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // ── Sibling-service clients ────────────────────────────────
    let http = build_http_client(Duration::from_secs(app_cfg.clients.timeout_seconds))?;
    let free_areas = Arc::new(FreeAreaHttpClient::new(
        http.clone(),
        app_cfg.clients.free_area_base_url.clone(),
    ));
    let private_areas = Arc::new(PrivateAreaHttpClient::new(
        http.clone(),
        app_cfg.clients.private_area_base_url.clone(),
    ));
    let geo_client = Arc::new(GeoHttpClient::new(
        http,
        app_cfg.clients.geo_base_url.clone(),
    ));
    info!(
        free_area = %app_cfg.clients.free_area_base_url,
        private_area = %app_cfg.clients.private_area_base_url,
        geo = %app_cfg.clients.geo_base_url,
        "Sibling-service clients configured"
    );

    // ── Services ───────────────────────────────────────────────
    let age_limits = AgeLimits {
        adult: app_cfg.age.adult,
        senior: app_cfg.age.senior,
    };
    let user_repository = Arc::new(UserRepository::new(db.clone()));
    let user_service = Arc::new(UserService::new(
        user_repository,
        free_areas,
        private_areas,
        age_limits,
    ));

    // ── REST API ───────────────────────────────────────────────
    let api_router = create_api_router(db.clone(), user_service, geo_client);

    let api_addr = format!("{}:{}", app_cfg.server.host, app_cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    axum::serve(listener, api_router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await?;

    // Perform final cleanup
    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Amora Users Service shutdown complete");
    Ok(())
}
