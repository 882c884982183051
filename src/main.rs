use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing::info;

use digikumbh::api::{
    create_admin_router, create_assistant_router, create_export_router, create_reports_router,
    create_session_router, AdminAppState, AssistantAppState, ExportAppState, ReportsAppState,
    SessionAppState,
};
use digikumbh::config::{load_config, AppConfig};
use digikumbh::session::SessionRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "digikumbh=info".into()),
        )
        .init();

    let config = match load_config("config.toml") {
        Ok(config) => config,
        Err(e) => {
            info!(error = %e, "No usable config.toml, using defaults");
            AppConfig::default()
        }
    };

    let registry = Arc::new(SessionRegistry::with_seed_dir(
        config.seed.directory.clone(),
    ));

    let app = axum::Router::new()
        .merge(create_session_router(SessionAppState {
            registry: registry.clone(),
        }))
        .merge(create_reports_router(ReportsAppState {
            registry: registry.clone(),
        }))
        .merge(create_assistant_router(AssistantAppState {
            registry: registry.clone(),
            answer_delay: Duration::from_millis(config.assistant.answer_delay_ms),
        }))
        .merge(create_admin_router(AdminAppState {
            registry: registry.clone(),
            passphrase: config.admin.passphrase.clone(),
        }))
        .merge(create_export_router(ExportAppState { registry }))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    info!(
        bind = %config.server.bind,
        seed_dir = %config.seed.directory.display(),
        "DigiKumbh demo backend listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
