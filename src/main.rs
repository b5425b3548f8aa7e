// src/main.rs

use axum::{Json, Router, routing::get};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;
mod views;

use crate::config::{AppConfig, AppState};

fn router(app_state: AppState) -> Router {
    let dashboard_routes = Router::new()
        .route("/", get(handlers::dashboard::get_dashboard))
        .route("/summary", get(handlers::dashboard::get_summary))
        .route("/sales-chart", get(handlers::dashboard::get_sales_chart))
        .route("/recent-orders", get(handlers::dashboard::get_recent_orders))
        .route("/notifications", get(handlers::dashboard::get_notifications))
        .route("/quick-actions", get(handlers::dashboard::get_quick_actions));

    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/merchant/dashboard", get(handlers::pages::merchant_dashboard))
        .route("/api/health", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(|| async { Json(docs::ApiDoc::openapi()) }))
        .nest("/api/dashboard", dashboard_routes)
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    // Se a configuração falhar, a aplicação não deve iniciar.
    let config = AppConfig::from_env()?;
    let app_state = AppState::new(&config);
    tracing::info!(
        recent_orders_limit = config.recent_orders_limit,
        notifications_limit = config.notifications_limit,
        "✅ Painel do lojista configurado"
    );

    let app = router(app_state);

    // Inicia o servidor
    let listener = TcpListener::bind(config.addr.as_str()).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
