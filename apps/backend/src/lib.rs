pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::db::Database;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

/// Build the API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Catalog routes
        .route("/api/students", get(routes::students::list))
        .route("/api/exams/:class_num", get(routes::catalog::exams))
        .route(
            "/api/chapters/:class_num/:subject_code",
            get(routes::catalog::chapters),
        )
        .route(
            "/api/past-performance/:student_id/:subject/:topic/:exam_type",
            get(routes::performance::past_performance),
        )
        // Plan routes
        .route("/api/generate-study-plan", post(routes::plans::generate))
        .route("/api/study-plans/:student_id", get(routes::plans::list))
        .route("/api/schedule", post(routes::schedule::daywise))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let db = match &config.seed_path {
        Some(path) => Database::load(path)?,
        None => {
            tracing::warn!("SEED_PATH not set, starting with an empty store");
            Database::default()
        }
    };

    let state = AppState { db: Arc::new(db) };

    let app = build_router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
