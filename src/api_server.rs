// Axum API Server Module
//
// Purpose: HTTP surface over the footprint calculators. Serves the landing
// page and the calculator wizard (Askama + HTMX) plus a JSON API.
// The server keeps no per-visitor state: wizard state travels with the form.

#[cfg(feature = "api")]
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

#[cfg(feature = "api")]
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

#[cfg(feature = "api")]
use std::sync::Arc;

#[cfg(feature = "api")]
use crate::calculator::{compute_batch, FootprintCalculator, HabitsCalculator, UsageCalculator};

#[cfg(feature = "api")]
use crate::config::ServerConfig;

#[cfg(feature = "api")]
use crate::report::FootprintReport;

#[cfg(feature = "api")]
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(feature = "api")]
impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            started_at: chrono::Utc::now(),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // HTML pages
        .route("/", get(pages::home_page))
        .route(
            "/calculator/habits",
            get(pages::calculator_page::<HabitsCalculator>)
                .post(pages::calculator_step::<HabitsCalculator>),
        )
        .route(
            "/calculator/usage",
            get(pages::calculator_page::<UsageCalculator>)
                .post(pages::calculator_step::<UsageCalculator>),
        )

        // JSON API
        .route("/api/footprint/habits", post(compute_footprint::<HabitsCalculator>))
        .route("/api/footprint/habits/batch", post(compute_footprint_batch::<HabitsCalculator>))
        .route("/api/footprint/usage", post(compute_footprint::<UsageCalculator>))
        .route("/api/footprint/usage/batch", post(compute_footprint_batch::<UsageCalculator>))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive()) // Allow all origins
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl IntoResponse {
    let now = chrono::Utc::now();
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": now.to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": (now - state.started_at).num_seconds().max(0),
    }))
}

/// Score one answer set
#[cfg(feature = "api")]
async fn compute_footprint<C: FootprintCalculator>(
    Json(answers): Json<C::Answers>,
) -> Json<FootprintReport> {
    Json(FootprintReport::build::<C>(&answers))
}

/// Score many answer sets in parallel (Rayon, off the async runtime)
#[cfg(feature = "api")]
async fn compute_footprint_batch<C: FootprintCalculator>(
    Json(batch): Json<Vec<C::Answers>>,
) -> Result<Json<Vec<FootprintReport>>, AppError> {
    let start = std::time::Instant::now();
    let count = batch.len();

    let reports = tokio::task::spawn_blocking(move || {
        let footprints = compute_batch::<C>(&batch);
        batch
            .iter()
            .zip(footprints)
            .map(|(answers, footprint)| FootprintReport::from_footprint::<C>(footprint, answers))
            .collect::<Vec<_>>()
    })
    .await?;

    tracing::debug!(
        variant = C::variant().as_str(),
        "Scored batch of {} answer sets in {:?}",
        count,
        start.elapsed()
    );

    Ok(Json(reports))
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("Request failed: {}", self);

        let status = match self {
            AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(serde_json::json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
