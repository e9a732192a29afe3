//! HTTP service for plan generation and retrieval
//!
//! Thin wrapper over the pipeline and plan store. Internal failures are
//! reported to clients as an opaque server error with no diagnostic detail.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use eyre::{Context, Result};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use planstore::PlanStore;

use crate::pipeline::PlanPipeline;

/// Shared state for all routes
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<PlanPipeline>,
    pub store: Arc<PlanStore>,
}

/// Request body for plan generation
#[derive(Debug, Deserialize)]
pub struct GeneratePlanRequest {
    #[serde(default)]
    pub goal: String,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate-plan", post(generate_plan))
        .route("/plans", get(list_plans))
        .route("/plan/:id", get(get_plan))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(state: AppState, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, router(state)).await.context("Server error")?;
    Ok(())
}

fn server_error() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Server encountered an error. Please try again later." })),
    )
}

/// POST /generate-plan
async fn generate_plan(
    State(state): State<AppState>,
    Json(request): Json<GeneratePlanRequest>,
) -> (StatusCode, Json<Value>) {
    if request.goal.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "Goal is required" })));
    }

    let plan = match state.pipeline.run(&request.goal).await {
        Ok(plan) => plan,
        Err(e) => {
            warn!(error = %e, "Plan generation failed");
            return server_error();
        }
    };

    match state.store.insert(&request.goal, &plan) {
        Ok(record) => (
            StatusCode::OK,
            Json(json!({
                "message": "Plan generated and saved successfully",
                "plan_id": record.id,
                "plan": record.plan,
            })),
        ),
        Err(e) => {
            warn!(error = %e, "Failed to store plan");
            server_error()
        }
    }
}

/// GET /plans
async fn list_plans(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.store.list() {
        Ok(records) => (StatusCode::OK, Json(json!(records))),
        Err(e) => {
            warn!(error = %e, "Failed to list plans");
            server_error()
        }
    }
}

/// GET /plan/{id}
async fn get_plan(Path(id): Path<String>, State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.store.get(&id) {
        Ok(Some(record)) => (StatusCode::OK, Json(json!(record))),
        Ok(None) => (StatusCode::NOT_FOUND, Json(json!({ "error": "Plan not found" }))),
        Err(e) => {
            warn!(error = %e, "Failed to fetch plan");
            server_error()
        }
    }
}
