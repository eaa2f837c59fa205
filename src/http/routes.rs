//! HTTP route definitions

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use chrono::Utc;
use serde::Serialize;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::app::AppState;
use crate::dashboard::DashboardMetrics;
use crate::store::{DeliveryEvent, InventoryItem, User, WorkOrder};
use crate::util::time::uptime_secs;

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    // CORS configuration - support multiple origins (comma-separated in CLIENT_ORIGIN)
    let allowed_origins: Vec<header::HeaderValue> = state
        .config
        .client_origin
        .split(',')
        .filter_map(|s| s.trim().parse::<header::HeaderValue>().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/dashboard", get(dashboard_handler))
        .route("/snapshot/inventory", put(put_inventory_handler))
        .route("/snapshot/work-orders", put(put_work_orders_handler))
        .route("/snapshot/users", put(put_users_handler))
        .route("/snapshot/deliveries", put(put_deliveries_handler))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// ============================================================================
// Health endpoint
// ============================================================================

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    uptime_secs: u64,
    inventory_items: usize,
    work_orders: usize,
    users: usize,
    deliveries: usize,
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime_secs: uptime_secs(),
        inventory_items: state.snapshots.inventory().len(),
        work_orders: state.snapshots.work_orders().len(),
        users: state.snapshots.users().len(),
        deliveries: state.snapshots.deliveries().len(),
    })
}

// ============================================================================
// Dashboard endpoint
// ============================================================================

async fn dashboard_handler(State(state): State<AppState>) -> Json<DashboardMetrics> {
    Json(state.dashboard.render(&state.snapshots, Utc::now()))
}

// ============================================================================
// Snapshot ingestion endpoints
// ============================================================================

#[derive(Serialize)]
struct SnapshotResponse {
    collection: &'static str,
    count: usize,
}

async fn put_inventory_handler(
    State(state): State<AppState>,
    Json(items): Json<Vec<InventoryItem>>,
) -> Result<Json<SnapshotResponse>, AppError> {
    for item in &items {
        if !item.quantity_on_hand.is_finite()
            || item.quantity_on_hand < 0.0
            || !item.reorder_threshold.is_finite()
        {
            return Err(AppError::BadRequest(format!(
                "Invalid quantities for inventory item '{}'",
                item.name
            )));
        }
    }

    let count = state.snapshots.replace_inventory(items);
    info!(count, "Inventory snapshot replaced");
    Ok(Json(SnapshotResponse {
        collection: "inventory",
        count,
    }))
}

async fn put_work_orders_handler(
    State(state): State<AppState>,
    Json(orders): Json<Vec<WorkOrder>>,
) -> Json<SnapshotResponse> {
    let count = state.snapshots.replace_work_orders(orders);
    info!(count, "Work order snapshot replaced");
    Json(SnapshotResponse {
        collection: "work_orders",
        count,
    })
}

async fn put_users_handler(
    State(state): State<AppState>,
    Json(users): Json<Vec<User>>,
) -> Json<SnapshotResponse> {
    let count = state.snapshots.replace_users(users);
    info!(count, "User snapshot replaced");
    Json(SnapshotResponse {
        collection: "users",
        count,
    })
}

async fn put_deliveries_handler(
    State(state): State<AppState>,
    Json(events): Json<Vec<DeliveryEvent>>,
) -> Json<SnapshotResponse> {
    let count = state.snapshots.replace_deliveries(events);
    info!(count, "Delivery snapshot replaced");
    Json(SnapshotResponse {
        collection: "deliveries",
        count,
    })
}

// ============================================================================
// Error handling
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}
