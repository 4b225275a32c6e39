// Presentation layer - JSON host for the fleet read surface
pub mod app_state;
pub mod error;
pub mod handlers;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    fleet_dashboard, health_check, list_groups, list_risk_events, list_robots, risk_event_statistics,
    robot_telemetry,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/robots", get(list_robots))
        .route("/robots/groups", get(list_groups))
        .route("/robots/dashboard", get(fleet_dashboard))
        .route("/robots/risk-events", get(list_risk_events))
        .route("/robots/risk-events/statistics", get(risk_event_statistics))
        .route("/robots/:id/telemetry", get(robot_telemetry))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
