use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use super::AppState;
use crate::core::EngineError;
use crate::report::Report;

/// Count of excluded records on a degraded (but still served) report
pub(crate) const WARNINGS_HEADER: &str = "x-carbonmap-warnings";

pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn engine_error_response(route: &str, err: &EngineError) -> Response {
    let status = match err {
        EngineError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warn!(route, error = %err, "report query failed");
    error_response(status, &err.to_string())
}

fn report_response<T: Serialize>(route: &str, report: &Report<T>) -> Response {
    for issue in &report.warnings {
        warn!(route, %issue, "degraded report");
    }
    let mut response = Json(&report.rows).into_response();
    if report.is_degraded() {
        if let Ok(value) = HeaderValue::from_str(&report.warnings.len().to_string()) {
            response.headers_mut().insert(WARNINGS_HEADER, value);
        }
    }
    response
}

pub(crate) async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub(crate) async fn emissions_by_item(State(state): State<AppState>) -> Response {
    const ROUTE: &str = "/api/reports/emissions-by-item";
    info!(route = ROUTE, "request start");
    match state.engine.emissions_by_item() {
        Ok(report) => report_response(ROUTE, &report),
        Err(err) => engine_error_response(ROUTE, &err),
    }
}

pub(crate) async fn emissions_by_supplier(State(state): State<AppState>) -> Response {
    const ROUTE: &str = "/api/reports/emissions-by-supplier";
    info!(route = ROUTE, "request start");
    match state.engine.emissions_by_supplier() {
        Ok(report) => report_response(ROUTE, &report),
        Err(err) => engine_error_response(ROUTE, &err),
    }
}

pub(crate) async fn ai_recommendations(State(state): State<AppState>) -> Response {
    const ROUTE: &str = "/api/reports/ai-recommendations";
    info!(route = ROUTE, "request start");
    match state.engine.ai_recommendations() {
        Ok(report) => report_response(ROUTE, &report),
        Err(err) => engine_error_response(ROUTE, &err),
    }
}
