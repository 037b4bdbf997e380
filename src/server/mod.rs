//! HTTP facade
//!
//! Serves the three report endpoints plus a liveness probe. Handlers share
//! only immutable state behind Arcs; every query recomputes from a fresh
//! snapshot, so requests run fully in parallel with nothing to invalidate.

mod auth;
mod handlers;

pub use auth::{StaticTokenValidator, TokenValidator};

use std::sync::Arc;

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tracing::info;

use crate::config::{Config, EngineConfig};
use crate::core::{EngineError, Result};
use crate::report::ReportEngine;
use crate::store::SnapshotStore;

#[derive(Clone)]
pub struct AppState {
    pub(crate) engine: Arc<ReportEngine<Arc<dyn SnapshotStore>>>,
    pub(crate) validator: Arc<dyn TokenValidator>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn SnapshotStore>,
        config: EngineConfig,
        validator: Arc<dyn TokenValidator>,
    ) -> Self {
        Self {
            engine: Arc::new(ReportEngine::new(store, config)),
            validator,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let reports = Router::new()
        .route("/emissions-by-item", get(handlers::emissions_by_item))
        .route(
            "/emissions-by-supplier",
            get(handlers::emissions_by_supplier),
        )
        .route("/ai-recommendations", get(handlers::ai_recommendations))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer,
        ));

    Router::new()
        .route("/healthz", get(handlers::healthz))
        .nest("/api/reports", reports)
        .with_state(state)
}

/// Run the facade until the process is stopped.
///
/// Fails fast when no bearer token is configured; an open report endpoint
/// is never served.
pub fn run(store: Arc<dyn SnapshotStore>, config: Config) -> Result<()> {
    let token = config
        .server
        .bearer_token
        .clone()
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            EngineError::InvalidConfiguration(
                "server.bearer_token (or CARBONMAP_API_TOKEN) is required to serve".to_string(),
            )
        })?;

    let state = AppState::new(
        store,
        config.engine.clone(),
        Arc::new(StaticTokenValidator::new(token)),
    );
    let router = build_router(state);
    let bind = config.server.bind.clone();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&bind).await?;
        info!(addr = %bind, "serving report endpoints");
        axum::serve(listener, router).await
    })?;
    Ok(())
}
