//! HTTP server setup and request handlers.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (tracing, request timeout, request ID)
//! - Bind the server to a listener and drain gracefully on shutdown
//! - Map aggregator output to response bodies
//!
//! The handlers are thin: every health decision lives in the health
//! subsystem; this layer only shapes responses.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::health::HealthAggregator;
use crate::http::response::{single_probe_body, PingResponse, TimeResponse};
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<HealthAggregator>,
    pub metrics_handle: Option<PrometheusHandle>,
}

/// HTTP server for the healthcheck service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and aggregator.
    pub fn new(
        config: &AppConfig,
        aggregator: Arc<HealthAggregator>,
        metrics_handle: Option<PrometheusHandle>,
    ) -> Self {
        let state = AppState {
            aggregator,
            metrics_handle,
        };

        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", get(aggregate_health))
            .route("/ping", get(ping))
            .route("/time", get(time))
            .route("/ping/db", get(probe_db))
            .route("/ping/redis", get(probe_redis))
            .route("/ping/grafana", get(probe_grafana))
            .route("/ping/{name}", get(probe_named));

        if state.metrics_handle.is_some() {
            router = router.route("/metrics", get(prometheus_metrics));
        }

        router
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// GET /: run every probe and return the merged report.
///
/// Always HTTP 200 with a structured body; the status field carries the
/// verdict.
async fn aggregate_health(State(state): State<AppState>) -> impl IntoResponse {
    let report = state.aggregator.check_all().await;
    metrics::record_request("/", 200);
    Json(report)
}

/// GET /ping: process liveness only, no dependency checks.
async fn ping() -> impl IntoResponse {
    metrics::record_request("/ping", 200);
    Json(PingResponse::pong())
}

/// GET /time.
async fn time() -> impl IntoResponse {
    metrics::record_request("/time", 200);
    Json(TimeResponse::now())
}

async fn probe_db(State(state): State<AppState>) -> impl IntoResponse {
    run_single(state, "mysql").await
}

async fn probe_redis(State(state): State<AppState>) -> impl IntoResponse {
    run_single(state, "redis").await
}

async fn probe_grafana(State(state): State<AppState>) -> impl IntoResponse {
    run_single(state, "grafana").await
}

/// GET /ping/{name}: any registered probe, covering the configured
/// external APIs.
async fn probe_named(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    run_single(state, &name).await
}

async fn run_single(state: AppState, name: &str) -> axum::response::Response {
    match state.aggregator.check_single(name).await {
        Some(result) => {
            metrics::record_request("/ping/{name}", 200);
            Json(single_probe_body(result)).into_response()
        }
        None => {
            metrics::record_request("/ping/{name}", 404);
            (StatusCode::NOT_FOUND, "Unknown probe").into_response()
        }
    }
}

/// GET /metrics: Prometheus exposition.
async fn prometheus_metrics(State(state): State<AppState>) -> axum::response::Response {
    match state.metrics_handle {
        Some(handle) => handle.render().into_response(),
        None => (StatusCode::NOT_FOUND, "Metrics disabled").into_response(),
    }
}
