use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};
use utoipa::OpenApi;

use common::{metrics, types::Health};

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod check_ins;
pub mod check_outs;
pub mod dashboard;
pub mod guests;
pub mod housekeeping;
pub mod maintenance;
pub mod menu_items;
pub mod reservations;
pub mod room_service_orders;
pub mod rooms;
pub mod service_requests;
pub mod staff;
pub mod tablet;

/// Liveness plus a database round trip; 503 when the database is unreachable.
#[utoipa::path(get, path = "/health", tag = "health",
    responses((status = 200, description = "Healthy"), (status = 503, description = "Database unreachable")))]
pub async fn health(State(state): State<ServerState>) -> Response {
    match state.db.ping().await {
        Ok(()) => Json(Health { status: "ok", database: "up" }).into_response(),
        Err(e) => {
            warn!(error = %e, "health check: database unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, Json(Health { status: "degraded", database: "down" })).into_response()
        }
    }
}

pub async fn metrics_text() -> Response {
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], metrics::render()).into_response()
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn track_metrics(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let started = Instant::now();
    let res = next.run(req).await;
    metrics::observe_request(&method, res.status().as_u16(), started.elapsed().as_secs_f64());
    res
}

/// Every resource group mounted under `/api/v1`.
fn api_v1() -> Router<ServerState> {
    Router::new()
        .merge(guests::router())
        .merge(reservations::router())
        .merge(rooms::router())
        .merge(service_requests::router())
        .merge(room_service_orders::router())
        .merge(housekeeping::router())
        .merge(maintenance::router())
        .merge(menu_items::router())
        .merge(check_ins::router())
        .merge(check_outs::router())
        .merge(dashboard::router())
        .merge(tablet::router())
        .merge(staff::router())
}

/// Build the full application router.
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_text))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api/v1", api_v1())
        .with_state(state)
        .layer(middleware::from_fn(track_metrics))
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and transport failures
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
