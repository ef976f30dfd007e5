use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use service::db::dashboard_service::{self, DashboardStatsResponse, RevenueResponse, RoomStatusSummaryResponse, ServiceRequestSummaryResponse};

use crate::errors::ApiError;
use crate::response::ok;
use crate::state::ServerState;

#[utoipa::path(get, path = "/api/v1/dashboard/stats", tag = "dashboard",
    responses((status = 200, description = "Front-desk counters", body = DashboardStatsResponse)))]
pub async fn stats(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let s = dashboard_service::get_stats(&state.db).await?;
    Ok(ok("Dashboard stats retrieved successfully", s))
}

#[utoipa::path(get, path = "/api/v1/dashboard/room-status", tag = "dashboard",
    responses((status = 200, description = "Rooms by status", body = RoomStatusSummaryResponse)))]
pub async fn room_status(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let s = dashboard_service::get_room_status(&state.db).await?;
    Ok(ok("Room status summary retrieved successfully", s))
}

#[utoipa::path(get, path = "/api/v1/dashboard/service-requests-summary", tag = "dashboard",
    responses((status = 200, description = "Service requests by status", body = ServiceRequestSummaryResponse)))]
pub async fn service_requests_summary(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let s = dashboard_service::get_service_request_summary(&state.db).await?;
    Ok(ok("Service request summary retrieved successfully", s))
}

#[utoipa::path(get, path = "/api/v1/dashboard/revenue", tag = "dashboard",
    responses((status = 200, description = "Revenue windows", body = RevenueResponse)))]
pub async fn revenue(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let r = dashboard_service::get_revenue(&state.db).await?;
    Ok(ok("Revenue retrieved successfully", r))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/dashboard/stats", get(stats))
        .route("/dashboard/room-status", get(room_status))
        .route("/dashboard/service-requests-summary", get(service_requests_summary))
        .route("/dashboard/revenue", get(revenue))
}
