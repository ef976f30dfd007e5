//! In-room tablet endpoints. Guests only see trimmed views; writes go
//! through the same services the staff endpoints use.

use axum::extract::State;
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use service::db::housekeeping_service::CreateHousekeepingRequest;
use service::db::maintenance_service::CreateMaintenanceIssue;
use service::db::room_service_order_service::CreateRoomServiceOrder;
use service::db::tablet_service;
use service::views::{
    HousekeepingRequestResponse, InRoomTabletMenuResponse, InRoomTabletReservationResponse, MaintenanceIssueResponse,
    RoomServiceOrderResponse,
};

use crate::errors::ApiError;
use crate::extractor::{AppJson, AppPath};
use crate::response::{created, ok, ErrorBody};
use crate::state::ServerState;

#[utoipa::path(get, path = "/api/v1/in-room-tablet/reservation/{id}", tag = "in-room-tablet", params(("id" = i32, Path, description = "Reservation id")),
    responses((status = 200, description = "Stay summary for the room screen", body = InRoomTabletReservationResponse), (status = 404, body = ErrorBody)))]
pub async fn reservation(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let r = tablet_service::get_reservation(&state.db, id).await?;
    Ok(ok("Reservation retrieved successfully", r))
}

#[utoipa::path(get, path = "/api/v1/in-room-tablet/menu", tag = "in-room-tablet",
    responses((status = 200, description = "Orderable menu items", body = [InRoomTabletMenuResponse])))]
pub async fn menu(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let m = tablet_service::get_menu(&state.db).await?;
    Ok(ok("Menu retrieved successfully", m))
}

#[utoipa::path(post, path = "/api/v1/in-room-tablet/room-service-order", tag = "in-room-tablet", request_body = CreateRoomServiceOrder,
    responses((status = 201, description = "Order placed", body = RoomServiceOrderResponse), (status = 400, body = ErrorBody)))]
pub async fn room_service_order(State(state): State<ServerState>, AppJson(input): AppJson<CreateRoomServiceOrder>) -> Result<Response, ApiError> {
    let o = tablet_service::create_room_service_order(&state.db, &input).await?;
    Ok(created("Room service order placed successfully", RoomServiceOrderResponse::from(o)))
}

#[utoipa::path(post, path = "/api/v1/in-room-tablet/housekeeping-request", tag = "in-room-tablet", request_body = CreateHousekeepingRequest,
    responses((status = 201, description = "Request placed", body = HousekeepingRequestResponse), (status = 400, body = ErrorBody)))]
pub async fn housekeeping_request(State(state): State<ServerState>, AppJson(input): AppJson<CreateHousekeepingRequest>) -> Result<Response, ApiError> {
    let h = tablet_service::create_housekeeping_request(&state.db, &input).await?;
    Ok(created("Housekeeping request placed successfully", HousekeepingRequestResponse::from(h)))
}

#[utoipa::path(post, path = "/api/v1/in-room-tablet/maintenance-issue", tag = "in-room-tablet", request_body = CreateMaintenanceIssue,
    responses((status = 201, description = "Issue reported", body = MaintenanceIssueResponse), (status = 400, body = ErrorBody)))]
pub async fn maintenance_issue(State(state): State<ServerState>, AppJson(input): AppJson<CreateMaintenanceIssue>) -> Result<Response, ApiError> {
    let m = tablet_service::create_maintenance_issue(&state.db, &input).await?;
    Ok(created("Maintenance issue reported successfully", MaintenanceIssueResponse::from(m)))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/in-room-tablet/reservation/:id", get(reservation))
        .route("/in-room-tablet/menu", get(menu))
        .route("/in-room-tablet/room-service-order", post(room_service_order))
        .route("/in-room-tablet/housekeeping-request", post(housekeeping_request))
        .route("/in-room-tablet/maintenance-issue", post(maintenance_issue))
}
