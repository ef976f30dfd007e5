use axum::extract::State;
use axum::response::Response;
use axum::routing::{get, put};
use axum::Router;
use service::db::room_service_order_service::{self, CreateRoomServiceOrder, UpdateRoomServiceOrder};
use service::views::RoomServiceOrderResponse;

use crate::errors::ApiError;
use crate::extractor::{AppJson, AppPath, AppQuery};
use crate::response::{created, deleted, ok, paged, ErrorBody, StatusInput, StatusPageQuery};
use crate::state::ServerState;

#[utoipa::path(get, path = "/api/v1/room-service-orders", tag = "room-service-orders", params(StatusPageQuery),
    responses((status = 200, description = "Paginated orders", body = [RoomServiceOrderResponse])))]
pub async fn list(State(state): State<ServerState>, AppQuery(q): AppQuery<StatusPageQuery>) -> Result<Response, ApiError> {
    let page = room_service_order_service::list_orders(&state.db, q.status.as_deref(), q.pagination()).await?;
    Ok(paged("Room service orders retrieved successfully", page, RoomServiceOrderResponse::from))
}

#[utoipa::path(post, path = "/api/v1/room-service-orders", tag = "room-service-orders", request_body = CreateRoomServiceOrder,
    responses((status = 201, description = "Created; lines priced from the menu", body = RoomServiceOrderResponse), (status = 400, body = ErrorBody)))]
pub async fn create(State(state): State<ServerState>, AppJson(input): AppJson<CreateRoomServiceOrder>) -> Result<Response, ApiError> {
    let o = room_service_order_service::create_order(&state.db, &input).await?;
    Ok(created("Room service order created successfully", RoomServiceOrderResponse::from(o)))
}

#[utoipa::path(get, path = "/api/v1/room-service-orders/{id}", tag = "room-service-orders", params(("id" = i32, Path, description = "Order id")),
    responses((status = 200, description = "Order", body = RoomServiceOrderResponse), (status = 404, body = ErrorBody)))]
pub async fn get_one(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let o = room_service_order_service::get_order(&state.db, id).await?;
    Ok(ok("Room service order retrieved successfully", RoomServiceOrderResponse::from(o)))
}

#[utoipa::path(put, path = "/api/v1/room-service-orders/{id}", tag = "room-service-orders", params(("id" = i32, Path, description = "Order id")), request_body = UpdateRoomServiceOrder,
    responses((status = 200, description = "Updated", body = RoomServiceOrderResponse), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update(State(state): State<ServerState>, AppPath(id): AppPath<i32>, AppJson(input): AppJson<UpdateRoomServiceOrder>) -> Result<Response, ApiError> {
    let o = room_service_order_service::update_order(&state.db, id, &input).await?;
    Ok(ok("Room service order updated successfully", RoomServiceOrderResponse::from(o)))
}

#[utoipa::path(put, path = "/api/v1/room-service-orders/{id}/status", tag = "room-service-orders", params(("id" = i32, Path, description = "Order id")), request_body = StatusInput,
    responses((status = 200, description = "Status changed", body = RoomServiceOrderResponse), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn set_status(State(state): State<ServerState>, AppPath(id): AppPath<i32>, AppJson(input): AppJson<StatusInput>) -> Result<Response, ApiError> {
    let o = room_service_order_service::update_order_status(&state.db, id, &input.status).await?;
    Ok(ok("Room service order status updated successfully", RoomServiceOrderResponse::from(o)))
}

#[utoipa::path(delete, path = "/api/v1/room-service-orders/{id}", tag = "room-service-orders", params(("id" = i32, Path, description = "Order id")),
    responses((status = 200, description = "Deleted"), (status = 404, body = ErrorBody)))]
pub async fn delete(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    room_service_order_service::delete_order(&state.db, id).await?;
    Ok(deleted("Room service order deleted successfully"))
}

#[utoipa::path(get, path = "/api/v1/room-service-orders/reservation/{id}", tag = "room-service-orders", params(("id" = i32, Path, description = "Reservation id")),
    responses((status = 200, description = "Orders of one reservation", body = [RoomServiceOrderResponse])))]
pub async fn by_reservation(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let list = room_service_order_service::list_by_reservation(&state.db, id).await?;
    let data: Vec<RoomServiceOrderResponse> = list.into_iter().map(Into::into).collect();
    Ok(ok("Room service orders retrieved successfully", data))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/room-service-orders", get(list).post(create))
        .route("/room-service-orders/:id", get(get_one).put(update).delete(delete))
        .route("/room-service-orders/:id/status", put(set_status))
        .route("/room-service-orders/reservation/:id", get(by_reservation))
}
