use axum::extract::State;
use axum::response::Response;
use axum::routing::{get, put};
use axum::Router;
use serde::Deserialize;
use service::db::room_service::{self, CreateRoom, RoomFilter, UpdateRoom};
use service::pagination::Pagination;
use service::views::RoomResponse;
use utoipa::IntoParams;

use crate::errors::ApiError;
use crate::extractor::{AppJson, AppPath, AppQuery};
use crate::response::{created, deleted, ok, paged, ErrorBody, StatusInput};
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoomListQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub status: Option<String>,
    pub room_type: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvailableQuery {
    pub room_type: Option<String>,
}

#[utoipa::path(get, path = "/api/v1/rooms", tag = "rooms", params(RoomListQuery),
    responses((status = 200, description = "Paginated rooms", body = [RoomResponse])))]
pub async fn list(State(state): State<ServerState>, AppQuery(q): AppQuery<RoomListQuery>) -> Result<Response, ApiError> {
    let filter = RoomFilter { status: q.status, room_type: q.room_type };
    let page = room_service::list_rooms(&state.db, &filter, Pagination::new(q.page, q.page_size)).await?;
    Ok(paged("Rooms retrieved successfully", page, RoomResponse::from))
}

#[utoipa::path(get, path = "/api/v1/rooms/available", tag = "rooms", params(AvailableQuery),
    responses((status = 200, description = "Rooms with status available", body = [RoomResponse])))]
pub async fn available(State(state): State<ServerState>, AppQuery(q): AppQuery<AvailableQuery>) -> Result<Response, ApiError> {
    let rooms = room_service::list_available_rooms(&state.db, q.room_type.as_deref()).await?;
    let data: Vec<RoomResponse> = rooms.into_iter().map(Into::into).collect();
    Ok(ok("Available rooms retrieved successfully", data))
}

#[utoipa::path(post, path = "/api/v1/rooms", tag = "rooms", request_body = CreateRoom,
    responses((status = 201, description = "Created", body = RoomResponse), (status = 400, body = ErrorBody), (status = 409, body = ErrorBody)))]
pub async fn create(State(state): State<ServerState>, AppJson(input): AppJson<CreateRoom>) -> Result<Response, ApiError> {
    let r = room_service::create_room(&state.db, &input).await?;
    Ok(created("Room created successfully", RoomResponse::from(r)))
}

#[utoipa::path(get, path = "/api/v1/rooms/{id}", tag = "rooms", params(("id" = i32, Path, description = "Room id")),
    responses((status = 200, description = "Room", body = RoomResponse), (status = 404, body = ErrorBody)))]
pub async fn get_one(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let r = room_service::get_room(&state.db, id).await?;
    Ok(ok("Room retrieved successfully", RoomResponse::from(r)))
}

#[utoipa::path(put, path = "/api/v1/rooms/{id}", tag = "rooms", params(("id" = i32, Path, description = "Room id")), request_body = UpdateRoom,
    responses((status = 200, description = "Updated", body = RoomResponse), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody), (status = 409, body = ErrorBody)))]
pub async fn update(State(state): State<ServerState>, AppPath(id): AppPath<i32>, AppJson(input): AppJson<UpdateRoom>) -> Result<Response, ApiError> {
    let r = room_service::update_room(&state.db, id, &input).await?;
    Ok(ok("Room updated successfully", RoomResponse::from(r)))
}

#[utoipa::path(put, path = "/api/v1/rooms/{id}/status", tag = "rooms", params(("id" = i32, Path, description = "Room id")), request_body = StatusInput,
    responses((status = 200, description = "Status changed", body = RoomResponse), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn set_status(State(state): State<ServerState>, AppPath(id): AppPath<i32>, AppJson(input): AppJson<StatusInput>) -> Result<Response, ApiError> {
    let r = room_service::update_room_status(&state.db, id, &input.status).await?;
    Ok(ok("Room status updated successfully", RoomResponse::from(r)))
}

#[utoipa::path(delete, path = "/api/v1/rooms/{id}", tag = "rooms", params(("id" = i32, Path, description = "Room id")),
    responses((status = 200, description = "Deleted"), (status = 404, body = ErrorBody)))]
pub async fn delete(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    room_service::delete_room(&state.db, id).await?;
    Ok(deleted("Room deleted successfully"))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/rooms", get(list).post(create))
        .route("/rooms/available", get(available))
        .route("/rooms/:id", get(get_one).put(update).delete(delete))
        .route("/rooms/:id/status", put(set_status))
}
