use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use service::db::reservation_service::{self, CreateReservation, UpdateReservation};
use service::views::{ReservationDetailResponse, ReservationResponse};

use crate::errors::ApiError;
use crate::extractor::{AppJson, AppPath, AppQuery};
use crate::response::{created, deleted, ok, paged, ErrorBody, StatusPageQuery};
use crate::state::ServerState;

fn records(list: Vec<models::reservation::Model>) -> Vec<ReservationResponse> {
    list.into_iter().map(Into::into).collect()
}

#[utoipa::path(get, path = "/api/v1/reservations", tag = "reservations", params(StatusPageQuery),
    responses((status = 200, description = "Paginated reservations", body = [ReservationResponse])))]
pub async fn list(State(state): State<ServerState>, AppQuery(q): AppQuery<StatusPageQuery>) -> Result<Response, ApiError> {
    let page = reservation_service::list_reservations(&state.db, q.status.as_deref(), q.pagination()).await?;
    Ok(paged("Reservations retrieved successfully", page, ReservationResponse::from))
}

#[utoipa::path(post, path = "/api/v1/reservations", tag = "reservations", request_body = CreateReservation,
    responses((status = 201, description = "Created", body = ReservationResponse), (status = 400, body = ErrorBody)))]
pub async fn create(State(state): State<ServerState>, AppJson(input): AppJson<CreateReservation>) -> Result<Response, ApiError> {
    let r = reservation_service::create_reservation(&state.db, &input).await?;
    Ok(created("Reservation created successfully", ReservationResponse::from(r)))
}

#[utoipa::path(get, path = "/api/v1/reservations/{id}", tag = "reservations", params(("id" = i32, Path, description = "Reservation id")),
    responses((status = 200, description = "Reservation with guest, room and requests", body = ReservationDetailResponse), (status = 404, body = ErrorBody)))]
pub async fn get_one(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let d = reservation_service::get_reservation_detail(&state.db, id).await?;
    Ok(ok("Reservation retrieved successfully", d))
}

#[utoipa::path(put, path = "/api/v1/reservations/{id}", tag = "reservations", params(("id" = i32, Path, description = "Reservation id")), request_body = UpdateReservation,
    responses((status = 200, description = "Updated", body = ReservationResponse), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update(State(state): State<ServerState>, AppPath(id): AppPath<i32>, AppJson(input): AppJson<UpdateReservation>) -> Result<Response, ApiError> {
    let r = reservation_service::update_reservation(&state.db, id, &input).await?;
    Ok(ok("Reservation updated successfully", ReservationResponse::from(r)))
}

#[utoipa::path(delete, path = "/api/v1/reservations/{id}", tag = "reservations", params(("id" = i32, Path, description = "Reservation id")),
    responses((status = 200, description = "Deleted"), (status = 404, body = ErrorBody)))]
pub async fn delete(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    reservation_service::delete_reservation(&state.db, id).await?;
    Ok(deleted("Reservation deleted successfully"))
}

#[utoipa::path(get, path = "/api/v1/reservations/guest/{guest_id}", tag = "reservations", params(("guest_id" = i32, Path, description = "Guest id")),
    responses((status = 200, description = "Reservations of one guest", body = [ReservationResponse])))]
pub async fn by_guest(State(state): State<ServerState>, AppPath(guest_id): AppPath<i32>) -> Result<Response, ApiError> {
    let list = reservation_service::list_by_guest(&state.db, guest_id).await?;
    Ok(ok("Guest reservations retrieved successfully", records(list)))
}

#[utoipa::path(get, path = "/api/v1/reservations/room/{room_id}", tag = "reservations", params(("room_id" = i32, Path, description = "Room id")),
    responses((status = 200, description = "Reservations of one room", body = [ReservationResponse])))]
pub async fn by_room(State(state): State<ServerState>, AppPath(room_id): AppPath<i32>) -> Result<Response, ApiError> {
    let list = reservation_service::list_by_room(&state.db, room_id).await?;
    Ok(ok("Room reservations retrieved successfully", records(list)))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/reservations", get(list).post(create))
        .route("/reservations/:id", get(get_one).put(update).delete(delete))
        .route("/reservations/guest/:guest_id", get(by_guest))
        .route("/reservations/room/:room_id", get(by_room))
}
