use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use service::db::check_in_service::{self, CreateCheckIn, UpdateCheckIn};
use service::pagination::Pagination;
use service::views::CheckInResponse;

use crate::errors::ApiError;
use crate::extractor::{AppJson, AppPath, AppQuery};
use crate::response::{created, ok, paged, ErrorBody, PageQuery};
use crate::state::ServerState;

#[utoipa::path(get, path = "/api/v1/check-ins", tag = "check-ins", params(PageQuery),
    responses((status = 200, description = "Paginated check-ins", body = [CheckInResponse])))]
pub async fn list(State(state): State<ServerState>, AppQuery(q): AppQuery<PageQuery>) -> Result<Response, ApiError> {
    let page = check_in_service::list_check_ins(&state.db, Pagination::from(&q)).await?;
    Ok(paged("Check-ins retrieved successfully", page, CheckInResponse::from))
}

#[utoipa::path(post, path = "/api/v1/check-ins", tag = "check-ins", request_body = CreateCheckIn,
    responses((status = 201, description = "Checked in; reservation and room statuses updated", body = CheckInResponse), (status = 400, body = ErrorBody), (status = 409, body = ErrorBody)))]
pub async fn create(State(state): State<ServerState>, AppJson(input): AppJson<CreateCheckIn>) -> Result<Response, ApiError> {
    let c = check_in_service::create_check_in(&state.db, &input).await?;
    Ok(created("Check-in created successfully", CheckInResponse::from(c)))
}

#[utoipa::path(get, path = "/api/v1/check-ins/{id}", tag = "check-ins", params(("id" = i32, Path, description = "Check-in id")),
    responses((status = 200, description = "Check-in", body = CheckInResponse), (status = 404, body = ErrorBody)))]
pub async fn get_one(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let c = check_in_service::get_check_in(&state.db, id).await?;
    Ok(ok("Check-in retrieved successfully", CheckInResponse::from(c)))
}

#[utoipa::path(put, path = "/api/v1/check-ins/{id}", tag = "check-ins", params(("id" = i32, Path, description = "Check-in id")), request_body = UpdateCheckIn,
    responses((status = 200, description = "Updated", body = CheckInResponse), (status = 404, body = ErrorBody)))]
pub async fn update(State(state): State<ServerState>, AppPath(id): AppPath<i32>, AppJson(input): AppJson<UpdateCheckIn>) -> Result<Response, ApiError> {
    let c = check_in_service::update_check_in(&state.db, id, &input).await?;
    Ok(ok("Check-in updated successfully", CheckInResponse::from(c)))
}

#[utoipa::path(get, path = "/api/v1/check-ins/reservation/{id}", tag = "check-ins", params(("id" = i32, Path, description = "Reservation id")),
    responses((status = 200, description = "Check-in of one reservation", body = CheckInResponse), (status = 404, body = ErrorBody)))]
pub async fn by_reservation(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let c = check_in_service::get_by_reservation(&state.db, id).await?;
    Ok(ok("Check-in retrieved successfully", CheckInResponse::from(c)))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/check-ins", get(list).post(create))
        .route("/check-ins/:id", get(get_one).put(update))
        .route("/check-ins/reservation/:id", get(by_reservation))
}
