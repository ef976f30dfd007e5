use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use service::db::check_out_service::{self, CreateCheckOut, UpdateCheckOut};
use service::pagination::Pagination;
use service::views::CheckOutResponse;

use crate::errors::ApiError;
use crate::extractor::{AppJson, AppPath, AppQuery};
use crate::response::{created, ok, paged, ErrorBody, PageQuery};
use crate::state::ServerState;

#[utoipa::path(get, path = "/api/v1/check-outs", tag = "check-outs", params(PageQuery),
    responses((status = 200, description = "Paginated check-outs", body = [CheckOutResponse])))]
pub async fn list(State(state): State<ServerState>, AppQuery(q): AppQuery<PageQuery>) -> Result<Response, ApiError> {
    let page = check_out_service::list_check_outs(&state.db, Pagination::from(&q)).await?;
    Ok(paged("Check-outs retrieved successfully", page, CheckOutResponse::from))
}

#[utoipa::path(post, path = "/api/v1/check-outs", tag = "check-outs", request_body = CreateCheckOut,
    responses((status = 201, description = "Checked out; reservation and room statuses updated", body = CheckOutResponse), (status = 400, body = ErrorBody), (status = 409, body = ErrorBody)))]
pub async fn create(State(state): State<ServerState>, AppJson(input): AppJson<CreateCheckOut>) -> Result<Response, ApiError> {
    let c = check_out_service::create_check_out(&state.db, &input).await?;
    Ok(created("Check-out created successfully", CheckOutResponse::from(c)))
}

#[utoipa::path(get, path = "/api/v1/check-outs/{id}", tag = "check-outs", params(("id" = i32, Path, description = "Check-out id")),
    responses((status = 200, description = "Check-out", body = CheckOutResponse), (status = 404, body = ErrorBody)))]
pub async fn get_one(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let c = check_out_service::get_check_out(&state.db, id).await?;
    Ok(ok("Check-out retrieved successfully", CheckOutResponse::from(c)))
}

#[utoipa::path(put, path = "/api/v1/check-outs/{id}", tag = "check-outs", params(("id" = i32, Path, description = "Check-out id")), request_body = UpdateCheckOut,
    responses((status = 200, description = "Updated", body = CheckOutResponse), (status = 404, body = ErrorBody)))]
pub async fn update(State(state): State<ServerState>, AppPath(id): AppPath<i32>, AppJson(input): AppJson<UpdateCheckOut>) -> Result<Response, ApiError> {
    let c = check_out_service::update_check_out(&state.db, id, &input).await?;
    Ok(ok("Check-out updated successfully", CheckOutResponse::from(c)))
}

#[utoipa::path(get, path = "/api/v1/check-outs/reservation/{id}", tag = "check-outs", params(("id" = i32, Path, description = "Reservation id")),
    responses((status = 200, description = "Check-out of one reservation", body = CheckOutResponse), (status = 404, body = ErrorBody)))]
pub async fn by_reservation(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let c = check_out_service::get_by_reservation(&state.db, id).await?;
    Ok(ok("Check-out retrieved successfully", CheckOutResponse::from(c)))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/check-outs", get(list).post(create))
        .route("/check-outs/:id", get(get_one).put(update))
        .route("/check-outs/reservation/:id", get(by_reservation))
}
