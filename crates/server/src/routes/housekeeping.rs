use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use service::db::housekeeping_service::{self, CreateHousekeepingRequest, UpdateHousekeepingRequest};
use service::views::HousekeepingRequestResponse;

use crate::errors::ApiError;
use crate::extractor::{AppJson, AppPath, AppQuery};
use crate::response::{created, deleted, ok, paged, ErrorBody, StatusPageQuery};
use crate::state::ServerState;

fn records(list: Vec<models::housekeeping_request::Model>) -> Vec<HousekeepingRequestResponse> {
    list.into_iter().map(Into::into).collect()
}

#[utoipa::path(get, path = "/api/v1/housekeeping-requests", tag = "housekeeping-requests", params(StatusPageQuery),
    responses((status = 200, description = "Paginated housekeeping requests", body = [HousekeepingRequestResponse])))]
pub async fn list(State(state): State<ServerState>, AppQuery(q): AppQuery<StatusPageQuery>) -> Result<Response, ApiError> {
    let page = housekeeping_service::list_housekeeping(&state.db, q.status.as_deref(), q.pagination()).await?;
    Ok(paged("Housekeeping requests retrieved successfully", page, HousekeepingRequestResponse::from))
}

#[utoipa::path(post, path = "/api/v1/housekeeping-requests", tag = "housekeeping-requests", request_body = CreateHousekeepingRequest,
    responses((status = 201, description = "Created", body = HousekeepingRequestResponse), (status = 400, body = ErrorBody)))]
pub async fn create(State(state): State<ServerState>, AppJson(input): AppJson<CreateHousekeepingRequest>) -> Result<Response, ApiError> {
    let h = housekeeping_service::create_housekeeping(&state.db, &input).await?;
    Ok(created("Housekeeping request created successfully", HousekeepingRequestResponse::from(h)))
}

#[utoipa::path(get, path = "/api/v1/housekeeping-requests/{id}", tag = "housekeeping-requests", params(("id" = i32, Path, description = "Housekeeping request id")),
    responses((status = 200, description = "Housekeeping request", body = HousekeepingRequestResponse), (status = 404, body = ErrorBody)))]
pub async fn get_one(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let h = housekeeping_service::get_housekeeping(&state.db, id).await?;
    Ok(ok("Housekeeping request retrieved successfully", HousekeepingRequestResponse::from(h)))
}

#[utoipa::path(put, path = "/api/v1/housekeeping-requests/{id}", tag = "housekeeping-requests", params(("id" = i32, Path, description = "Housekeeping request id")), request_body = UpdateHousekeepingRequest,
    responses((status = 200, description = "Updated", body = HousekeepingRequestResponse), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update(State(state): State<ServerState>, AppPath(id): AppPath<i32>, AppJson(input): AppJson<UpdateHousekeepingRequest>) -> Result<Response, ApiError> {
    let h = housekeeping_service::update_housekeeping(&state.db, id, &input).await?;
    Ok(ok("Housekeeping request updated successfully", HousekeepingRequestResponse::from(h)))
}

#[utoipa::path(delete, path = "/api/v1/housekeeping-requests/{id}", tag = "housekeeping-requests", params(("id" = i32, Path, description = "Housekeeping request id")),
    responses((status = 200, description = "Deleted"), (status = 404, body = ErrorBody)))]
pub async fn delete(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    housekeeping_service::delete_housekeeping(&state.db, id).await?;
    Ok(deleted("Housekeeping request deleted successfully"))
}

#[utoipa::path(get, path = "/api/v1/housekeeping-requests/reservation/{id}", tag = "housekeeping-requests", params(("id" = i32, Path, description = "Reservation id")),
    responses((status = 200, description = "Requests of one reservation", body = [HousekeepingRequestResponse])))]
pub async fn by_reservation(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let list = housekeeping_service::list_by_reservation(&state.db, id).await?;
    Ok(ok("Housekeeping requests retrieved successfully", records(list)))
}

#[utoipa::path(get, path = "/api/v1/housekeeping-requests/status/{status}", tag = "housekeeping-requests", params(("status" = String, Path, description = "Exact status")),
    responses((status = 200, description = "Requests with one status", body = [HousekeepingRequestResponse])))]
pub async fn by_status(State(state): State<ServerState>, AppPath(status): AppPath<String>) -> Result<Response, ApiError> {
    let list = housekeeping_service::list_by_status(&state.db, &status).await?;
    Ok(ok("Housekeeping requests retrieved successfully", records(list)))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/housekeeping-requests", get(list).post(create))
        .route("/housekeeping-requests/:id", get(get_one).put(update).delete(delete))
        .route("/housekeeping-requests/reservation/:id", get(by_reservation))
        .route("/housekeeping-requests/status/:status", get(by_status))
}
