use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use service::db::service_request_service::{self, CreateServiceRequest, UpdateServiceRequest};
use service::views::{ServiceRequestDetailResponse, ServiceRequestResponse};

use crate::errors::ApiError;
use crate::extractor::{AppJson, AppPath, AppQuery};
use crate::response::{created, deleted, ok, paged, ErrorBody, StatusPageQuery};
use crate::state::ServerState;

fn records(list: Vec<models::service_request::Model>) -> Vec<ServiceRequestResponse> {
    list.into_iter().map(Into::into).collect()
}

#[utoipa::path(get, path = "/api/v1/service-requests", tag = "service-requests", params(StatusPageQuery),
    responses((status = 200, description = "Paginated service requests", body = [ServiceRequestResponse])))]
pub async fn list(State(state): State<ServerState>, AppQuery(q): AppQuery<StatusPageQuery>) -> Result<Response, ApiError> {
    let page = service_request_service::list_service_requests(&state.db, q.status.as_deref(), q.pagination()).await?;
    Ok(paged("Service requests retrieved successfully", page, ServiceRequestResponse::from))
}

#[utoipa::path(post, path = "/api/v1/service-requests", tag = "service-requests", request_body = CreateServiceRequest,
    responses((status = 201, description = "Created", body = ServiceRequestResponse), (status = 400, body = ErrorBody)))]
pub async fn create(State(state): State<ServerState>, AppJson(input): AppJson<CreateServiceRequest>) -> Result<Response, ApiError> {
    let r = service_request_service::create_service_request(&state.db, &input).await?;
    Ok(created("Service request created successfully", ServiceRequestResponse::from(r)))
}

#[utoipa::path(get, path = "/api/v1/service-requests/{id}", tag = "service-requests", params(("id" = i32, Path, description = "Service request id")),
    responses((status = 200, description = "Request with guest and room", body = ServiceRequestDetailResponse), (status = 404, body = ErrorBody)))]
pub async fn get_one(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let d = service_request_service::get_service_request_detail(&state.db, id).await?;
    Ok(ok("Service request retrieved successfully", d))
}

#[utoipa::path(put, path = "/api/v1/service-requests/{id}", tag = "service-requests", params(("id" = i32, Path, description = "Service request id")), request_body = UpdateServiceRequest,
    responses((status = 200, description = "Updated", body = ServiceRequestResponse), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update(State(state): State<ServerState>, AppPath(id): AppPath<i32>, AppJson(input): AppJson<UpdateServiceRequest>) -> Result<Response, ApiError> {
    let r = service_request_service::update_service_request(&state.db, id, &input).await?;
    Ok(ok("Service request updated successfully", ServiceRequestResponse::from(r)))
}

#[utoipa::path(delete, path = "/api/v1/service-requests/{id}", tag = "service-requests", params(("id" = i32, Path, description = "Service request id")),
    responses((status = 200, description = "Deleted"), (status = 404, body = ErrorBody)))]
pub async fn delete(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    service_request_service::delete_service_request(&state.db, id).await?;
    Ok(deleted("Service request deleted successfully"))
}

#[utoipa::path(get, path = "/api/v1/service-requests/reservation/{id}", tag = "service-requests", params(("id" = i32, Path, description = "Reservation id")),
    responses((status = 200, description = "Requests of one reservation", body = [ServiceRequestResponse])))]
pub async fn by_reservation(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let list = service_request_service::list_by_reservation(&state.db, id).await?;
    Ok(ok("Service requests retrieved successfully", records(list)))
}

#[utoipa::path(get, path = "/api/v1/service-requests/guest/{id}", tag = "service-requests", params(("id" = i32, Path, description = "Guest id")),
    responses((status = 200, description = "Requests of one guest", body = [ServiceRequestResponse])))]
pub async fn by_guest(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let list = service_request_service::list_by_guest(&state.db, id).await?;
    Ok(ok("Service requests retrieved successfully", records(list)))
}

#[utoipa::path(get, path = "/api/v1/service-requests/status/{status}", tag = "service-requests", params(("status" = String, Path, description = "Exact status")),
    responses((status = 200, description = "Requests with one status", body = [ServiceRequestResponse])))]
pub async fn by_status(State(state): State<ServerState>, AppPath(status): AppPath<String>) -> Result<Response, ApiError> {
    let list = service_request_service::list_by_status(&state.db, &status).await?;
    Ok(ok("Service requests retrieved successfully", records(list)))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/service-requests", get(list).post(create))
        .route("/service-requests/:id", get(get_one).put(update).delete(delete))
        .route("/service-requests/reservation/:id", get(by_reservation))
        .route("/service-requests/guest/:id", get(by_guest))
        .route("/service-requests/status/:status", get(by_status))
}
