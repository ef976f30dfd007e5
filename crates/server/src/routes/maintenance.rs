use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use service::db::maintenance_service::{self, CreateMaintenanceIssue, UpdateMaintenanceIssue};
use service::views::MaintenanceIssueResponse;

use crate::errors::ApiError;
use crate::extractor::{AppJson, AppPath, AppQuery};
use crate::response::{created, deleted, ok, paged, ErrorBody, StatusPageQuery};
use crate::state::ServerState;

fn records(list: Vec<models::maintenance_issue::Model>) -> Vec<MaintenanceIssueResponse> {
    list.into_iter().map(Into::into).collect()
}

#[utoipa::path(get, path = "/api/v1/maintenance-issues", tag = "maintenance-issues", params(StatusPageQuery),
    responses((status = 200, description = "Paginated maintenance issues", body = [MaintenanceIssueResponse])))]
pub async fn list(State(state): State<ServerState>, AppQuery(q): AppQuery<StatusPageQuery>) -> Result<Response, ApiError> {
    let page = maintenance_service::list_issues(&state.db, q.status.as_deref(), q.pagination()).await?;
    Ok(paged("Maintenance issues retrieved successfully", page, MaintenanceIssueResponse::from))
}

#[utoipa::path(post, path = "/api/v1/maintenance-issues", tag = "maintenance-issues", request_body = CreateMaintenanceIssue,
    responses((status = 201, description = "Created", body = MaintenanceIssueResponse), (status = 400, body = ErrorBody)))]
pub async fn create(State(state): State<ServerState>, AppJson(input): AppJson<CreateMaintenanceIssue>) -> Result<Response, ApiError> {
    let m = maintenance_service::create_issue(&state.db, &input).await?;
    Ok(created("Maintenance issue created successfully", MaintenanceIssueResponse::from(m)))
}

#[utoipa::path(get, path = "/api/v1/maintenance-issues/{id}", tag = "maintenance-issues", params(("id" = i32, Path, description = "Maintenance issue id")),
    responses((status = 200, description = "Maintenance issue", body = MaintenanceIssueResponse), (status = 404, body = ErrorBody)))]
pub async fn get_one(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let m = maintenance_service::get_issue(&state.db, id).await?;
    Ok(ok("Maintenance issue retrieved successfully", MaintenanceIssueResponse::from(m)))
}

#[utoipa::path(put, path = "/api/v1/maintenance-issues/{id}", tag = "maintenance-issues", params(("id" = i32, Path, description = "Maintenance issue id")), request_body = UpdateMaintenanceIssue,
    responses((status = 200, description = "Updated", body = MaintenanceIssueResponse), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update(State(state): State<ServerState>, AppPath(id): AppPath<i32>, AppJson(input): AppJson<UpdateMaintenanceIssue>) -> Result<Response, ApiError> {
    let m = maintenance_service::update_issue(&state.db, id, &input).await?;
    Ok(ok("Maintenance issue updated successfully", MaintenanceIssueResponse::from(m)))
}

#[utoipa::path(delete, path = "/api/v1/maintenance-issues/{id}", tag = "maintenance-issues", params(("id" = i32, Path, description = "Maintenance issue id")),
    responses((status = 200, description = "Deleted"), (status = 404, body = ErrorBody)))]
pub async fn delete(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    maintenance_service::delete_issue(&state.db, id).await?;
    Ok(deleted("Maintenance issue deleted successfully"))
}

#[utoipa::path(get, path = "/api/v1/maintenance-issues/reservation/{id}", tag = "maintenance-issues", params(("id" = i32, Path, description = "Reservation id")),
    responses((status = 200, description = "Issues of one reservation", body = [MaintenanceIssueResponse])))]
pub async fn by_reservation(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let list = maintenance_service::list_by_reservation(&state.db, id).await?;
    Ok(ok("Maintenance issues retrieved successfully", records(list)))
}

#[utoipa::path(get, path = "/api/v1/maintenance-issues/status/{status}", tag = "maintenance-issues", params(("status" = String, Path, description = "Exact status")),
    responses((status = 200, description = "Issues with one status", body = [MaintenanceIssueResponse])))]
pub async fn by_status(State(state): State<ServerState>, AppPath(status): AppPath<String>) -> Result<Response, ApiError> {
    let list = maintenance_service::list_by_status(&state.db, &status).await?;
    Ok(ok("Maintenance issues retrieved successfully", records(list)))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/maintenance-issues", get(list).post(create))
        .route("/maintenance-issues/:id", get(get_one).put(update).delete(delete))
        .route("/maintenance-issues/reservation/:id", get(by_reservation))
        .route("/maintenance-issues/status/:status", get(by_status))
}
