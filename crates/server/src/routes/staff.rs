use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use service::db::staff_service::{self, CreateStaff, StaffFilter, UpdateStaff};
use service::pagination::Pagination;
use service::views::StaffResponse;
use utoipa::IntoParams;

use crate::errors::ApiError;
use crate::extractor::{AppJson, AppPath, AppQuery};
use crate::response::{created, deleted, ok, paged, ErrorBody};
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StaffListQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub role: Option<String>,
    pub status: Option<String>,
}

#[utoipa::path(get, path = "/api/v1/staff", tag = "staff", params(StaffListQuery),
    responses((status = 200, description = "Paginated staff", body = [StaffResponse])))]
pub async fn list(State(state): State<ServerState>, AppQuery(q): AppQuery<StaffListQuery>) -> Result<Response, ApiError> {
    let filter = StaffFilter { role: q.role, status: q.status };
    let page = staff_service::list_staff(&state.db, &filter, Pagination::new(q.page, q.page_size)).await?;
    Ok(paged("Staff retrieved successfully", page, StaffResponse::from))
}

#[utoipa::path(post, path = "/api/v1/staff", tag = "staff", request_body = CreateStaff,
    responses((status = 201, description = "Created", body = StaffResponse), (status = 400, body = ErrorBody), (status = 409, body = ErrorBody)))]
pub async fn create(State(state): State<ServerState>, AppJson(input): AppJson<CreateStaff>) -> Result<Response, ApiError> {
    let s = staff_service::create_staff(&state.db, &input).await?;
    Ok(created("Staff member created successfully", StaffResponse::from(s)))
}

#[utoipa::path(get, path = "/api/v1/staff/{id}", tag = "staff", params(("id" = i32, Path, description = "Staff id")),
    responses((status = 200, description = "Staff member", body = StaffResponse), (status = 404, body = ErrorBody)))]
pub async fn get_one(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let s = staff_service::get_staff(&state.db, id).await?;
    Ok(ok("Staff member retrieved successfully", StaffResponse::from(s)))
}

#[utoipa::path(put, path = "/api/v1/staff/{id}", tag = "staff", params(("id" = i32, Path, description = "Staff id")), request_body = UpdateStaff,
    responses((status = 200, description = "Updated", body = StaffResponse), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody), (status = 409, body = ErrorBody)))]
pub async fn update(State(state): State<ServerState>, AppPath(id): AppPath<i32>, AppJson(input): AppJson<UpdateStaff>) -> Result<Response, ApiError> {
    let s = staff_service::update_staff(&state.db, id, &input).await?;
    Ok(ok("Staff member updated successfully", StaffResponse::from(s)))
}

#[utoipa::path(delete, path = "/api/v1/staff/{id}", tag = "staff", params(("id" = i32, Path, description = "Staff id")),
    responses((status = 200, description = "Deleted"), (status = 404, body = ErrorBody)))]
pub async fn delete(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    staff_service::delete_staff(&state.db, id).await?;
    Ok(deleted("Staff member deleted successfully"))
}

#[utoipa::path(get, path = "/api/v1/staff/role/{role}", tag = "staff", params(("role" = String, Path, description = "Role")),
    responses((status = 200, description = "Staff with one role", body = [StaffResponse])))]
pub async fn by_role(State(state): State<ServerState>, AppPath(role): AppPath<String>) -> Result<Response, ApiError> {
    let list = staff_service::list_by_role(&state.db, &role).await?;
    let data: Vec<StaffResponse> = list.into_iter().map(Into::into).collect();
    Ok(ok("Staff retrieved successfully", data))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/staff", get(list).post(create))
        .route("/staff/:id", get(get_one).put(update).delete(delete))
        .route("/staff/role/:role", get(by_role))
}
