use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use service::db::guest_service::{self, CreateGuest, UpdateGuest};
use service::pagination::Pagination;
use service::views::{GuestAiInsightsResponse, GuestDetailResponse, GuestHistoryResponse, GuestPreferencesResponse, GuestResponse};
use utoipa::IntoParams;

use crate::errors::ApiError;
use crate::extractor::{AppJson, AppPath, AppQuery};
use crate::response::{created, deleted, ok, paged, ErrorBody};
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GuestListQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    /// Substring of name or email.
    pub search: Option<String>,
}

#[utoipa::path(get, path = "/api/v1/guests", tag = "guests", params(GuestListQuery),
    responses((status = 200, description = "Paginated guests", body = [GuestResponse])))]
pub async fn list(State(state): State<ServerState>, AppQuery(q): AppQuery<GuestListQuery>) -> Result<Response, ApiError> {
    let page = guest_service::list_guests(&state.db, q.search.as_deref(), Pagination::new(q.page, q.page_size)).await?;
    Ok(paged("Guests retrieved successfully", page, GuestResponse::from))
}

#[utoipa::path(post, path = "/api/v1/guests", tag = "guests", request_body = CreateGuest,
    responses((status = 201, description = "Created", body = GuestResponse), (status = 400, body = ErrorBody), (status = 409, body = ErrorBody)))]
pub async fn create(State(state): State<ServerState>, AppJson(input): AppJson<CreateGuest>) -> Result<Response, ApiError> {
    let g = guest_service::create_guest(&state.db, &input).await?;
    Ok(created("Guest created successfully", GuestResponse::from(g)))
}

#[utoipa::path(get, path = "/api/v1/guests/{id}", tag = "guests", params(("id" = i32, Path, description = "Guest id")),
    responses((status = 200, description = "Guest with stays, preferences and statistics", body = GuestDetailResponse), (status = 404, body = ErrorBody)))]
pub async fn get_one(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let detail = guest_service::get_guest_detail(&state.db, id).await?;
    Ok(ok("Guest retrieved successfully", detail))
}

#[utoipa::path(put, path = "/api/v1/guests/{id}", tag = "guests", params(("id" = i32, Path, description = "Guest id")), request_body = UpdateGuest,
    responses((status = 200, description = "Updated", body = GuestResponse), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody), (status = 409, body = ErrorBody)))]
pub async fn update(State(state): State<ServerState>, AppPath(id): AppPath<i32>, AppJson(input): AppJson<UpdateGuest>) -> Result<Response, ApiError> {
    let g = guest_service::update_guest(&state.db, id, &input).await?;
    Ok(ok("Guest updated successfully", GuestResponse::from(g)))
}

#[utoipa::path(delete, path = "/api/v1/guests/{id}", tag = "guests", params(("id" = i32, Path, description = "Guest id")),
    responses((status = 200, description = "Deleted"), (status = 404, body = ErrorBody)))]
pub async fn delete(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    guest_service::delete_guest(&state.db, id).await?;
    Ok(deleted("Guest deleted successfully"))
}

#[utoipa::path(get, path = "/api/v1/guests/{id}/history", tag = "guests", params(("id" = i32, Path, description = "Guest id")),
    responses((status = 200, description = "Stays with rooms", body = GuestHistoryResponse), (status = 404, body = ErrorBody)))]
pub async fn history(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let h = guest_service::get_guest_history(&state.db, id).await?;
    Ok(ok("Guest history retrieved successfully", h))
}

#[utoipa::path(get, path = "/api/v1/guests/{id}/preferences", tag = "guests", params(("id" = i32, Path, description = "Guest id")),
    responses((status = 200, description = "Preferences", body = GuestPreferencesResponse), (status = 404, body = ErrorBody)))]
pub async fn preferences(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let p = guest_service::get_preferences(&state.db, id).await?;
    Ok(ok("Guest preferences retrieved successfully", p))
}

#[utoipa::path(get, path = "/api/v1/guests/{id}/ai-insights", tag = "guests", params(("id" = i32, Path, description = "Guest id")),
    responses((status = 200, description = "Stored insights", body = GuestAiInsightsResponse), (status = 404, body = ErrorBody)))]
pub async fn ai_insights(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let i = guest_service::get_ai_insights(&state.db, id).await?;
    Ok(ok("Guest AI insights retrieved successfully", i))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/guests", get(list).post(create))
        .route("/guests/:id", get(get_one).put(update).delete(delete))
        .route("/guests/:id/history", get(history))
        .route("/guests/:id/preferences", get(preferences))
        .route("/guests/:id/ai-insights", get(ai_insights))
}
