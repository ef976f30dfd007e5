use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use service::db::menu_item_service::{self, CreateMenuItem, MenuFilter, UpdateMenuItem};
use service::pagination::Pagination;
use service::views::MenuItemResponse;
use utoipa::IntoParams;

use crate::errors::ApiError;
use crate::extractor::{AppJson, AppPath, AppQuery};
use crate::response::{created, deleted, ok, paged, ErrorBody};
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MenuListQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub category: Option<String>,
    pub available: Option<bool>,
}

#[utoipa::path(get, path = "/api/v1/menu-items", tag = "menu-items", params(MenuListQuery),
    responses((status = 200, description = "Paginated menu items", body = [MenuItemResponse])))]
pub async fn list(State(state): State<ServerState>, AppQuery(q): AppQuery<MenuListQuery>) -> Result<Response, ApiError> {
    let filter = MenuFilter { category: q.category, available: q.available };
    let page = menu_item_service::list_menu_items(&state.db, &filter, Pagination::new(q.page, q.page_size)).await?;
    Ok(paged("Menu items retrieved successfully", page, MenuItemResponse::from))
}

#[utoipa::path(post, path = "/api/v1/menu-items", tag = "menu-items", request_body = CreateMenuItem,
    responses((status = 201, description = "Created", body = MenuItemResponse), (status = 400, body = ErrorBody)))]
pub async fn create(State(state): State<ServerState>, AppJson(input): AppJson<CreateMenuItem>) -> Result<Response, ApiError> {
    let m = menu_item_service::create_menu_item(&state.db, &input).await?;
    Ok(created("Menu item created successfully", MenuItemResponse::from(m)))
}

#[utoipa::path(get, path = "/api/v1/menu-items/{id}", tag = "menu-items", params(("id" = i32, Path, description = "Menu item id")),
    responses((status = 200, description = "Menu item", body = MenuItemResponse), (status = 404, body = ErrorBody)))]
pub async fn get_one(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    let m = menu_item_service::get_menu_item(&state.db, id).await?;
    Ok(ok("Menu item retrieved successfully", MenuItemResponse::from(m)))
}

#[utoipa::path(put, path = "/api/v1/menu-items/{id}", tag = "menu-items", params(("id" = i32, Path, description = "Menu item id")), request_body = UpdateMenuItem,
    responses((status = 200, description = "Updated", body = MenuItemResponse), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update(State(state): State<ServerState>, AppPath(id): AppPath<i32>, AppJson(input): AppJson<UpdateMenuItem>) -> Result<Response, ApiError> {
    let m = menu_item_service::update_menu_item(&state.db, id, &input).await?;
    Ok(ok("Menu item updated successfully", MenuItemResponse::from(m)))
}

#[utoipa::path(delete, path = "/api/v1/menu-items/{id}", tag = "menu-items", params(("id" = i32, Path, description = "Menu item id")),
    responses((status = 200, description = "Deleted"), (status = 404, body = ErrorBody)))]
pub async fn delete(State(state): State<ServerState>, AppPath(id): AppPath<i32>) -> Result<Response, ApiError> {
    menu_item_service::delete_menu_item(&state.db, id).await?;
    Ok(deleted("Menu item deleted successfully"))
}

#[utoipa::path(get, path = "/api/v1/menu-items/category/{category}", tag = "menu-items", params(("category" = String, Path, description = "Category")),
    responses((status = 200, description = "Items in one category", body = [MenuItemResponse])))]
pub async fn by_category(State(state): State<ServerState>, AppPath(category): AppPath<String>) -> Result<Response, ApiError> {
    let list = menu_item_service::list_by_category(&state.db, &category).await?;
    let data: Vec<MenuItemResponse> = list.into_iter().map(Into::into).collect();
    Ok(ok("Menu items retrieved successfully", data))
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/menu-items", get(list).post(create))
        .route("/menu-items/:id", get(get_one).put(update).delete(delete))
        .route("/menu-items/category/:category", get(by_category))
}
