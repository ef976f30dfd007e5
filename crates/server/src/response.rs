//! Response envelopes shared by every handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use service::pagination::{Page, Pagination};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PageMeta {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub total_pages: u64,
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub success: bool,
    pub message: String,
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// `page` and `page_size` query parameters; out-of-range values are clamped.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

/// Paginated list narrowed by an exact `status`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusPageQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub status: Option<String>,
}

impl StatusPageQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.page_size)
    }
}

/// Body of the `PUT .../:id/status` endpoints.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct StatusInput {
    #[serde(default)]
    pub status: String,
}

impl From<&PageQuery> for Pagination {
    fn from(q: &PageQuery) -> Self {
        Pagination::new(q.page, q.page_size)
    }
}

pub fn ok<T: Serialize>(message: &str, data: T) -> Response {
    Json(ApiResponse { success: true, message: message.to_string(), data }).into_response()
}

pub fn created<T: Serialize>(message: &str, data: T) -> Response {
    (StatusCode::CREATED, Json(ApiResponse { success: true, message: message.to_string(), data })).into_response()
}

pub fn deleted(message: &str) -> Response {
    ok(message, serde_json::Value::Null)
}

/// Paginated envelope; `map` turns stored rows into their response shape.
pub fn paged<M, T, F>(message: &str, page: Page<M>, map: F) -> Response
where
    T: Serialize,
    F: FnMut(M) -> T,
{
    let page = page.map(map);
    let meta = PageMeta {
        page: page.page,
        page_size: page.page_size,
        total: page.total,
        total_pages: page.total_pages,
    };
    Json(Paginated { success: true, message: message.to_string(), data: page.items, meta }).into_response()
}
