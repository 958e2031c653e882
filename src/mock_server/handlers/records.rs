//! Handlers shared by every stored record type.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use super::{not_found, problem};
use crate::mock_server::state::{MockRecord, SharedState};
use crate::{ActionResultModel, FetchResult, QueryOptions};

const DEFAULT_PAGE_SIZE: i32 = 250;
const MAX_PAGE_SIZE: i32 = 500;

/// GET /api/v1/{Resource}/{id}
pub async fn retrieve<T: MockRecord>(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Response {
    let state = state.read().await;

    match state.get::<T>(&id) {
        Some(record) => (StatusCode::OK, Json(record.clone())).into_response(),
        None => not_found::<T>(&id),
    }
}

/// GET /api/v1/{Resource}/query
pub async fn query<T: MockRecord>(
    State(state): State<SharedState>,
    Query(options): Query<QueryOptions>,
) -> Response {
    let state = state.read().await;

    let records = match state.query::<T>(options.filter.as_deref(), options.order.as_deref()) {
        Ok(records) => records,
        Err(detail) => return problem(StatusCode::BAD_REQUEST, "Invalid query", detail),
    };

    match paginate(records, options.page_number, options.page_size) {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(detail) => problem(StatusCode::BAD_REQUEST, "Invalid paging", detail),
    }
}

/// POST /api/v1/{Resource}
pub async fn create<T: MockRecord>(
    State(state): State<SharedState>,
    Json(records): Json<Vec<T>>,
) -> Response {
    let mut state = state.write().await;

    let created: Vec<T> = records
        .into_iter()
        .map(|record| state.insert(record))
        .collect();

    (StatusCode::OK, Json(created)).into_response()
}

/// PATCH /api/v1/{Resource}/{id}
pub async fn update<T: MockRecord>(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(changes): Json<Value>,
) -> Response {
    let Value::Object(changes) = changes else {
        return problem(
            StatusCode::BAD_REQUEST,
            "Invalid body",
            "changes must be a JSON object",
        );
    };

    let mut state = state.write().await;

    match state.patch::<T>(&id, &changes) {
        Some(Ok(record)) => (StatusCode::OK, Json(record)).into_response(),
        Some(Err(e)) => problem(StatusCode::BAD_REQUEST, "Invalid body", e.to_string()),
        None => not_found::<T>(&id),
    }
}

/// DELETE /api/v1/{Resource}/{id}
pub async fn delete<T: MockRecord>(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Response {
    let mut state = state.write().await;

    if state.delete::<T>(&id) {
        (StatusCode::OK, Json(ActionResultModel::default())).into_response()
    } else {
        not_found::<T>(&id)
    }
}

/// Slice one page out of the matched records.
///
/// Page numbers are 0-based. The page size defaults to 250 and may not
/// exceed 500.
pub(crate) fn paginate<T>(
    records: Vec<T>,
    page_number: Option<i32>,
    page_size: Option<i32>,
) -> Result<FetchResult<T>, String> {
    let page_number = page_number.unwrap_or(0);
    let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);

    if page_number < 0 {
        return Err(format!("pageNumber must be 0 or greater, got {page_number}"));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(format!(
            "pageSize must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"
        ));
    }

    let total = records.len() as u64;
    let start = page_number as usize * page_size as usize;
    let page: Vec<T> = records
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect();

    Ok(FetchResult::new(
        page,
        page_number as u32,
        page_size as u32,
        Some(total),
    ))
}
