//! Company-specific endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::not_found;
use crate::mock_server::state::SharedState;
use crate::{BulkDeleteRequestModel, CompanyModel, DeleteResult};

/// Query parameters for retrieving a single company.
#[derive(Debug, Default, Deserialize)]
pub struct RetrieveQuery {
    pub include: Option<String>,
}

impl RetrieveQuery {
    fn includes(&self, collection: &str) -> bool {
        self.include.as_deref().is_some_and(|include| {
            include
                .split(',')
                .any(|c| c.trim().eq_ignore_ascii_case(collection))
        })
    }
}

/// GET /api/v1/Companies/{id}
///
/// Only the `Contacts` collection is populated; other includes are ignored.
pub async fn retrieve_company(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Query(query): Query<RetrieveQuery>,
) -> Response {
    let state = state.read().await;

    let Some(company) = state.get::<CompanyModel>(&id) else {
        return not_found::<CompanyModel>(&id);
    };

    let mut company = company.clone();
    if query.includes("Contacts") {
        company.contacts = Some(state.contacts_of(&id));
    }

    (StatusCode::OK, Json(company)).into_response()
}

/// DELETE /api/v1/Companies
pub async fn delete_companies(
    State(state): State<SharedState>,
    Json(request): Json<BulkDeleteRequestModel>,
) -> Response {
    let mut state = state.write().await;

    let messages = request
        .id_list
        .iter()
        .filter(|id| !state.delete::<CompanyModel>(id))
        .map(|id| format!("Company '{id}' was not found"))
        .collect();

    (StatusCode::OK, Json(DeleteResult { messages })).into_response()
}
