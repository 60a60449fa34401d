use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Json};
use serde_json::{Value, json};

use crate::{api, error::SourceError, management::CatalogManager};

/// `GET /song?id=...`
///
/// Serves the full cached record for a previously searched id. An id the
/// cache has never seen (or has evicted) is a not-found failure.
pub async fn song(
    Query(params): Query<HashMap<String, String>>,
    Extension(catalog): Extension<Arc<CatalogManager>>,
) -> Json<Value> {
    let Some(id) = params.get("id") else {
        return api::failure(&SourceError::MissingParameter("id"));
    };

    match catalog.song(id).await {
        Ok(detail) => api::success(json!(detail)),
        Err(err) => api::failure(&err),
    }
}
