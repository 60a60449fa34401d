use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Json};
use serde_json::{Value, json};

use crate::{api, error::SourceError, management::CatalogManager};

/// `GET /url?id=...`
///
/// Resolves the playback URL for a previously searched id. A cached id the
/// provider cannot license answers with a playback-unavailable failure,
/// distinct from the not-found failure of an unsearched id.
pub async fn url(
    Query(params): Query<HashMap<String, String>>,
    Extension(catalog): Extension<Arc<CatalogManager>>,
) -> Json<Value> {
    let Some(id) = params.get("id") else {
        return api::failure(&SourceError::MissingParameter("id"));
    };

    match catalog.url(id).await {
        Ok(playback) => api::success(json!({
            "id": id,
            "url": playback.url,
            "br": playback.br
        })),
        Err(err) => api::failure(&err),
    }
}
