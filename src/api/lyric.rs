use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Json};
use serde_json::{Value, json};

use crate::{api, error::SourceError, management::CatalogManager};

/// `GET /lyric?id=...`
///
/// Serves the flattened lyric pair for a previously searched id. The second
/// channel is the translated lyric and stays empty for providers without one.
pub async fn lyric(
    Query(params): Query<HashMap<String, String>>,
    Extension(catalog): Extension<Arc<CatalogManager>>,
) -> Json<Value> {
    let Some(id) = params.get("id") else {
        return api::failure(&SourceError::MissingParameter("id"));
    };

    match catalog.lyric(id).await {
        Ok((lyric, tlyric)) => api::success(json!({
            "id": id,
            "lyric": lyric,
            "tlyric": tlyric
        })),
        Err(err) => api::failure(&err),
    }
}
