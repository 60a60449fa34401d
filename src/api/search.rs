use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Json};
use serde_json::{Value, json};

use crate::{api, error::SourceError, management::CatalogManager};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 20;

/// `GET /search?keyword=...&page=1&limit=20`
///
/// Runs a keyword search against the active provider and returns the light
/// record list with the total hit count and the echoed page/limit. Unparsable
/// page or limit values fall back to the defaults rather than erroring.
pub async fn search(
    Query(params): Query<HashMap<String, String>>,
    Extension(catalog): Extension<Arc<CatalogManager>>,
) -> Json<Value> {
    let Some(keyword) = params.get("keyword") else {
        return api::failure(&SourceError::MissingParameter("keyword"));
    };

    let page = params
        .get("page")
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PAGE);
    let limit = params
        .get("limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_LIMIT);

    match catalog.search(keyword, page, limit).await {
        Ok(results) => api::success(json!(results)),
        Err(err) => api::failure(&err),
    }
}
