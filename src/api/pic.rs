use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    response::{IntoResponse, Redirect, Response},
};

use crate::{api, error::SourceError, management::CatalogManager};

/// `GET /pic?id=...`
///
/// Redirects to the cover art of a previously searched id instead of serving
/// a JSON body. Parameter and cache-miss failures still answer with the
/// usual envelope.
pub async fn pic(
    Query(params): Query<HashMap<String, String>>,
    Extension(catalog): Extension<Arc<CatalogManager>>,
) -> Response {
    let Some(id) = params.get("id") else {
        return api::failure(&SourceError::MissingParameter("id")).into_response();
    };

    match catalog.pic(id).await {
        Ok(pic_url) => Redirect::temporary(&pic_url).into_response(),
        Err(err) => api::failure(&err).into_response(),
    }
}
