use std::sync::Arc;

use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::{api, management::CatalogManager};

/// Version of the LX Music custom source protocol this server speaks.
const PROTOCOL_VERSION: &str = "2.0.0";

/// `GET /`
///
/// Source metadata for the client: name, author, version, protocol version,
/// the active provider tag and the endpoint map.
pub async fn index(Extension(catalog): Extension<Arc<CatalogManager>>) -> Json<Value> {
    api::success(json!({
        "name": env!("CARGO_PKG_NAME"),
        "author": env!("CARGO_PKG_AUTHORS"),
        "version": env!("CARGO_PKG_VERSION"),
        "protocol": PROTOCOL_VERSION,
        "description": env!("CARGO_PKG_DESCRIPTION"),
        "source": catalog.source(),
        "endpoints": {
            "search": "/search?keyword=keyword&page=1&limit=20",
            "song": "/song?id=songId",
            "url": "/url?id=songId",
            "lyric": "/lyric?id=songId",
            "pic": "/pic?id=songId",
            "check": "/check"
        }
    }))
}

/// `GET /check`
///
/// Update-check stub: reports the running version with an empty update URL
/// and changelog, which the client reads as "up to date".
pub async fn check() -> Json<Value> {
    api::success(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "last_check": chrono::Utc::now().timestamp(),
        "update_url": "",
        "changelog": ""
    }))
}
