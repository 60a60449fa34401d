//! # API Module
//!
//! HTTP handlers for the LX Music source protocol endpoints. Every endpoint
//! answers with the uniform JSON envelope:
//!
//! - success: `{"success": true, "data": <payload>}`
//! - failure: `{"success": false, "message": <string>, "code": -1}`
//!
//! The wire-level HTTP status is always 200, whatever the outcome: parameter
//! errors, unknown ids and licensing restrictions are all structured
//! failures inside the envelope, and upstream provider trouble never turns
//! into a 5xx. The two exceptions are the routing-level 404 for unknown
//! paths and the `/pic` redirect, which hands the cover art off with a 3xx
//! instead of a JSON body.
//!
//! ## Endpoints
//!
//! - [`index`] - source metadata and endpoint map
//! - [`search`] - keyword search, light records plus pagination echo
//! - [`song`] - full record for a previously searched id
//! - [`url`] - playback URL and bitrate for a previously searched id
//! - [`lyric`] - flattened lyric pair for a previously searched id
//! - [`pic`] - redirect to the cover art of a previously searched id
//! - [`check`] - update-check stub for the client
//!
//! All handlers share the [`crate::management::CatalogManager`] via an axum
//! `Extension` layer, mirroring how the routes are assembled in
//! [`crate::server`].

mod lyric;
mod meta;
mod pic;
mod search;
mod song;
mod url;

use axum::response::Json;
use serde_json::{Value, json};

use crate::error::SourceError;

pub use lyric::lyric;
pub use meta::{check, index};
pub use pic::pic;
pub use search::search;
pub use song::song;
pub use url::url;

/// Wraps a payload in the success envelope.
pub fn success(data: Value) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": data
    }))
}

/// Wraps an outcome from the taxonomy in the failure envelope.
pub fn failure(err: &SourceError) -> Json<Value> {
    Json(json!({
        "success": false,
        "message": err.to_string(),
        "code": err.code()
    }))
}
