use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, error, management::CatalogManager, success};

pub async fn start_source_server(catalog: Arc<CatalogManager>, address: &str) {
    let app = Router::new()
        .route("/", get(api::index))
        .route("/search", get(api::search))
        .route("/song", get(api::song))
        .route("/url", get(api::url))
        .route("/lyric", get(api::lyric))
        .route("/pic", get(api::pic))
        .route("/check", get(api::check))
        .layer(Extension(catalog));

    let addr = match SocketAddr::from_str(address) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };
    success!("Listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server stopped: {}", e);
    }
}
