//! # Provider Module
//!
//! This module contains one adapter per upstream music catalog and the trait
//! they all implement. It is the normalization layer of the server: every
//! adapter knows how to search its upstream, how to turn the upstream's own
//! schema into the unified [`Track`] shape, and how to complete the pieces a
//! search cannot deliver (playback URL, lyrics) in a later call.
//!
//! ## Adapters
//!
//! - [`MockProvider`] - a fixed in-memory catalog, zero configuration, used
//!   as the default provider and by the test suite
//! - [`MiguProvider`] - the copyright-token pattern: search yields a separate
//!   `copyrightId` that is required for every play-info and lyric lookup
//! - [`NeteaseProvider`] - the direct multi-bitrate pattern: search and
//!   playback URL are independent endpoints keyed by the same id, with a
//!   requested target bitrate of 320 kbps
//!
//! ## Contract
//!
//! `search` fails soft: any transport error, timeout or non-success upstream
//! status is logged and absorbed into an empty result set, because a music
//! player client treats "no results" and "provider down" identically.
//!
//! `resolve_url` and `resolve_lyric` operate on a cached [`Track`] handed in
//! by the catalog façade; adapters never consult the cache themselves and
//! never re-run a search. A record that already carries a direct URL is
//! answered without an upstream call.
//!
//! Upstream authentication is limited to static headers (Referer and friends)
//! per endpoint; there is no token refresh or signing flow.

pub mod migu;
pub mod mock;
pub mod netease;

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::Client;

pub use migu::MiguProvider;
pub use mock::MockProvider;
pub use netease::NeteaseProvider;

use crate::{
    config,
    error::SourceError,
    types::{Lyric, PlaybackUrl, SourceId, Track},
};

/// A catalog provider adapter. Exactly one implementation is active per
/// server instance, selected at startup via [`active_provider`].
#[async_trait]
pub trait SourceProvider: Send + Sync {
    /// The source tag stamped on every record this adapter produces.
    fn id(&self) -> SourceId;

    /// Searches the upstream catalog.
    ///
    /// `page` is 1-based, `limit` bounds the page size. Returns the full
    /// records for this page plus the upstream's total hit count. Never
    /// errors: upstream trouble yields `(vec![], 0)`.
    async fn search(&self, keyword: &str, page: u32, limit: u32) -> (Vec<Track>, u64);

    /// Resolves a playback URL for a record previously produced by this
    /// adapter's `search`.
    async fn resolve_url(&self, track: &Track) -> Result<PlaybackUrl, SourceError>;

    /// Resolves the lyric payload for a record previously produced by this
    /// adapter's `search`.
    async fn resolve_lyric(&self, track: &Track) -> Result<Lyric, SourceError>;
}

/// Builds the adapter for a provider tag.
pub fn provider_for(id: SourceId) -> Arc<dyn SourceProvider> {
    match id {
        SourceId::Mock => Arc::new(MockProvider::new()),
        SourceId::Migu => Arc::new(MiguProvider::new()),
        SourceId::Netease => Arc::new(NeteaseProvider::new()),
    }
}

/// Builds the provider selected by the `SOURCE_PROVIDER` configuration value.
pub fn active_provider() -> crate::Res<Arc<dyn SourceProvider>> {
    let id: SourceId = config::source_provider().parse()?;
    Ok(provider_for(id))
}

/// HTTP client shared by the upstream-backed adapters, carrying the bounded
/// per-request timeout from configuration.
pub(crate) fn upstream_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(config::upstream_timeout_secs()))
        .build()
        .expect("failed to build upstream http client")
}
