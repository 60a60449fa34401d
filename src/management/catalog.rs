use std::sync::Arc;

use crate::{
    error::SourceError,
    management::TrackCache,
    providers::SourceProvider,
    types::{PlaybackUrl, SearchPage, SourceId, TrackDetail, TrackSummary},
    utils, warning,
};

/// The single entry point for catalog queries.
///
/// Orchestrates the active provider and the track cache: a search runs
/// against the provider and fills the cache with every full record before the
/// light results are handed back; detail, url, lyric and cover requests are
/// answered strictly from the cache, with the provider only asked to complete
/// the missing piece (playback URL, lyric) of an already-cached record.
pub struct CatalogManager {
    provider: Arc<dyn SourceProvider>,
    cache: TrackCache,
}

impl CatalogManager {
    pub fn new(provider: Arc<dyn SourceProvider>, cache_capacity: usize) -> Self {
        Self {
            provider,
            cache: TrackCache::new(cache_capacity),
        }
    }

    /// Tag of the active provider.
    pub fn source(&self) -> SourceId {
        self.provider.id()
    }

    /// Searches the active provider and returns one page of light records.
    ///
    /// Every id in the returned list is cached before this returns, so a
    /// follow-up detail, url or lyric request for it cannot race an empty
    /// cache entry.
    pub async fn search(
        &self,
        keyword: &str,
        page: u32,
        limit: u32,
    ) -> Result<SearchPage, SourceError> {
        if keyword.trim().is_empty() {
            return Err(SourceError::MissingParameter("keyword"));
        }

        let (tracks, total) = self.provider.search(keyword, page, limit).await;

        let list: Vec<TrackSummary> = tracks.iter().map(TrackSummary::from).collect();
        for track in tracks {
            self.cache.put(track.id.clone(), track);
        }

        Ok(SearchPage {
            list,
            total,
            page,
            limit,
        })
    }

    /// Returns the full cached record. Detail is fully satisfied by
    /// search-time data; no upstream call is made.
    pub async fn song(&self, id: &str) -> Result<TrackDetail, SourceError> {
        let track = self.cache.get(id).ok_or(SourceError::NotFound)?;
        Ok(TrackDetail::from(&track))
    }

    /// Resolves the playback URL for a previously searched id.
    pub async fn url(&self, id: &str) -> Result<PlaybackUrl, SourceError> {
        let track = self.cache.get(id).ok_or(SourceError::NotFound)?;
        self.provider.resolve_url(&track).await
    }

    /// Resolves the lyric for a previously searched id, flattened into the
    /// `(lyric, tlyric)` wire pair. Upstream trouble degrades to empty
    /// lyrics rather than an error.
    pub async fn lyric(&self, id: &str) -> Result<(String, String), SourceError> {
        let track = self.cache.get(id).ok_or(SourceError::NotFound)?;

        match self.provider.resolve_lyric(&track).await {
            Ok(lyric) => Ok(utils::flatten_lyric(&lyric)),
            Err(SourceError::Upstream(msg)) => {
                warning!("Lyric resolution failed, serving empty lyric: {}", msg);
                Ok((String::new(), String::new()))
            }
            Err(other) => Err(other),
        }
    }

    /// Returns the https-normalized cover URL for a previously searched id.
    pub async fn pic(&self, id: &str) -> Result<String, SourceError> {
        let track = self.cache.get(id).ok_or(SourceError::NotFound)?;
        Ok(utils::ensure_https(&track.pic))
    }

    /// Number of records currently cached.
    pub fn cached_tracks(&self) -> usize {
        self.cache.len()
    }
}
