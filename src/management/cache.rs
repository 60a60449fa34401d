use std::{num::NonZeroUsize, sync::Mutex};

use lru::LruCache;

use crate::types::Track;

/// Thread-safe LRU mapping from song id to the full record produced at
/// search time.
///
/// `put` and `get` are the only access path to the shared map. A later search
/// for the same id overwrites the prior entry, and an id evicted by the LRU
/// policy resolves as not-found until the next search; both are expected
/// behavior, not bugs. Entries live for the process lifetime at most.
pub struct TrackCache {
    tracks: Mutex<LruCache<String, Track>>,
}

impl TrackCache {
    /// Creates a cache bounded to `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity is at least 1");
        Self {
            tracks: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Stores or overwrites the record for `id` (last write wins).
    pub fn put(&self, id: String, track: Track) {
        if let Ok(mut tracks) = self.tracks.lock() {
            tracks.put(id, track);
        }
    }

    /// Returns a clone of the cached record, refreshing its LRU position.
    pub fn get(&self, id: &str) -> Option<Track> {
        self.tracks.lock().ok()?.get(id).cloned()
    }

    /// Number of records currently cached.
    pub fn len(&self) -> usize {
        self.tracks.lock().map(|tracks| tracks.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
