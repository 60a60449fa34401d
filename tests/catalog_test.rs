use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tunesource::error::SourceError;
use tunesource::management::{CatalogManager, TrackCache};
use tunesource::providers::{MiguProvider, MockProvider, SourceProvider};
use tunesource::types::{Lyric, PlaybackUrl, SourceId, Track};

fn mock_catalog() -> CatalogManager {
    CatalogManager::new(Arc::new(MockProvider::new()), 100)
}

fn test_track(id: &str, title: &str, pic: &str) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        artist: "unknown artist".to_string(),
        album: "unknown album".to_string(),
        duration: 200,
        pic: pic.to_string(),
        url: "https://example.com/music/test.mp3".to_string(),
        source: SourceId::Mock,
        resolution_token: None,
        lyric: Lyric::default(),
    }
}

/// Serves one prepared batch of records per search call, repeating the last
/// batch once the script runs out.
struct SequencedProvider {
    batches: Mutex<Vec<Vec<Track>>>,
}

impl SequencedProvider {
    fn new(batches: Vec<Vec<Track>>) -> Self {
        Self {
            batches: Mutex::new(batches),
        }
    }
}

#[async_trait]
impl SourceProvider for SequencedProvider {
    fn id(&self) -> SourceId {
        SourceId::Mock
    }

    async fn search(&self, _keyword: &str, _page: u32, _limit: u32) -> (Vec<Track>, u64) {
        let mut batches = self.batches.lock().unwrap();
        let batch = if batches.len() > 1 {
            batches.remove(0)
        } else {
            batches.first().cloned().unwrap_or_default()
        };
        let total = batch.len() as u64;
        (batch, total)
    }

    async fn resolve_url(&self, track: &Track) -> Result<PlaybackUrl, SourceError> {
        Ok(PlaybackUrl {
            url: track.url.clone(),
            br: 320,
        })
    }

    async fn resolve_lyric(&self, track: &Track) -> Result<Lyric, SourceError> {
        Ok(track.lyric.clone())
    }
}

#[tokio::test]
async fn test_search_qingtian_returns_single_mock_track() {
    let catalog = mock_catalog();

    let page = catalog.search("晴天", 1, 20).await.unwrap();
    assert_eq!(page.list.len(), 1);
    assert_eq!(page.total, 1);
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 20);

    let hit = &page.list[0];
    assert_eq!(hit.id, "1");
    assert_eq!(hit.title, "晴天");
    assert_eq!(hit.source, SourceId::Mock);
}

#[tokio::test]
async fn test_url_for_searched_id_returns_mock_url() {
    let catalog = mock_catalog();
    catalog.search("晴天", 1, 20).await.unwrap();

    let playback = catalog.url("1").await.unwrap();
    assert_eq!(playback.url, "https://example.com/music/qingtian.mp3");
    assert_eq!(playback.br, 320);
}

#[tokio::test]
async fn test_every_searched_id_is_resolvable() {
    let catalog = mock_catalog();

    // Artist substring matches the whole catalog.
    let page = catalog.search("周杰伦", 1, 20).await.unwrap();
    assert_eq!(page.list.len(), 3);

    for hit in &page.list {
        assert!(catalog.song(&hit.id).await.is_ok());
        assert!(catalog.url(&hit.id).await.is_ok());
        assert!(catalog.lyric(&hit.id).await.is_ok());
        assert!(catalog.pic(&hit.id).await.is_ok());
    }
}

#[tokio::test]
async fn test_unsearched_id_is_not_found() {
    let catalog = mock_catalog();

    assert!(matches!(
        catalog.song("does-not-exist").await,
        Err(SourceError::NotFound)
    ));
    assert!(matches!(
        catalog.url("does-not-exist").await,
        Err(SourceError::NotFound)
    ));
    assert!(matches!(
        catalog.lyric("does-not-exist").await,
        Err(SourceError::NotFound)
    ));
    assert!(matches!(
        catalog.pic("does-not-exist").await,
        Err(SourceError::NotFound)
    ));

    // A syntactically plausible id is no better than a nonsense one.
    assert!(matches!(
        catalog.song("99").await,
        Err(SourceError::NotFound)
    ));
}

#[tokio::test]
async fn test_empty_keyword_is_a_parameter_error() {
    let catalog = mock_catalog();

    assert!(matches!(
        catalog.search("", 1, 20).await,
        Err(SourceError::MissingParameter("keyword"))
    ));
    assert!(matches!(
        catalog.search("   ", 1, 20).await,
        Err(SourceError::MissingParameter("keyword"))
    ));
}

#[tokio::test]
async fn test_substring_search_matches_title() {
    let catalog = mock_catalog();

    let page = catalog.search("晴", 1, 20).await.unwrap();
    assert_eq!(page.list.len(), 1);
    assert_eq!(page.list[0].id, "1");
}

#[tokio::test]
async fn test_repeated_search_is_idempotent() {
    let catalog = mock_catalog();

    let first = catalog.search("周杰伦", 1, 20).await.unwrap();
    let second = catalog.search("周杰伦", 1, 20).await.unwrap();

    let first_ids: Vec<&str> = first.list.iter().map(|t| t.id.as_str()).collect();
    let second_ids: Vec<&str> = second.list.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(first_ids, second_ids);

    for id in second_ids {
        assert!(catalog.song(id).await.is_ok());
    }
}

#[tokio::test]
async fn test_evicted_id_resolves_as_not_found() {
    // Capacity of one: every put evicts the previous record.
    let catalog = CatalogManager::new(Arc::new(MockProvider::new()), 1);

    let page = catalog.search("周杰伦", 1, 20).await.unwrap();
    assert_eq!(page.list.len(), 3);
    assert_eq!(catalog.cached_tracks(), 1);

    // Only the last-cached record survives.
    assert!(matches!(
        catalog.song("1").await,
        Err(SourceError::NotFound)
    ));
    assert!(catalog.song("3").await.is_ok());
}

#[tokio::test]
async fn test_song_serves_full_cached_record() {
    let catalog = mock_catalog();
    catalog.search("晴天", 1, 20).await.unwrap();

    let detail = catalog.song("1").await.unwrap();
    assert_eq!(detail.id, "1");
    assert_eq!(detail.title, "晴天");
    assert_eq!(detail.artist, "周杰伦");
    assert_eq!(detail.album, "叶惠美");
    assert_eq!(detail.duration, 267);
    assert_eq!(detail.url, "https://example.com/music/qingtian.mp3");
    assert_eq!(detail.source, SourceId::Mock);
    assert!(detail.lyric.contains("故事的小黄花"));
    assert_eq!(detail.tlyric, "");
}

#[tokio::test]
async fn test_lyric_is_flattened_with_newline_per_block() {
    let catalog = mock_catalog();
    catalog.search("晴天", 1, 20).await.unwrap();

    let (lyric, tlyric) = catalog.lyric("1").await.unwrap();
    assert_eq!(lyric, "[00:00.00]词: 方文山 曲: 周杰伦\n[00:05.00]故事的小黄花\n");
    assert_eq!(tlyric, "");
}

#[tokio::test]
async fn test_later_search_overwrites_cached_record() {
    let catalog = CatalogManager::new(
        Arc::new(SequencedProvider::new(vec![
            vec![test_track(
                "7",
                "first pressing",
                "https://example.com/cover/a.jpg",
            )],
            vec![test_track("7", "remaster", "https://example.com/cover/b.jpg")],
        ])),
        100,
    );

    catalog.search("pressing", 1, 20).await.unwrap();
    assert_eq!(catalog.song("7").await.unwrap().title, "first pressing");

    // Same id, fresher upstream data: last write wins, no merge.
    catalog.search("pressing", 1, 20).await.unwrap();
    let detail = catalog.song("7").await.unwrap();
    assert_eq!(detail.title, "remaster");
    assert_eq!(detail.pic, "https://example.com/cover/b.jpg");
    assert_eq!(catalog.cached_tracks(), 1);
}

#[test]
fn test_cache_put_overwrites_same_id() {
    let cache = TrackCache::new(10);
    cache.put("7".to_string(), test_track("7", "first pressing", ""));
    cache.put("7".to_string(), test_track("7", "remaster", ""));

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("7").unwrap().title, "remaster");
}

#[tokio::test]
async fn test_pic_normalizes_cover_scheme_at_the_boundary() {
    // Records straight from a provider may still carry plain-http or
    // scheme-relative covers; the façade upgrades them before they surface.
    let catalog = CatalogManager::new(
        Arc::new(SequencedProvider::new(vec![vec![
            test_track("h", "plain http cover", "http://img.example.com/a.jpg"),
            test_track("r", "scheme relative cover", "//img.example.com/b.jpg"),
        ]])),
        100,
    );
    catalog.search("cover", 1, 20).await.unwrap();

    assert_eq!(
        catalog.pic("h").await.unwrap(),
        "https://img.example.com/a.jpg"
    );
    assert_eq!(
        catalog.pic("r").await.unwrap(),
        "https://img.example.com/b.jpg"
    );
}

#[tokio::test]
async fn test_pic_returns_cover_url() {
    let catalog = mock_catalog();
    catalog.search("稻香", 1, 20).await.unwrap();

    let pic = catalog.pic("3").await.unwrap();
    assert_eq!(pic, "https://example.com/cover/daoxiang.jpg");
}

#[tokio::test]
async fn test_migu_track_without_token_is_playback_unavailable() {
    // A Migu hit whose copyright token is empty cannot be played; the
    // adapter reports that before ever touching the network.
    let provider = MiguProvider::new();
    let track = Track {
        id: "4300".to_string(),
        title: "晴天".to_string(),
        artist: "周杰伦".to_string(),
        album: "叶惠美".to_string(),
        duration: 0,
        pic: String::new(),
        url: String::new(),
        source: SourceId::Migu,
        resolution_token: Some(String::new()),
        lyric: Lyric::default(),
    };

    assert!(matches!(
        provider.resolve_url(&track).await,
        Err(SourceError::PlaybackUnavailable)
    ));

    let track = Track {
        resolution_token: None,
        ..track
    };
    assert!(matches!(
        provider.resolve_url(&track).await,
        Err(SourceError::PlaybackUnavailable)
    ));
}
