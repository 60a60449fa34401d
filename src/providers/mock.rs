use async_trait::async_trait;

use crate::{
    error::SourceError,
    types::{Lyric, PlaybackUrl, SourceId, Track},
    utils,
};

use super::SourceProvider;

/// Bitrate reported for every mock catalog entry.
const MOCK_BITRATE_KBPS: u32 = 320;

/// A provider backed by a fixed in-memory catalog of three songs.
///
/// Zero configuration and zero network access: search matches the keyword
/// case-insensitively against title or artist, and every record already
/// carries its playback URL and lyric, so resolution never leaves the
/// process. This is the default provider and the backbone of the test suite.
pub struct MockProvider {
    catalog: Vec<Track>,
}

fn mock_track(
    id: &str,
    title: &str,
    artist: &str,
    album: &str,
    duration: u64,
    pic: &str,
    url: &str,
    lyric: &str,
) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        duration,
        pic: pic.to_string(),
        url: url.to_string(),
        source: SourceId::Mock,
        resolution_token: None,
        lyric: Lyric {
            blocks: utils::blocks_from_lines(lyric),
            translation: String::new(),
        },
    }
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            catalog: vec![
                mock_track(
                    "1",
                    "晴天",
                    "周杰伦",
                    "叶惠美",
                    267,
                    "https://example.com/cover/qingtian.jpg",
                    "https://example.com/music/qingtian.mp3",
                    "[00:00.00]词: 方文山 曲: 周杰伦\n[00:05.00]故事的小黄花",
                ),
                mock_track(
                    "2",
                    "夜曲",
                    "周杰伦",
                    "十一月的萧邦",
                    285,
                    "https://example.com/cover/yequ.jpg",
                    "https://example.com/music/yequ.mp3",
                    "[00:00.00]词: 方文山 曲: 周杰伦\n[00:05.00]一群嗜血的蚂蚁",
                ),
                mock_track(
                    "3",
                    "稻香",
                    "周杰伦",
                    "稻香",
                    235,
                    "https://example.com/cover/daoxiang.jpg",
                    "https://example.com/music/daoxiang.mp3",
                    "[00:00.00]词: 周杰伦 曲: 周杰伦\n[00:05.00]稻花香里说丰年",
                ),
            ],
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceProvider for MockProvider {
    fn id(&self) -> SourceId {
        SourceId::Mock
    }

    // The mock catalog is smaller than any sensible page, so page and limit
    // only echo into the response envelope and never cut the result list.
    async fn search(&self, keyword: &str, _page: u32, _limit: u32) -> (Vec<Track>, u64) {
        let needle = keyword.to_lowercase();
        let hits: Vec<Track> = self
            .catalog
            .iter()
            .filter(|track| {
                track.title.to_lowercase().contains(&needle)
                    || track.artist.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        let total = hits.len() as u64;
        (hits, total)
    }

    async fn resolve_url(&self, track: &Track) -> Result<PlaybackUrl, SourceError> {
        if track.url.is_empty() {
            return Err(SourceError::PlaybackUnavailable);
        }

        Ok(PlaybackUrl {
            url: utils::ensure_https(&track.url),
            br: MOCK_BITRATE_KBPS,
        })
    }

    async fn resolve_lyric(&self, track: &Track) -> Result<Lyric, SourceError> {
        Ok(track.lyric.clone())
    }
}
