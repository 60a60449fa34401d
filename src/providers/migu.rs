use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config,
    error::SourceError,
    types::{Lyric, PlaybackUrl, SourceId, Track, UNKNOWN_ALBUM, UNKNOWN_ARTIST, UNKNOWN_TITLE},
    utils, warning,
};

use super::SourceProvider;

/// Bitrate of the PQ format returned by the play-info endpoint.
const PLAY_INFO_BITRATE_KBPS: u32 = 128;

/// Search result envelope of the `scr_search_tag` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MiguSearchResponse {
    #[serde(default)]
    pub musics: Option<Vec<MiguMusic>>,
    /// Total hit count across all pages.
    #[serde(rename = "musicsCount", default)]
    pub musics_count: Option<u64>,
}

/// One search hit in the upstream's own schema.
///
/// The numeric catalog `id` becomes the record id; the separate
/// `copyrightId` is the resolution token every play-info and lyric lookup
/// requires.
#[derive(Debug, Clone, Deserialize)]
pub struct MiguMusic {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(rename = "songName", default)]
    pub song_name: Option<String>,
    #[serde(rename = "singerName", default)]
    pub singer_name: Option<String>,
    #[serde(rename = "albumName", default)]
    pub album_name: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(rename = "copyrightId", default)]
    pub copyright_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MiguPlayInfoResponse {
    #[serde(default)]
    pub data: Option<MiguPlayInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MiguPlayInfo {
    #[serde(rename = "playUrl", default)]
    pub play_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MiguLyricResponse {
    #[serde(default)]
    pub lyric: Option<String>,
}

/// Maps one upstream search hit into the unified record shape.
///
/// Hits without a numeric catalog id are dropped; missing text fields fill
/// with placeholders. The search endpoint reports no duration, so it stays 0.
pub fn track_from_music(music: MiguMusic) -> Option<Track> {
    let id = music.id?;

    Some(Track {
        id: id.to_string(),
        title: utils::non_empty_or(music.song_name, UNKNOWN_TITLE),
        artist: utils::non_empty_or(music.singer_name, UNKNOWN_ARTIST),
        album: utils::non_empty_or(music.album_name, UNKNOWN_ALBUM),
        duration: 0,
        pic: utils::ensure_https(&music.cover.unwrap_or_default()),
        url: String::new(),
        source: SourceId::Migu,
        resolution_token: music.copyright_id,
        lyric: Lyric::default(),
    })
}

/// Adapter for the Migu catalog (source tag `mg`).
///
/// Migu is the copyright-token provider: its search hits carry a
/// `copyrightId` distinct from the catalog id, and no playback URL or lyric
/// can be fetched without it. A hit whose token is empty is a song Migu
/// lists but does not license for playback.
pub struct MiguProvider {
    client: Client,
}

impl MiguProvider {
    pub fn new() -> Self {
        Self {
            client: super::upstream_client(),
        }
    }

    fn resolution_token(track: &Track) -> Option<&str> {
        track.resolution_token.as_deref().filter(|t| !t.is_empty())
    }
}

impl Default for MiguProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceProvider for MiguProvider {
    fn id(&self) -> SourceId {
        SourceId::Migu
    }

    async fn search(&self, keyword: &str, page: u32, limit: u32) -> (Vec<Track>, u64) {
        let api_url = format!(
            "{uri}/migu/remoting/scr_search_tag?keyword={keyword}&type=2&rows={rows}&pgc={page}",
            uri = &config::migu_apiurl(),
            keyword = urlencoding::encode(keyword),
            rows = limit,
            page = page,
        );

        let response = match self
            .client
            .get(&api_url)
            .header("Referer", "https://m.migu.cn/")
            .send()
            .await
        {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    warning!("Migu search returned an error status: {}", err);
                    return (Vec::new(), 0);
                }
            },
            Err(err) => {
                warning!("Migu search request failed: {}", err);
                return (Vec::new(), 0);
            }
        };

        let payload = match response.json::<MiguSearchResponse>().await {
            Ok(payload) => payload,
            Err(err) => {
                warning!("Migu search returned an unreadable body: {}", err);
                return (Vec::new(), 0);
            }
        };

        let tracks: Vec<Track> = payload
            .musics
            .unwrap_or_default()
            .into_iter()
            .filter_map(track_from_music)
            .collect();

        let total = payload.musics_count.unwrap_or(tracks.len() as u64);
        (tracks, total)
    }

    async fn resolve_url(&self, track: &Track) -> Result<PlaybackUrl, SourceError> {
        // Without a copyright token there is nothing to ask upstream; the
        // song exists but cannot be played.
        let Some(token) = Self::resolution_token(track) else {
            return Err(SourceError::PlaybackUnavailable);
        };

        let api_url = format!(
            "{uri}/v3/api/music/audioPlayer/getPlayInfo?copyrightId={token}",
            uri = &config::migu_player_apiurl(),
            token = urlencoding::encode(token),
        );

        let response = self
            .client
            .get(&api_url)
            .header("Referer", "https://music.migu.cn/v3/music/player/audio")
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|err| {
                warning!("Migu play info request failed: {}", err);
                SourceError::PlaybackUnavailable
            })?;

        let payload = response
            .json::<MiguPlayInfoResponse>()
            .await
            .map_err(|err| {
                warning!("Migu play info returned an unreadable body: {}", err);
                SourceError::PlaybackUnavailable
            })?;

        let play_url = payload
            .data
            .and_then(|info| info.play_url)
            .unwrap_or_default();
        if play_url.is_empty() {
            return Err(SourceError::PlaybackUnavailable);
        }

        Ok(PlaybackUrl {
            url: utils::ensure_https(&play_url),
            br: PLAY_INFO_BITRATE_KBPS,
        })
    }

    async fn resolve_lyric(&self, track: &Track) -> Result<Lyric, SourceError> {
        let Some(token) = Self::resolution_token(track) else {
            return Ok(Lyric::default());
        };

        let api_url = format!(
            "{uri}/v3/api/music/audioPlayer/getLyric?copyrightId={token}",
            uri = &config::migu_player_apiurl(),
            token = urlencoding::encode(token),
        );

        let response = self
            .client
            .get(&api_url)
            .header("Referer", "https://music.migu.cn/v3/music/player/audio")
            .send()
            .await?
            .error_for_status()?;

        let payload = response.json::<MiguLyricResponse>().await?;
        let text = payload.lyric.unwrap_or_default();

        // Migu has no translation channel.
        Ok(Lyric {
            blocks: utils::blocks_from_lines(&text),
            translation: String::new(),
        })
    }
}
