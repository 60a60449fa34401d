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

/// Bitrate requested from the player-url endpoint, in bps. The upstream may
/// answer with a lower one.
const TARGET_BITRATE_BPS: u64 = 320_000;

/// Bitrate assumed when a url candidate omits its own.
const FALLBACK_BITRATE_KBPS: u32 = 320;

#[derive(Debug, Clone, Deserialize)]
pub struct NeteaseSearchResponse {
    #[serde(default)]
    pub result: Option<NeteaseSearchResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeteaseSearchResult {
    #[serde(default)]
    pub songs: Option<Vec<NeteaseSong>>,
    #[serde(rename = "songCount", default)]
    pub song_count: Option<u64>,
}

/// One search hit in the upstream's own schema. Durations come in
/// milliseconds and cover URLs may be plain http.
#[derive(Debug, Clone, Deserialize)]
pub struct NeteaseSong {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Option<Vec<NeteaseArtist>>,
    #[serde(default)]
    pub album: Option<NeteaseAlbum>,
    /// Duration in milliseconds.
    #[serde(default)]
    pub duration: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeteaseArtist {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeteaseAlbum {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "picUrl", default)]
    pub pic_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeteaseUrlResponse {
    #[serde(default)]
    pub data: Option<Vec<NeteaseUrlCandidate>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeteaseUrlCandidate {
    #[serde(default)]
    pub url: Option<String>,
    /// Bitrate in bps.
    #[serde(default)]
    pub br: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeteaseLyricResponse {
    #[serde(default)]
    pub lrc: Option<NeteaseLyricChannel>,
    #[serde(default)]
    pub tlyric: Option<NeteaseLyricChannel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeteaseLyricChannel {
    #[serde(default)]
    pub lyric: Option<String>,
}

/// Maps one upstream search hit into the unified record shape: millisecond
/// durations floor to seconds, several artists join with `/`, and the cover
/// URL upgrades to https.
pub fn track_from_song(song: NeteaseSong) -> Track {
    let artist = song
        .artists
        .unwrap_or_default()
        .into_iter()
        .filter_map(|a| a.name)
        .filter(|name| !name.trim().is_empty())
        .collect::<Vec<_>>()
        .join("/");
    let (album_name, pic_url) = match song.album {
        Some(album) => (album.name, album.pic_url),
        None => (None, None),
    };

    Track {
        id: song.id.to_string(),
        title: utils::non_empty_or(song.name, UNKNOWN_TITLE),
        artist: if artist.is_empty() {
            UNKNOWN_ARTIST.to_string()
        } else {
            artist
        },
        album: utils::non_empty_or(album_name, UNKNOWN_ALBUM),
        duration: utils::ms_to_secs(song.duration.unwrap_or(0)),
        pic: utils::ensure_https(&pic_url.unwrap_or_default()),
        url: String::new(),
        source: SourceId::Netease,
        resolution_token: None,
        lyric: Lyric::default(),
    }
}

/// Adapter for Netease Cloud Music (source tag `wy`).
///
/// Netease is the direct multi-bitrate provider: search and playback URL are
/// independent endpoints keyed by the same numeric id, so records carry no
/// resolution token. URL resolution asks for 320 kbps and takes the first
/// candidate the upstream offers, at whatever bitrate it actually grants.
pub struct NeteaseProvider {
    client: Client,
}

impl NeteaseProvider {
    pub fn new() -> Self {
        Self {
            client: super::upstream_client(),
        }
    }
}

impl Default for NeteaseProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceProvider for NeteaseProvider {
    fn id(&self) -> SourceId {
        SourceId::Netease
    }

    async fn search(&self, keyword: &str, page: u32, limit: u32) -> (Vec<Track>, u64) {
        let api_url = format!(
            "{uri}/api/search/get?s={keyword}&type=1&limit={limit}&offset={offset}",
            uri = &config::netease_apiurl(),
            keyword = urlencoding::encode(keyword),
            limit = limit,
            offset = utils::page_offset(page, limit),
        );

        let response = match self
            .client
            .get(&api_url)
            .header("Referer", "https://music.163.com/")
            .send()
            .await
        {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    warning!("Netease search returned an error status: {}", err);
                    return (Vec::new(), 0);
                }
            },
            Err(err) => {
                warning!("Netease search request failed: {}", err);
                return (Vec::new(), 0);
            }
        };

        let payload = match response.json::<NeteaseSearchResponse>().await {
            Ok(payload) => payload,
            Err(err) => {
                warning!("Netease search returned an unreadable body: {}", err);
                return (Vec::new(), 0);
            }
        };

        let result = payload.result.unwrap_or(NeteaseSearchResult {
            songs: None,
            song_count: None,
        });
        let tracks: Vec<Track> = result
            .songs
            .unwrap_or_default()
            .into_iter()
            .map(track_from_song)
            .collect();

        let total = result.song_count.unwrap_or(tracks.len() as u64);
        (tracks, total)
    }

    async fn resolve_url(&self, track: &Track) -> Result<PlaybackUrl, SourceError> {
        let api_url = format!(
            "{uri}/api/song/enhance/player/url?ids=[{id}]&br={br}",
            uri = &config::netease_apiurl(),
            id = track.id,
            br = TARGET_BITRATE_BPS,
        );

        let response = self
            .client
            .get(&api_url)
            .header("Referer", "https://music.163.com/")
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|err| {
                warning!("Netease url request failed: {}", err);
                SourceError::PlaybackUnavailable
            })?;

        let payload = response.json::<NeteaseUrlResponse>().await.map_err(|err| {
            warning!("Netease url returned an unreadable body: {}", err);
            SourceError::PlaybackUnavailable
        })?;

        // First candidate wins; a null url means the song is not licensed
        // for playback.
        let candidate = payload
            .data
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(SourceError::PlaybackUnavailable)?;

        let url = candidate.url.unwrap_or_default();
        if url.is_empty() {
            return Err(SourceError::PlaybackUnavailable);
        }

        Ok(PlaybackUrl {
            url: utils::ensure_https(&url),
            br: candidate
                .br
                .map(utils::kbps_from_bps)
                .filter(|&br| br > 0)
                .unwrap_or(FALLBACK_BITRATE_KBPS),
        })
    }

    async fn resolve_lyric(&self, track: &Track) -> Result<Lyric, SourceError> {
        let api_url = format!(
            "{uri}/api/song/lyric?id={id}&lv=-1&tv=-1",
            uri = &config::netease_apiurl(),
            id = track.id,
        );

        let response = self
            .client
            .get(&api_url)
            .header("Referer", "https://music.163.com/")
            .send()
            .await?
            .error_for_status()?;

        let payload = response.json::<NeteaseLyricResponse>().await?;
        let text = payload.lrc.and_then(|c| c.lyric).unwrap_or_default();
        let translation = payload
            .tlyric
            .and_then(|c| c.lyric)
            .unwrap_or_default();

        Ok(Lyric {
            blocks: utils::blocks_from_lines(&text),
            translation,
        })
    }
}
