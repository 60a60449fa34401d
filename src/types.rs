use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Placeholder for a missing upstream title.
pub const UNKNOWN_TITLE: &str = "unknown";
/// Placeholder for a missing upstream artist name.
pub const UNKNOWN_ARTIST: &str = "unknown artist";
/// Placeholder for a missing upstream album name.
pub const UNKNOWN_ALBUM: &str = "unknown album";

/// Identifies which catalog provider produced a record.
///
/// The wire tags follow the LX Music source codes: `mg` for Migu and `wy`
/// for Netease Cloud Music.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceId {
    #[serde(rename = "mock")]
    Mock,
    #[serde(rename = "mg")]
    Migu,
    #[serde(rename = "wy")]
    Netease,
}

impl SourceId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceId::Mock => "mock",
            SourceId::Migu => "mg",
            SourceId::Netease => "wy",
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mock" => Ok(SourceId::Mock),
            "mg" | "migu" => Ok(SourceId::Migu),
            "wy" | "netease" => Ok(SourceId::Netease),
            other => Err(format!(
                "unknown provider '{}', expected one of: mock, mg, wy",
                other
            )),
        }
    }
}

/// One raw lyric line or segment, in the order the provider returned it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LyricBlock {
    pub content: String,
}

/// Provider-native lyric payload: raw blocks plus an optional translation
/// channel. Flattened into two strings at the façade boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lyric {
    pub blocks: Vec<LyricBlock>,
    pub translation: String,
}

impl Lyric {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// The full unified record, as produced by a provider at search time.
///
/// `resolution_token` is the provider-specific opaque handle some providers
/// need for a second upstream call (e.g. Migu's copyright id). It lives only
/// in the cache and is never serialized to the client.
#[derive(Debug, Clone)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Duration in whole seconds.
    pub duration: u64,
    pub pic: String,
    /// Direct playback URL when known at search time, otherwise empty until
    /// resolved.
    pub url: String,
    pub source: SourceId,
    pub resolution_token: Option<String>,
    pub lyric: Lyric,
}

/// The light projection of a [`Track`] returned by a search: the exact wire
/// shape of one entry in the `/search` result list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSummary {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: u64,
    pub pic: String,
    pub source: SourceId,
}

impl From<&Track> for TrackSummary {
    fn from(track: &Track) -> Self {
        Self {
            id: track.id.clone(),
            title: track.title.clone(),
            artist: track.artist.clone(),
            album: track.album.clone(),
            duration: track.duration,
            pic: track.pic.clone(),
            source: track.source,
        }
    }
}

/// The full record wire shape served by `/song`: the light fields plus the
/// flattened lyric pair and the playback URL known at search time (empty for
/// providers that resolve URLs on demand).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackDetail {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: u64,
    pub pic: String,
    pub lyric: String,
    pub tlyric: String,
    pub url: String,
    pub source: SourceId,
}

impl From<&Track> for TrackDetail {
    fn from(track: &Track) -> Self {
        let (lyric, tlyric) = crate::utils::flatten_lyric(&track.lyric);
        Self {
            id: track.id.clone(),
            title: track.title.clone(),
            artist: track.artist.clone(),
            album: track.album.clone(),
            duration: track.duration,
            pic: track.pic.clone(),
            lyric,
            tlyric,
            url: track.url.clone(),
            source: track.source,
        }
    }
}

/// One page of search results, echoing the requested page and limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    pub list: Vec<TrackSummary>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// A resolved playback URL with its actual bitrate in kbps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackUrl {
    pub url: String,
    pub br: u32,
}
