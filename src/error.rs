use thiserror::Error;

/// The client-visible outcome taxonomy of the source protocol.
///
/// Every variant maps onto a `success: false` envelope with an HTTP status of
/// 200; the protocol never surfaces raw 5xx responses for upstream trouble.
#[derive(Error, Debug)]
pub enum SourceError {
    /// A required query parameter was absent; no upstream call was attempted.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// The identifier is not in the track cache: the client asked for
    /// enrichment before searching, after a restart, or after the entry was
    /// evicted.
    #[error("song not found, search it first")]
    NotFound,

    /// The upstream was reachable but offered no usable playback URL,
    /// commonly a licensing restriction. Deliberately distinct from
    /// [`SourceError::NotFound`].
    #[error("song has no playable url (possibly copyright restricted)")]
    PlaybackUnavailable,

    /// Transport error, timeout or non-success upstream status. Absorbed
    /// before reaching the wire: searches turn it into an empty result set
    /// and lyric resolution into empty lyrics.
    #[error("upstream provider error: {0}")]
    Upstream(String),
}

impl SourceError {
    /// Numeric code carried in the failure envelope.
    pub fn code(&self) -> i64 {
        -1
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Upstream(err.to_string())
    }
}
