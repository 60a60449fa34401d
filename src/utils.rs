use crate::types::{Lyric, LyricBlock};

/// Upgrades `http://` and scheme-relative `//` URLs to `https://`.
/// Anything else (already-https, empty, data URLs) passes through unchanged.
pub fn ensure_https(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("http://") {
        format!("https://{}", rest)
    } else if let Some(rest) = url.strip_prefix("//") {
        format!("https://{}", rest)
    } else {
        url.to_string()
    }
}

/// Floor-converts an upstream millisecond duration to whole seconds.
pub fn ms_to_secs(ms: u64) -> u64 {
    ms / 1000
}

/// Converts a bitrate reported in bits per second to kbps.
pub fn kbps_from_bps(bps: u64) -> u32 {
    (bps / 1000) as u32
}

/// Offset for a 1-based page: `(page - 1) * limit`, saturating at page 0.
/// Computed in u64 since both factors are client-supplied.
pub fn page_offset(page: u32, limit: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(limit)
}

/// Returns the value when present and non-blank, otherwise the placeholder.
pub fn non_empty_or(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => placeholder.to_string(),
    }
}

/// Splits a multi-line lyric document into one block per line.
pub fn blocks_from_lines(text: &str) -> Vec<LyricBlock> {
    text.lines()
        .map(|line| LyricBlock {
            content: line.to_string(),
        })
        .collect()
}

/// Flattens a provider-native lyric payload into the two wire strings:
/// every block's content followed by a newline, in provider order, plus the
/// translation channel (empty when the provider has none).
pub fn flatten_lyric(lyric: &Lyric) -> (String, String) {
    let mut text = String::new();
    for block in &lyric.blocks {
        text.push_str(&block.content);
        text.push('\n');
    }
    (text, lyric.translation.clone())
}
