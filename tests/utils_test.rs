use tunesource::types::{Lyric, LyricBlock};
use tunesource::utils::*;

#[test]
fn test_ensure_https_upgrades_plain_http() {
    assert_eq!(ensure_https("http://x/y.jpg"), "https://x/y.jpg");
}

#[test]
fn test_ensure_https_upgrades_scheme_relative() {
    assert_eq!(
        ensure_https("//p1.music.126.net/cover.jpg"),
        "https://p1.music.126.net/cover.jpg"
    );
}

#[test]
fn test_ensure_https_leaves_https_and_empty_alone() {
    assert_eq!(ensure_https("https://x/y.jpg"), "https://x/y.jpg");
    assert_eq!(ensure_https(""), "");
}

#[test]
fn test_ms_to_secs_floors() {
    assert_eq!(ms_to_secs(267000), 267);
    assert_eq!(ms_to_secs(267999), 267);
    assert_eq!(ms_to_secs(999), 0);
    assert_eq!(ms_to_secs(0), 0);
}

#[test]
fn test_kbps_from_bps() {
    assert_eq!(kbps_from_bps(320000), 320);
    assert_eq!(kbps_from_bps(128000), 128);
    assert_eq!(kbps_from_bps(0), 0);
}

#[test]
fn test_page_offset_is_one_based() {
    assert_eq!(page_offset(1, 20), 0);
    assert_eq!(page_offset(2, 20), 20);
    assert_eq!(page_offset(3, 30), 60);

    // page 0 is treated like page 1 instead of underflowing
    assert_eq!(page_offset(0, 20), 0);
}

#[test]
fn test_page_offset_survives_absurd_pages() {
    // A hostile page number must not wrap; the bogus-but-honest offset goes
    // upstream, where it simply finds no results.
    assert_eq!(page_offset(4_000_000_000, 20), 3_999_999_999u64 * 20);
    assert_eq!(page_offset(u32::MAX, u32::MAX), (u32::MAX as u64 - 1) * u32::MAX as u64);
}

#[test]
fn test_non_empty_or_fills_placeholders() {
    assert_eq!(non_empty_or(None, "unknown artist"), "unknown artist");
    assert_eq!(
        non_empty_or(Some(String::new()), "unknown artist"),
        "unknown artist"
    );
    assert_eq!(
        non_empty_or(Some("   ".to_string()), "unknown artist"),
        "unknown artist"
    );
    assert_eq!(non_empty_or(Some("周杰伦".to_string()), "unknown artist"), "周杰伦");
}

#[test]
fn test_blocks_from_lines_keeps_provider_order() {
    let blocks = blocks_from_lines("[00:00.00]first\n[00:05.00]second");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].content, "[00:00.00]first");
    assert_eq!(blocks[1].content, "[00:05.00]second");
}

#[test]
fn test_flatten_lyric_appends_newline_per_block() {
    let lyric = Lyric {
        blocks: blocks_from_lines("[00:00.00]first\n[00:05.00]second"),
        translation: "[00:00.00]erste".to_string(),
    };

    let (text, translation) = flatten_lyric(&lyric);
    assert_eq!(text, "[00:00.00]first\n[00:05.00]second\n");
    assert_eq!(translation, "[00:00.00]erste");
}

#[test]
fn test_flatten_lyric_empty_payload() {
    let (text, translation) = flatten_lyric(&Lyric::default());
    assert_eq!(text, "");
    assert_eq!(translation, "");
}

#[test]
fn test_flatten_lyric_single_block() {
    let lyric = Lyric {
        blocks: vec![LyricBlock {
            content: "[00:00.00]only".to_string(),
        }],
        translation: String::new(),
    };

    let (text, translation) = flatten_lyric(&lyric);
    assert_eq!(text, "[00:00.00]only\n");
    assert_eq!(translation, "");
}
