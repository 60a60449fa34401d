//! Configuration management for the tunesource server.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage runtime parameters: the bind address, the active catalog provider,
//! cache sizing, upstream timeouts and upstream base URLs.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults
//!
//! Unlike credentials-driven tools, every value here has a default: a server
//! started with no configuration at all binds to `0.0.0.0:6000` and serves
//! the built-in mock catalog.

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `tunesource/.env`:
/// - Linux: `~/.local/share/tunesource/.env`
/// - macOS: `~/Library/Application Support/tunesource/.env`
/// - Windows: `%LOCALAPPDATA%/tunesource/.env`
///
/// A missing `.env` file is not an error; all settings then come from the
/// process environment or the built-in defaults.
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tunesource/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the address and port the HTTP server binds to.
///
/// Read from `SERVER_ADDRESS`; defaults to `0.0.0.0:6000`, the port the LX
/// Music client examples use for custom sources.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "0.0.0.0:6000".to_string())
}

/// Returns the identifier of the active catalog provider.
///
/// Read from `SOURCE_PROVIDER`; one of `mock`, `mg` or `wy`. Defaults to
/// `mock`. Exactly one provider is active per server instance; the value is
/// parsed into a [`crate::types::SourceId`] at startup.
pub fn source_provider() -> String {
    env::var("SOURCE_PROVIDER").unwrap_or_else(|_| "mock".to_string())
}

/// Returns the capacity of the in-process track cache.
///
/// Read from `TRACK_CACHE_CAPACITY`; defaults to 1000 entries. Tracks evicted
/// from the cache must be searched again before detail, url or lyric requests
/// for them can succeed.
pub fn cache_capacity() -> usize {
    env::var("TRACK_CACHE_CAPACITY")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1000)
}

/// Returns the timeout in seconds applied to every upstream provider request.
///
/// Read from `UPSTREAM_TIMEOUT_SECS`; defaults to 10 seconds. A request that
/// exceeds the timeout is treated as a soft upstream failure, not a crash.
pub fn upstream_timeout_secs() -> u64 {
    env::var("UPSTREAM_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10)
}

/// Returns the base URL for the Migu search API.
///
/// Read from `MIGU_API_URL`; defaults to `https://m.migu.cn`.
pub fn migu_apiurl() -> String {
    env::var("MIGU_API_URL").unwrap_or_else(|_| "https://m.migu.cn".to_string())
}

/// Returns the base URL for the Migu audio player API (play info and lyric).
///
/// Read from `MIGU_PLAYER_API_URL`; defaults to `https://music.migu.cn`.
pub fn migu_player_apiurl() -> String {
    env::var("MIGU_PLAYER_API_URL").unwrap_or_else(|_| "https://music.migu.cn".to_string())
}

/// Returns the base URL for the Netease Cloud Music API.
///
/// Read from `NETEASE_API_URL`; defaults to `https://music.163.com`.
pub fn netease_apiurl() -> String {
    env::var("NETEASE_API_URL").unwrap_or_else(|_| "https://music.163.com".to_string())
}
