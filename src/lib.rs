//! Tunesource Music Source Server Library
//!
//! This library implements a self-hosted music source server speaking the
//! LX Music custom source protocol. It exposes a uniform search/detail/url/
//! lyric/cover HTTP interface and maps it onto one of several third-party
//! catalog providers that differ in schema, pagination and lookup flow.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the protocol endpoints
//! - `config` - Configuration management and environment variables
//! - `error` - The client-visible error taxonomy
//! - `management` - Track cache and the catalog query façade
//! - `providers` - One adapter per upstream catalog provider
//! - `server` - HTTP server assembly and startup
//! - `types` - Data structures and type definitions
//! - `utils` - Field normalization helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tunesource::{config, management::CatalogManager, providers, server};
//!
//! #[tokio::main]
//! async fn main() -> tunesource::Res<()> {
//!     config::load_env().await?;
//!     let manager = Arc::new(CatalogManager::new(
//!         providers::active_provider()?,
//!         config::cache_capacity(),
//!     ));
//!     server::start_source_server(manager, &config::server_addr()).await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod management;
pub mod providers;
pub mod server;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for plumbing code that has no
/// place in the client-visible taxonomy (startup, configuration loading)
/// using a boxed dynamic error trait object with Send + Sync bounds for
/// async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for general status updates such as the startup banner and per-request
/// diagnostics.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Reserved for unrecoverable startup failures (bad bind address, unknown
/// provider id). Upstream trouble during request handling never goes through
/// this macro; adapters fail soft and log with [`warning!`] instead.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, most prominently upstream provider failures
/// that are absorbed into empty search results.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
