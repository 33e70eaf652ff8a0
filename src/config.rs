//! Configuration management for saavnfetch.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every value has a default, so the tool works out of
//! the box against the public JioSaavn endpoints; the variables exist to point the
//! client at mirrors or to change where files land.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_SAAVN_API_URL: &str = "https://www.jiosaavn.com";
pub const DEFAULT_SAAVN_CDN_URL: &str = "https://aac.saavncdn.com";
pub const DEFAULT_SEARCH_API_URL: &str = "https://jiosaavn-api-privatecvc2.vercel.app";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `saavnfetch` directory under the platform-specific local data
/// directory if needed and loads `saavnfetch/.env` from it:
/// - Linux: `~/.local/share/saavnfetch/.env`
/// - macOS: `~/Library/Application Support/saavnfetch/.env`
/// - Windows: `%LOCALAPPDATA%/saavnfetch/.env`
///
/// A missing `.env` file is fine, the defaults apply. A file that exists but
/// cannot be parsed is reported as an error.
///
/// # Example
///
/// ```
/// use saavnfetch::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("saavnfetch/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())
}

fn var_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

/// Address the search gateway binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Base URL of the JioSaavn `api.php` host (`SAAVN_API_URL`).
pub fn saavn_api_url() -> String {
    var_or("SAAVN_API_URL", DEFAULT_SAAVN_API_URL)
}

/// Base URL of the media CDN probed by the last resolution strategy (`SAAVN_CDN_URL`).
pub fn saavn_cdn_url() -> String {
    var_or("SAAVN_CDN_URL", DEFAULT_SAAVN_CDN_URL)
}

/// Base URL of the JSON search API the gateway forwards to (`SEARCH_API_URL`).
pub fn search_api_url() -> String {
    var_or("SEARCH_API_URL", DEFAULT_SEARCH_API_URL)
}

/// User-Agent sent with every catalog request (`SAAVNFETCH_USER_AGENT`).
///
/// The catalog rejects requests that do not look like they come from a browser.
pub fn user_agent() -> String {
    var_or("SAAVNFETCH_USER_AGENT", DEFAULT_USER_AGENT)
}

/// Directory downloads are written to (`SAAVNFETCH_DOWNLOAD_DIR`), the working
/// directory by default.
pub fn download_dir() -> PathBuf {
    PathBuf::from(var_or("SAAVNFETCH_DOWNLOAD_DIR", "."))
}
