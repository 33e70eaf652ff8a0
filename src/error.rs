use std::path::PathBuf;

use thiserror::Error;

/// Failures talking to the catalog API.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Catalog answered with HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Catalog response is missing `{0}`")]
    MissingField(String),
}

/// The resolution chain ran out of strategies.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("No playable URL found for song {0}")]
    Exhausted(String),

    #[error("Song id must not be empty")]
    EmptyId,
}

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("Download request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server answered with HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("Could not find a suitable media player. Please install one of: {0}")]
    NoPlayer(String),

    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported platform: {0}")]
    Unsupported(String),
}
