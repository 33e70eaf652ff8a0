//! Streaming downloads of resolved media URLs.
//!
//! Files are written chunk by chunk while an `indicatif` bar tracks progress.
//! A transfer that breaks off leaves the partial file where it is.

use std::path::{Path, PathBuf};

use futures::{AsyncWriteExt, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

use crate::error::DownloadError;

/// Extension of everything the catalog serves.
pub const MEDIA_EXTENSION: &str = ".mp4";

/// Bytes written per write call.
pub const CHUNK_SIZE: usize = 8192;

const ILLEGAL_CHARS: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Makes a display name safe to use as a file name.
///
/// Drops characters that are illegal on common file systems and appends
/// [`MEDIA_EXTENSION`] unless the name already ends with it.
///
/// # Example
///
/// ```
/// assert_eq!(sanitize_filename("AC/DC: Thunder?"), "ACDC Thunder.mp4");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name.chars().filter(|c| !ILLEGAL_CHARS.contains(c)).collect();
    let cleaned = cleaned.trim();

    let cleaned = if cleaned.is_empty() { "track" } else { cleaned };

    if cleaned.ends_with(MEDIA_EXTENSION) {
        cleaned.to_string()
    } else {
        format!("{}{}", cleaned, MEDIA_EXTENSION)
    }
}

/// File name for a direct-URL download: the last path segment without its
/// query string.
pub fn filename_from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

fn progress_bar(total: Option<u64>) -> ProgressBar {
    match total {
        Some(total) if total > 0 => {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::with_template(
                    "[{bar:50.green/blue}] {bytes}/{total_bytes} ({bytes_per_sec})",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
            );
            pb
        }
        _ => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::with_template("{spinner:.blue} {bytes} downloaded")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner())
                    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
            );
            pb
        }
    }
}

/// Downloads `url` into `dir` under the sanitized form of `name`.
///
/// Returns the path of the written file. A non-success status, a broken
/// connection or a failed write aborts the transfer.
///
/// # Example
///
/// ```
/// let path = download(client.http(), &url, "Kesariya - Arijit Singh", Path::new(".")).await?;
/// success!("Downloaded: {}", path.display());
/// ```
pub async fn download(
    client: &Client,
    url: &str,
    name: &str,
    dir: &Path,
) -> Result<PathBuf, DownloadError> {
    let path = dir.join(sanitize_filename(name));

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(DownloadError::Status(response.status()));
    }

    let io_err = |source: std::io::Error| DownloadError::Io {
        path: path.clone(),
        source,
    };

    async_fs::create_dir_all(dir).await.map_err(io_err)?;
    let mut file = async_fs::File::create(&path).await.map_err(io_err)?;

    let pb = progress_bar(response.content_length());
    let mut downloaded: u64 = 0;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                pb.abandon();
                return Err(e.into());
            }
        };

        for piece in chunk.chunks(CHUNK_SIZE) {
            file.write_all(piece).await.map_err(io_err)?;
            downloaded += piece.len() as u64;
            pb.set_position(downloaded);
        }
    }

    file.flush().await.map_err(io_err)?;
    pb.finish_and_clear();
    log::debug!("Wrote {} bytes to {}", downloaded, path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_existing_extension() {
        assert_eq!(sanitize_filename("song.mp4"), "song.mp4");
    }

    #[test]
    fn empty_name_gets_placeholder() {
        assert_eq!(sanitize_filename("?*"), "track.mp4");
    }

    #[test]
    fn url_name_drops_query() {
        assert_eq!(
            filename_from_url("https://aac.saavncdn.com/songs/abc_320.mp4?token=1"),
            "abc_320.mp4"
        );
    }
}
