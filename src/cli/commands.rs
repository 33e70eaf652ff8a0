use tabled::Table;

use crate::{
    api::GatewayState,
    config, info,
    saavn::SaavnClient,
    server, success,
    types::{SongRecord, SongTableRow},
    warning,
};

use super::Session;

/// Prints catalog search results as a table.
pub async fn search(session: &Session, query: &str) {
    let songs = session.search(query).await;
    if songs.is_empty() {
        warning!("No songs found");
        return;
    }

    let rows: Vec<SongTableRow> = songs
        .iter()
        .enumerate()
        .map(|(i, song)| SongTableRow::from_record(i + 1, song))
        .collect();
    println!("{}", Table::new(rows));
}

/// Prints the media URL for a song id and the strategy that found it.
pub async fn resolve(session: &Session, song_id: &str) {
    if let Some(resolution) = session.resolve(song_id).await {
        success!("{} (via {})", resolution.url, resolution.strategy);
    }
}

/// Resolves and downloads a song by id.
pub async fn download(session: &Session, song_id: &str, name: Option<String>, play: bool) {
    let downloaded = match session.lookup(song_id).await {
        Some(detail) => session.download_detail(&detail, name.as_deref()).await,
        None => {
            // without a known title the id is a better file name than "Unknown"
            let name = name.unwrap_or_else(|| song_id.to_string());
            session
                .download_song(&SongRecord::new(song_id), Some(&name))
                .await
        }
    };
    if let Some(path) = downloaded {
        if play {
            session.play(&path);
        }
    }
}

/// Downloads a direct media URL.
pub async fn fetch(session: &Session, url: &str, name: Option<String>, play: bool) {
    if !url.starts_with("http") {
        warning!("Please enter a valid URL");
        return;
    }

    let name = name.unwrap_or_else(|| crate::download::filename_from_url(url));
    if let Some(path) = session.download(url, &name).await {
        if play {
            session.play(&path);
        }
    }
}

/// Runs the search gateway until the process is stopped.
pub async fn serve(client: SaavnClient, addr: Option<String>) {
    let addr = addr.unwrap_or_else(config::server_addr);
    info!("Starting search gateway...");
    server::start_api_server(&addr, GatewayState::new(client)).await;
}
