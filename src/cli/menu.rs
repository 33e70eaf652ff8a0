use dialoguer::{Confirm, Input};

use crate::{download, info, success, types::SongRecord, warning};

use super::Session;

/// Number of search results offered for selection.
const MAX_CHOICES: usize = 5;

/// Runs the interactive menu until the user quits.
///
/// Every failure inside an option is reported and leads back to the menu.
/// Only an unreadable terminal ends the loop early.
pub async fn menu(session: &Session) {
    info!("Free Music Downloader");

    loop {
        println!();
        println!("Options:");
        println!("1. Search and download a song");
        println!("2. Download with direct URL");
        println!("3. Quit");

        let Some(choice) = prompt("Enter your choice (1-3)") else {
            break;
        };

        match choice.parse::<u32>() {
            Ok(1) => search_and_download(session).await,
            Ok(2) => direct_download(session).await,
            Ok(3) => {
                success!("Thank you for using saavnfetch! Goodbye!");
                break;
            }
            Ok(_) => warning!("Invalid choice. Please enter 1, 2, or 3."),
            Err(_) => warning!("Please enter a number"),
        }
    }
}

async fn search_and_download(session: &Session) {
    let Some(query) = prompt("Enter song name") else {
        return;
    };
    if query.is_empty() {
        warning!("Please enter a song name");
        return;
    }

    info!("Searching for songs...");
    let songs = session.search(&query).await;
    if songs.is_empty() {
        warning!("No songs found");
        return;
    }

    println!();
    println!("Search Results:");
    for (i, song) in songs.iter().take(MAX_CHOICES).enumerate() {
        println!("{}. {}", i + 1, song.display_name());
    }

    let shown = songs.len().min(MAX_CHOICES);
    let Some(selected) = select_song(&songs[..shown]) else {
        return;
    };

    info!("Selected: {} by {}", selected.title(), selected.artists());
    if let Some(path) = session.download_song(selected, None).await {
        offer_playback(session, &path);
    }
}

fn select_song(songs: &[SongRecord]) -> Option<&SongRecord> {
    let answer = prompt(&format!("Select song (1-{}) or 0 to cancel", songs.len()))?;
    match answer.parse::<usize>() {
        Ok(0) => None,
        Ok(n) if n <= songs.len() => songs.get(n - 1),
        _ => {
            warning!("Invalid selection");
            None
        }
    }
}

async fn direct_download(session: &Session) {
    let Some(url) = prompt("Enter direct MP4 URL") else {
        return;
    };
    if !url.starts_with("http") {
        warning!("Please enter a valid URL");
        return;
    }

    let Some(custom) = prompt("Enter custom filename (leave blank for auto)") else {
        return;
    };
    let name = if custom.is_empty() {
        download::filename_from_url(&url)
    } else {
        custom
    };

    if let Some(path) = session.download(&url, &name).await {
        offer_playback(session, &path);
    }
}

fn offer_playback(session: &Session, path: &std::path::Path) {
    let play = Confirm::new()
        .with_prompt("Do you want to play this song now?")
        .default(false)
        .interact()
        .unwrap_or(false);

    if play {
        session.play(path);
    }
}

/// Reads one trimmed line. `None` when the terminal cannot be read.
fn prompt(text: &str) -> Option<String> {
    match Input::<String>::new()
        .with_prompt(text)
        .allow_empty(true)
        .interact_text()
    {
        Ok(answer) => Some(answer.trim().to_string()),
        Err(e) => {
            warning!("Cannot read input: {}", e);
            None
        }
    }
}
