use std::path::PathBuf;

use axum::{Router, routing::get};
use reqwest::{Client, StatusCode};
use saavnfetch::{
    download::{MEDIA_EXTENSION, download, filename_from_url, sanitize_filename},
    error::DownloadError,
};

// Helper to serve a router on a random local port
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "saavnfetch-test-{}-{}",
        std::process::id(),
        name
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_sanitize_removes_illegal_characters() {
    let name = sanitize_filename(r#"A\B/C*D?E:F"G<H>I|J"#);

    for c in ['\\', '/', '*', '?', ':', '"', '<', '>', '|'] {
        assert!(!name.contains(c), "{} still contains {:?}", name, c);
    }
    assert_eq!(name, "ABCDEFGHIJ.mp4");
    assert!(name.ends_with(MEDIA_EXTENSION));
}

#[test]
fn test_sanitize_keeps_display_characters() {
    assert_eq!(
        sanitize_filename("Kesariya - Arijit Singh, Pritam"),
        "Kesariya - Arijit Singh, Pritam.mp4"
    );
    assert_eq!(sanitize_filename("  spaced  "), "spaced.mp4");
}

#[test]
fn test_filename_from_url_variants() {
    assert_eq!(filename_from_url("https://cdn.test/a/b/song_160.mp4"), "song_160.mp4");
    assert_eq!(
        filename_from_url("https://cdn.test/song.mp4?Expires=1&Signature=x"),
        "song.mp4"
    );
    assert_eq!(filename_from_url("https://cdn.test/dir/"), "dir");
}

#[tokio::test]
async fn test_download_writes_whole_body_under_sanitized_name() {
    let body: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();
    let expected = body.clone();
    let base = serve(Router::new().route("/song.mp4", get(move || async move { body }))).await;
    let dir = scratch_dir("whole");

    let path = download(
        &Client::new(),
        &format!("{}/song.mp4", base),
        "AC/DC: Back <In> Black?",
        &dir,
    )
    .await
    .unwrap();

    assert_eq!(path, dir.join("ACDC Back In Black.mp4"));
    assert_eq!(std::fs::read(&path).unwrap(), expected);

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_download_non_success_status_fails() {
    let base = serve(Router::new()).await;
    let dir = scratch_dir("missing");

    let err = download(&Client::new(), &format!("{}/nope.mp4", base), "nope", &dir)
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::Status(StatusCode::NOT_FOUND)));
    assert!(!dir.join("nope.mp4").exists());
}

#[tokio::test]
async fn test_download_connection_error_fails() {
    // bind then drop to get a port nobody listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = download(
        &Client::new(),
        &format!("http://{}/song.mp4", addr),
        "song",
        &scratch_dir("refused"),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, DownloadError::Transport(_)));
}
