use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    extract::Query,
    http::{HeaderMap, StatusCode},
    response::{Html, Redirect},
    routing::get,
};
use saavnfetch::{
    error::CatalogError,
    resolver::{Resolver, Strategy},
    saavn::{Catalog, SaavnClient},
    types::Bitrate,
};

// Encrypted URLs are base64 and regularly carry these characters
const ENCRYPTED: &str = "ID2ieOjCrwfgWvL5sXl4B1ImC5QfbsDy+ab/cd==";
const USER_AGENT: &str = "saavnfetch-test";

type Seen = Arc<Mutex<Vec<HashMap<String, String>>>>;

// Helper to serve a router on a random local port
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn dead_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> &'a str {
    params.get(key).map(String::as_str).unwrap_or_default()
}

// Answers api.php the way the catalog does, keyed on `__call`
fn catalog_answer(params: &HashMap<String, String>) -> String {
    match param(params, "__call") {
        "song.getDetails" => format!(
            "({{\"123\": {{\"title\": \"Raabta\", \"primary_artists\": \"Pritam\", \"encrypted_media_url\": \"{}\"}}}})\n",
            ENCRYPTED
        ),
        "song.generateAuthToken" if param(params, "url") == ENCRYPTED && param(params, "bitrate") == "320" => {
            r#"{"auth_url": "https://aac.test/123_320.mp4?sig=1"}"#.to_string()
        }
        "song.generateAuthToken" => r#"{"auth_url": ""}"#.to_string(),
        "webapi.get" if param(params, "token") == "123" && param(params, "type") == "song" => {
            format!(r#"{{"songs": [{{"id": "123", "encrypted_media_url": "{}"}}]}}"#, ENCRYPTED)
        }
        "webapi.get" => r#"{"songs": []}"#.to_string(),
        "autocomplete.get" => {
            r#"({"songs": {"data": [{"id": "1", "title": "Tum Hi Ho"}, {"id": "2", "title": "Raabta"}]}})"#
                .to_string()
        }
        _ => "{}".to_string(),
    }
}

async fn catalog() -> (SaavnClient, Seen) {
    let seen: Seen = Arc::default();
    let recorder = seen.clone();
    let router = Router::new().route(
        "/api.php",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let recorder = recorder.clone();
            async move {
                let body = catalog_answer(&params);
                recorder.lock().unwrap().push(params);
                body
            }
        }),
    );

    let client = SaavnClient::new(serve(router).await, dead_url(), USER_AGENT).unwrap();
    (client, seen)
}

fn last_call(seen: &Seen) -> HashMap<String, String> {
    seen.lock().unwrap().last().cloned().unwrap()
}

async fn media_host() -> String {
    let router = Router::new()
        .route("/songs/1_320.mp4", get(|| async { "audio" }))
        .route("/songs/2_320.mp4", get(|| async { StatusCode::NO_CONTENT }))
        .route(
            "/songs/3_320.mp4",
            get(|| async { Redirect::temporary("/landing") }),
        )
        .route("/songs/3_160.mp4", get(|| async { "audio" }))
        .route("/landing", get(|| async { Html("<html>not a song</html>") }));
    serve(router).await
}

#[tokio::test]
async fn test_song_details_unwraps_parenthesized_keyed_body() {
    let (client, seen) = catalog().await;

    let song = client.song_details("123").await.unwrap();
    assert_eq!(song.id, "123");
    assert_eq!(song.display_name(), "Raabta - Pritam");
    assert_eq!(song.encrypted_media_url(), Some(ENCRYPTED));

    let call = last_call(&seen);
    assert_eq!(call["__call"], "song.getDetails");
    assert_eq!(call["pids"], "123");
    assert_eq!(call["_format"], "json");
}

#[tokio::test]
async fn test_song_details_without_requested_key_is_missing_field() {
    let (client, _) = catalog().await;

    let err = client.song_details("999").await.unwrap_err();
    assert!(matches!(err, CatalogError::MissingField(ref id) if id == "999"));
}

#[tokio::test]
async fn test_auth_url_sends_encrypted_url_intact() {
    let (client, seen) = catalog().await;

    let url = client.auth_url(ENCRYPTED, Bitrate::Kbps320).await.unwrap();
    assert_eq!(url.as_deref(), Some("https://aac.test/123_320.mp4?sig=1"));

    let call = last_call(&seen);
    assert_eq!(call["__call"], "song.generateAuthToken");
    assert_eq!(call["url"], ENCRYPTED);
    assert_eq!(call["bitrate"], "320");
}

#[tokio::test]
async fn test_empty_auth_url_counts_as_absent() {
    let (client, _) = catalog().await;

    let url = client.auth_url("unknown-token", Bitrate::Kbps320).await.unwrap();
    assert_eq!(url, None);
}

#[tokio::test]
async fn test_webapi_song_takes_first_song() {
    let (client, seen) = catalog().await;

    let song = client.webapi_song("123").await.unwrap().unwrap();
    assert_eq!(song.id, "123");
    assert_eq!(song.encrypted_media_url(), Some(ENCRYPTED));

    let call = last_call(&seen);
    assert_eq!(call["__call"], "webapi.get");
    assert_eq!(call["token"], "123");
    assert_eq!(call["type"], "song");

    assert!(client.webapi_song("404").await.unwrap().is_none());
}

#[tokio::test]
async fn test_autocomplete_reads_song_data() {
    let (client, seen) = catalog().await;

    let songs = client.autocomplete("tum hi ho").await.unwrap();
    let titles: Vec<&str> = songs.iter().map(|s| s.title()).collect();
    assert_eq!(titles, vec!["Tum Hi Ho", "Raabta"]);

    let call = last_call(&seen);
    assert_eq!(call["query"], "tum hi ho");
    assert_eq!(call["_marker"], "0");
}

#[tokio::test]
async fn test_catalog_error_status_is_reported() {
    let router = Router::new().route(
        "/api.php",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let client = SaavnClient::new(serve(router).await, dead_url(), USER_AGENT).unwrap();

    let err = client.song_details("123").await.unwrap_err();
    assert!(matches!(err, CatalogError::Status(status) if status == StatusCode::SERVICE_UNAVAILABLE));
}

#[tokio::test]
async fn test_catalog_calls_carry_client_headers() {
    let headers: Arc<Mutex<Option<HeaderMap>>> = Arc::default();
    let recorder = headers.clone();
    let router = Router::new().route(
        "/api.php",
        get(move |request_headers: HeaderMap| {
            let recorder = recorder.clone();
            async move {
                *recorder.lock().unwrap() = Some(request_headers);
                r#"{"songs": []}"#
            }
        }),
    );
    let client = SaavnClient::new(serve(router).await, dead_url(), USER_AGENT).unwrap();

    client.webapi_song("1").await.unwrap();

    let headers = headers.lock().unwrap().clone().unwrap();
    assert_eq!(headers["user-agent"], USER_AGENT);
    assert_eq!(headers["referer"], "https://www.jiosaavn.com/");
}

#[tokio::test]
async fn test_url_exists_only_for_200() {
    let (client, _) = catalog().await;
    let host = media_host().await;

    assert!(client.url_exists(&format!("{}/songs/1_320.mp4", host)).await);
    assert!(!client.url_exists(&format!("{}/songs/1_160.mp4", host)).await);
    assert!(!client.url_exists(&format!("{}/songs/2_320.mp4", host)).await);
    assert!(!client.url_exists(&format!("{}/songs/1_320.mp4", dead_url())).await);
}

#[tokio::test]
async fn test_url_exists_does_not_follow_redirects() {
    let (client, _) = catalog().await;
    let host = media_host().await;

    // the redirect target answers 200, but the candidate itself is a 307
    assert!(client.url_exists(&format!("{}/landing", host)).await);
    assert!(!client.url_exists(&format!("{}/songs/3_320.mp4", host)).await);
}

#[tokio::test]
async fn test_cdn_strategy_skips_redirected_candidate() {
    let (client, _) = catalog().await;
    let host = media_host().await;
    let resolver = Resolver::new(client, vec![Strategy::CdnProbe { cdn_url: host.clone() }]);

    let found = resolver.resolve("3").await.unwrap();
    assert_eq!(found.strategy, "cdn-probe");
    assert_eq!(found.url, format!("{}/songs/3_160.mp4", host));
}

#[tokio::test]
async fn test_detail_token_resolves_through_real_client() {
    let (client, seen) = catalog().await;
    let resolver = Resolver::new(client, vec![Strategy::DetailToken]);

    let found = resolver.resolve("123").await.unwrap();
    assert_eq!(found.url, "https://aac.test/123_320.mp4?sig=1");

    let calls: Vec<String> = seen
        .lock()
        .unwrap()
        .iter()
        .map(|params| params["__call"].clone())
        .collect();
    assert_eq!(calls, vec!["song.getDetails", "song.generateAuthToken"]);
}
