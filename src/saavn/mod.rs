//! # JioSaavn Catalog Module
//!
//! HTTP access to the JioSaavn catalog. The API is undocumented: responses are
//! sometimes wrapped in parentheses, field names differ between calls, and
//! media URLs come back encrypted and have to be exchanged for a fetchable URL.
//! This module hides those quirks behind [`SaavnClient`].
//!
//! ## Calls
//!
//! - [`SaavnClient::autocomplete`] - `autocomplete.get`, used by the CLI search
//! - [`SaavnClient::search_songs`] - JSON search API forwarded by the gateway
//! - [`Catalog::song_details`] - `song.getDetails`
//! - [`Catalog::auth_url`] - `song.generateAuthToken`
//! - [`Catalog::webapi_song`] - `webapi.get`
//! - [`Catalog::url_exists`] - `HEAD` check against a media URL
//!
//! The calls the resolution chain depends on sit behind the [`Catalog`] trait
//! so the chain can run against any implementation.

mod media;
mod search;

use async_trait::async_trait;
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, REFERER},
    redirect,
};
use serde::de::DeserializeOwned;

use crate::{
    config,
    error::CatalogError,
    types::{Bitrate, SongRecord},
};

const REFERER_URL: &str = "https://www.jiosaavn.com/";

/// The catalog calls the resolution chain is built on.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Full detail record for one song.
    async fn song_details(&self, song_id: &str) -> Result<SongRecord, CatalogError>;

    /// Exchanges an encrypted media URL for an authorized one. `None` when the
    /// catalog answered without an `auth_url`.
    async fn auth_url(
        &self,
        encrypted_url: &str,
        bitrate: Bitrate,
    ) -> Result<Option<String>, CatalogError>;

    /// First song of a `webapi.get` lookup, if any.
    async fn webapi_song(&self, token: &str) -> Result<Option<SongRecord>, CatalogError>;

    /// `true` only when a HEAD request answers 200. Any other status or a
    /// transport failure means the URL does not exist.
    async fn url_exists(&self, url: &str) -> bool;
}

/// reqwest-backed client for the public JioSaavn endpoints.
#[derive(Debug, Clone)]
pub struct SaavnClient {
    http: Client,
    // HEAD checks must see a redirect as a non-200 answer
    head_http: Client,
    api_url: String,
    search_api_url: String,
}

impl SaavnClient {
    pub fn new(
        api_url: impl Into<String>,
        search_api_url: impl Into<String>,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_static(REFERER_URL));

        let http = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers.clone())
            .build()?;

        let head_http = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self {
            http,
            head_http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            search_api_url: search_api_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Builds a client from the configured endpoints.
    pub fn from_env() -> Result<Self, CatalogError> {
        Self::new(
            config::saavn_api_url(),
            config::search_api_url(),
            &config::user_agent(),
        )
    }

    /// The underlying HTTP client, shared with the downloader so file transfers
    /// carry the same headers as catalog calls.
    pub fn http(&self) -> &Client {
        &self.http
    }

    fn api_php(&self) -> String {
        format!("{}/api.php", self.api_url)
    }

    /// GETs `api.php` with the given call parameters and decodes the (possibly
    /// parenthesized) JSON body.
    async fn call<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, CatalogError> {
        let response = self
            .http
            .get(self.api_php())
            .query(params)
            .query(&[("_format", "json")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(strip_wrapping(&body))?)
    }
}

/// Removes the parentheses some catalog calls wrap their JSON in.
pub fn strip_wrapping(body: &str) -> &str {
    body.trim().trim_matches(|c| c == '(' || c == ')')
}
