use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::{
    error::CatalogError,
    types::{AuthTokenResponse, Bitrate, SongRecord, WebapiSongResponse},
};

use super::{Catalog, SaavnClient};

#[async_trait]
impl Catalog for SaavnClient {
    async fn song_details(&self, song_id: &str) -> Result<SongRecord, CatalogError> {
        let body: Value = self
            .call(&[("__call", "song.getDetails"), ("pids", song_id)])
            .await?;

        // the detail response is keyed by the requested id
        let mut detail = body
            .get(song_id)
            .cloned()
            .ok_or_else(|| CatalogError::MissingField(song_id.to_string()))?;

        if let Some(obj) = detail.as_object_mut() {
            obj.entry("id")
                .or_insert_with(|| Value::String(song_id.to_string()));
        }

        Ok(serde_json::from_value(detail)?)
    }

    async fn auth_url(
        &self,
        encrypted_url: &str,
        bitrate: Bitrate,
    ) -> Result<Option<String>, CatalogError> {
        let bitrate = bitrate.to_string();
        let response: AuthTokenResponse = self
            .call(&[
                ("__call", "song.generateAuthToken"),
                ("url", encrypted_url),
                ("bitrate", bitrate.as_str()),
            ])
            .await?;

        Ok(response.auth_url.filter(|url| !url.trim().is_empty()))
    }

    async fn webapi_song(&self, token: &str) -> Result<Option<SongRecord>, CatalogError> {
        let response: WebapiSongResponse = self
            .call(&[("__call", "webapi.get"), ("token", token), ("type", "song")])
            .await?;

        Ok(response.songs.into_iter().next())
    }

    async fn url_exists(&self, url: &str) -> bool {
        match self.head_http.head(url).send().await {
            Ok(response) => {
                log::debug!("HEAD {} -> {}", url, response.status());
                response.status() == StatusCode::OK
            }
            Err(e) => {
                log::debug!("HEAD {} failed: {}", url, e);
                false
            }
        }
    }
}
