use serde_json::Value;

use crate::{
    error::CatalogError,
    types::{AutocompleteResponse, SongRecord},
};

use super::SaavnClient;

impl SaavnClient {
    /// Searches songs through `autocomplete.get`.
    ///
    /// Returns the records under `songs.data`; an envelope without songs is an
    /// empty result, not an error.
    ///
    /// # Example
    ///
    /// ```
    /// let songs = client.autocomplete("tum hi ho").await?;
    /// for song in songs.iter().take(5) {
    ///     println!("{}", song.display_name());
    /// }
    /// ```
    pub async fn autocomplete(&self, query: &str) -> Result<Vec<SongRecord>, CatalogError> {
        let response: AutocompleteResponse = self
            .call(&[
                ("__call", "autocomplete.get"),
                ("_marker", "0"),
                ("query", query),
            ])
            .await?;

        Ok(response.songs.data)
    }

    /// Forwards a query to the JSON search API and returns `data.results`
    /// untouched.
    ///
    /// The gateway hands these straight to the browser, so nothing is parsed
    /// beyond locating the results array.
    pub async fn search_songs(&self, query: &str) -> Result<Vec<Value>, CatalogError> {
        let response = self
            .http
            .get(format!("{}/search/songs", self.search_api_url))
            .query(&[("query", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        let body: Value = response.json().await?;
        let results = body
            .get("data")
            .and_then(|data| data.get("results"))
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Ok(results)
    }
}
