use crate::{
    saavn::Catalog,
    types::{Bitrate, SongRecord},
};

use super::StrategyOutcome;

/// One self-contained way of finding a media URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// `song.getDetails`, then exchange the encrypted media URL for an
    /// authorized one. Falls back to probing bitrate variants of the preview
    /// URL when the exchange yields nothing.
    DetailToken,
    /// `webapi.get` with the id as token, then the same exchange.
    WebapiLookup,
    /// Probe constructed CDN URLs down the bitrate ladder.
    CdnProbe { cdn_url: String },
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DetailToken => "detail-token",
            Strategy::WebapiLookup => "webapi-lookup",
            Strategy::CdnProbe { .. } => "cdn-probe",
        }
    }

    pub async fn attempt(&self, catalog: &dyn Catalog, song_id: &str) -> StrategyOutcome {
        match self {
            Strategy::DetailToken => detail_token(catalog, song_id).await,
            Strategy::WebapiLookup => webapi_lookup(catalog, song_id).await,
            Strategy::CdnProbe { cdn_url } => {
                let candidates = cdn_candidates(cdn_url, song_id);
                match first_existing(catalog, candidates).await {
                    Some(url) => StrategyOutcome::Found(url),
                    None => StrategyOutcome::NotFound,
                }
            }
        }
    }
}

async fn detail_token(catalog: &dyn Catalog, song_id: &str) -> StrategyOutcome {
    match catalog.song_details(song_id).await {
        Ok(detail) => exchange_detail(catalog, &detail).await,
        Err(e) => e.into(),
    }
}

/// The detail-token exchange for a record that has already been fetched.
pub(super) async fn exchange_detail(catalog: &dyn Catalog, detail: &SongRecord) -> StrategyOutcome {
    let Some(encrypted) = detail.encrypted_media_url() else {
        return StrategyOutcome::NotFound;
    };

    match catalog.auth_url(encrypted, Bitrate::Kbps320).await {
        Ok(Some(url)) => StrategyOutcome::Found(url),
        Ok(None) => {
            let Some(preview) = detail.media_preview_url() else {
                return StrategyOutcome::NotFound;
            };
            match first_existing(catalog, preview_candidates(preview)).await {
                Some(url) => StrategyOutcome::Found(url),
                None => StrategyOutcome::NotFound,
            }
        }
        Err(e) => e.into(),
    }
}

async fn webapi_lookup(catalog: &dyn Catalog, song_id: &str) -> StrategyOutcome {
    let song = match catalog.webapi_song(song_id).await {
        Ok(Some(song)) => song,
        Ok(None) => return StrategyOutcome::NotFound,
        Err(e) => return e.into(),
    };

    let Some(encrypted) = song.encrypted_media_url() else {
        return StrategyOutcome::NotFound;
    };

    match catalog.auth_url(encrypted, Bitrate::Kbps320).await {
        Ok(Some(url)) => StrategyOutcome::Found(url),
        Ok(None) => StrategyOutcome::NotFound,
        Err(e) => e.into(),
    }
}

/// HEAD-probes candidates in order and returns the first that exists.
/// Nothing after the first hit is probed.
pub async fn first_existing(
    catalog: &dyn Catalog,
    candidates: impl IntoIterator<Item = String>,
) -> Option<String> {
    for candidate in candidates {
        if catalog.url_exists(&candidate).await {
            return Some(candidate);
        }
    }
    None
}

/// Bitrate variants of a preview URL.
///
/// Swaps the `preview` host for `aac` and the `_96.mp4` suffix for each rung
/// of the bitrate ladder. This follows the CDN's naming as last observed and
/// is best effort only.
pub fn preview_candidates(preview_url: &str) -> Vec<String> {
    let base = preview_url.replace("preview", "aac");
    let mut candidates: Vec<String> = Bitrate::LADDER
        .iter()
        .map(|bitrate| base.replace("_96.mp4", &format!("_{}.mp4", bitrate)))
        .collect();
    // without a `_96.mp4` marker every variant is the same URL
    candidates.dedup();
    candidates
}

/// CDN URLs for a song id, highest bitrate first. Any `_` suffix on a
/// composite id is dropped.
pub fn cdn_candidates(cdn_url: &str, song_id: &str) -> Vec<String> {
    let base_id = song_id.split('_').next().unwrap_or(song_id);
    Bitrate::LADDER
        .iter()
        .map(|bitrate| {
            format!(
                "{cdn}/songs/{id}_{bitrate}.mp4",
                cdn = cdn_url.trim_end_matches('/'),
                id = base_id,
                bitrate = bitrate
            )
        })
        .collect()
}
