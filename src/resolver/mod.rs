//! # Resolution Chain
//!
//! Turns a song id into a directly downloadable media URL.
//!
//! The catalog offers several undocumented ways to get at a song's media, and
//! none of them works for every song. The [`Resolver`] therefore runs an
//! ordered list of [`Strategy`] values and stops at the first one that finds a
//! URL:
//!
//! ```text
//! detail-token   song.getDetails -> generateAuthToken (-> preview ladder)
//!      ↓ NotFound / TransportError
//! webapi-lookup  webapi.get -> generateAuthToken
//!      ↓ NotFound / TransportError
//! cdn-probe      HEAD {cdn}/songs/{id}_{320,160,96}.mp4
//!      ↓
//! Exhausted
//! ```
//!
//! Every strategy reports a [`StrategyOutcome`]. Failures are logged and the
//! driver moves on; nothing a strategy does can abort the chain.

mod strategy;

pub use strategy::Strategy;

use strategy::exchange_detail;

use crate::{
    config,
    error::{CatalogError, ResolveError},
    saavn::Catalog,
    types::SongRecord,
};

/// Result of one strategy attempt.
#[derive(Debug)]
pub enum StrategyOutcome {
    Found(String),
    NotFound,
    TransportError(CatalogError),
}

impl From<CatalogError> for StrategyOutcome {
    fn from(err: CatalogError) -> Self {
        match err {
            // an absent key is an empty answer, not a broken call
            CatalogError::MissingField(_) => StrategyOutcome::NotFound,
            other => StrategyOutcome::TransportError(other),
        }
    }
}

/// A resolved media URL and the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub strategy: &'static str,
    pub url: String,
}

pub struct Resolver<C> {
    catalog: C,
    strategies: Vec<Strategy>,
}

impl<C: Catalog> Resolver<C> {
    pub fn new(catalog: C, strategies: Vec<Strategy>) -> Self {
        Self {
            catalog,
            strategies,
        }
    }

    /// The standard chain: detail token exchange, webapi lookup, then CDN
    /// probing against the configured CDN.
    pub fn with_default_strategies(catalog: C) -> Self {
        Self::new(
            catalog,
            vec![
                Strategy::DetailToken,
                Strategy::WebapiLookup,
                Strategy::CdnProbe {
                    cdn_url: config::saavn_cdn_url(),
                },
            ],
        )
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Runs the strategies in order and returns the first URL found.
    ///
    /// Returns [`ResolveError::Exhausted`] once every strategy has reported
    /// `NotFound` or `TransportError`.
    pub async fn resolve(&self, song_id: &str) -> Result<Resolution, ResolveError> {
        self.run(song_id, None).await
    }

    /// Same chain for a song whose `song.getDetails` record is already at
    /// hand. `detail-token` works from that record instead of fetching it
    /// again; the other strategies run unchanged on its id.
    pub async fn resolve_detail(&self, detail: &SongRecord) -> Result<Resolution, ResolveError> {
        self.run(&detail.id, Some(detail)).await
    }

    async fn run(
        &self,
        song_id: &str,
        detail: Option<&SongRecord>,
    ) -> Result<Resolution, ResolveError> {
        let song_id = song_id.trim();
        if song_id.is_empty() {
            return Err(ResolveError::EmptyId);
        }

        for strategy in &self.strategies {
            log::debug!("Trying {} for {}", strategy.name(), song_id);

            let outcome = match (strategy, detail) {
                (Strategy::DetailToken, Some(detail)) => {
                    exchange_detail(&self.catalog, detail).await
                }
                _ => strategy.attempt(&self.catalog, song_id).await,
            };

            match outcome {
                StrategyOutcome::Found(url) => {
                    log::info!("{} resolved {} to {}", strategy.name(), song_id, url);
                    return Ok(Resolution {
                        strategy: strategy.name(),
                        url,
                    });
                }
                StrategyOutcome::NotFound => {
                    log::debug!("{} found nothing for {}", strategy.name(), song_id);
                }
                StrategyOutcome::TransportError(e) => {
                    log::warn!("{} failed for {}: {}", strategy.name(), song_id, e);
                }
            }
        }

        Err(ResolveError::Exhausted(song_id.to_string()))
    }
}
