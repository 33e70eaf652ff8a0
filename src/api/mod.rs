//! # API Module
//!
//! HTTP endpoints of the search gateway. The gateway is a thin layer: search
//! requests are forwarded to the catalog's JSON search API, and favorites and
//! history are kept in an in-memory [`Library`] for the lifetime of the
//! process.
//!
//! ## Endpoints
//!
//! ### Catalog
//!
//! - [`search`] - `GET /search?q=` returns `{"results": [...]}` straight from
//!   the search API, or an empty list when the query is empty or the upstream
//!   call fails.
//!
//! ### Favorites
//!
//! - [`add_favorite`] - `POST /add_favorite` with a song record
//! - [`remove_favorite`] - `POST /remove_favorite` with `{"id": ...}`
//! - [`get_favorites`] - `GET /get_favorites`
//!
//! ### History
//!
//! - [`add_history`] - `POST /add_history` with a song record
//! - [`get_history`] - `GET /get_history`
//!
//! ### Monitoring
//!
//! - [`health`] - status, version and library size
//!
//! ## State
//!
//! Handlers receive a [`GatewayState`] through an axum `Extension`. The
//! library sits behind a tokio `Mutex`, so concurrent requests mutate it one
//! at a time.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::get};
//! use saavnfetch::api::{GatewayState, search};
//!
//! let app = Router::new()
//!     .route("/search", get(search))
//!     .layer(Extension(GatewayState::new(catalog)));
//! ```

mod favorites;
mod health;
mod history;
mod index;
mod search;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{management::Library, saavn::SaavnClient};

pub use favorites::{add_favorite, get_favorites, remove_favorite};
pub use health::health;
pub use history::{add_history, get_history};
pub use index::index;
pub use search::search;

/// Shared state handed to every gateway handler.
#[derive(Clone)]
pub struct GatewayState {
    pub library: Arc<Mutex<Library>>,
    pub catalog: SaavnClient,
}

impl GatewayState {
    pub fn new(catalog: SaavnClient) -> Self {
        Self {
            library: Arc::new(Mutex::new(Library::new())),
            catalog,
        }
    }
}
