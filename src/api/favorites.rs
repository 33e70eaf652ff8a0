use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::types::{SongRecord, SongRef};

use super::GatewayState;

/// `POST /add_favorite` - adding a song twice keeps a single entry.
pub async fn add_favorite(
    Extension(state): Extension<GatewayState>,
    Json(song): Json<SongRecord>,
) -> Json<Value> {
    let mut library = state.library.lock().await;
    library.add_favorite(song);
    Json(json!({ "status": "ok" }))
}

/// `POST /remove_favorite` - removing an unknown id is a no-op.
pub async fn remove_favorite(
    Extension(state): Extension<GatewayState>,
    Json(song): Json<SongRef>,
) -> Json<Value> {
    let mut library = state.library.lock().await;
    library.remove_favorite(&song.id);
    Json(json!({ "status": "ok" }))
}

/// `GET /get_favorites`
pub async fn get_favorites(Extension(state): Extension<GatewayState>) -> Json<Vec<SongRecord>> {
    let library = state.library.lock().await;
    Json(library.favorites().to_vec())
}
