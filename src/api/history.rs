use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::types::SongRecord;

use super::GatewayState;

/// `POST /add_history` - appends only songs not yet in the history.
pub async fn add_history(
    Extension(state): Extension<GatewayState>,
    Json(song): Json<SongRecord>,
) -> Json<Value> {
    let mut library = state.library.lock().await;
    library.add_history(song);
    Json(json!({ "status": "ok" }))
}

/// `GET /get_history`
pub async fn get_history(Extension(state): Extension<GatewayState>) -> Json<Vec<SongRecord>> {
    let library = state.library.lock().await;
    Json(library.history().to_vec())
}
